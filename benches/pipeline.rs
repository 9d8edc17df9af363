use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cipher_chain::{run_pipeline, CipherKind, KeyFormat, Mode, Stage};

fn bench_block_cipher(c: &mut Criterion) {
    let stages = vec![Stage::new(
        "aes1",
        CipherKind::Aes {
            key: "mysecretkey12345".into(),
            format: KeyFormat::Text,
        },
        true,
    )];
    let plaintext = "The quick brown fox jumps over the lazy dog";

    c.bench_function("block cipher encrypt", |b| {
        b.iter(|| run_pipeline(black_box(plaintext), &stages, Mode::Encrypt))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let stages = vec![
        Stage::new(
            "vigenere1",
            CipherKind::Vigenere {
                key: "CIPHER".into(),
            },
            true,
        ),
        Stage::new(
            "autokey1",
            CipherKind::Autokey {
                key: "SECRET".into(),
            },
            true,
        ),
        Stage::new(
            "aes1",
            CipherKind::Aes {
                key: "mysecretkey12345".into(),
                format: KeyFormat::Text,
            },
            true,
        ),
    ];
    let plaintext = "DEFENDTHEEASTWALLOFTHECASTLE";

    c.bench_function("three stage encrypt", |b| {
        b.iter(|| run_pipeline(black_box(plaintext), &stages, Mode::Encrypt))
    });
}

criterion_group!(benches, bench_block_cipher, bench_full_pipeline);
criterion_main!(benches);
