use clap::{Parser, ValueEnum};
use cipher_chain::{run_pipeline, CipherKind, KeyFormat, Mode, Stage};

/// Command-line arguments for the cipher pipeline program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Cipher stages, applied in the given order (reversed when decrypting).
    /// Format: aes:<key>, aes-hex:<hexkey>, autokey:<key> or vigenere:<key>
    #[arg(short, long = "stage", required = true)]
    stages: Vec<String>,

    /// Path to the output file
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Parses a `type:key` stage specification from the command line.
fn parse_stage(index: usize, spec: &str) -> Result<Stage, String> {
    let (kind, key) = spec
        .split_once(':')
        .ok_or_else(|| format!("invalid stage '{spec}', expected type:key"))?;

    let cipher = match kind {
        "aes" => CipherKind::Aes {
            key: key.to_string(),
            format: KeyFormat::Text,
        },
        "aes-hex" => CipherKind::Aes {
            key: key.to_string(),
            format: KeyFormat::Hex,
        },
        "autokey" => CipherKind::Autokey {
            key: key.to_string(),
        },
        "vigenere" => CipherKind::Vigenere {
            key: key.to_string(),
        },
        other => return Err(format!("unknown cipher type '{other}'")),
    };

    Ok(Stage::new(format!("{kind}{index}"), cipher, true))
}

/// Main entry point for the cipher pipeline program.
fn main() {
    let cli: Cli = Cli::parse();

    let stages: Vec<Stage> = cli
        .stages
        .iter()
        .enumerate()
        .map(|(i, spec)| match parse_stage(i + 1, spec) {
            Ok(stage) => stage,
            Err(message) => {
                eprintln!("Error: {message}");
                std::process::exit(1);
            }
        })
        .collect();

    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    let mode = match cli.mode {
        OperationMode::Encrypt => Mode::Encrypt,
        OperationMode::Decrypt => Mode::Decrypt,
    };

    let run = match run_pipeline(&content, &stages, mode) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for step in &run.steps {
        println!("{}: {}", step.id, step.output);
    }

    std::fs::write(&cli.output, &run.output)
        .expect("Failed to write output file");

    println!("Operation completed successfully! Output saved to: {}", cli.output);
}
