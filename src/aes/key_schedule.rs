//! Round-key expansion for the 128-bit block cipher

use super::tables::{RCON, SBOX};

/// One 4-byte word of the expanded key.
pub type Word = [u8; 4];

/// The full schedule: 11 round keys of 4 words each.
pub type KeySchedule = [Word; 44];

/// Expands a 16-byte key into the 44-word round-key schedule.
///
/// Words 0..4 are the key itself. Every later word is the XOR of the word four
/// positions back with the previous word; every fourth word first gets rotated
/// left a byte, substituted through the S-box and its leading byte XORed with
/// the round constant.
pub fn expand_key(key: &[u8; 16]) -> KeySchedule {
    let mut w: KeySchedule = [[0u8; 4]; 44];

    for i in 0..4 {
        w[i].copy_from_slice(&key[4 * i..4 * i + 4]);
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = SBOX[*byte as usize];
            }
            temp[0] ^= RCON[i / 4];
        }
        for j in 0..4 {
            w[i][j] = w[i - 4][j] ^ temp[j];
        }
    }

    w
}
