//! The 4x4 working state and its round transformations

use super::gf::gmul;
use super::key_schedule::KeySchedule;
use super::tables::{INV_SBOX, SBOX};

/// One 16-byte block as a 4x4 matrix, filled column by column: the byte at
/// absolute position `4c + r` sits at row `r`, column `c`. Extraction uses the
/// same convention; mixing the two up breaks round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    data: [[u8; 4]; 4],
}

impl State {
    /// Builds a state from up to 16 bytes; missing bytes read as zero.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut data = [[0u8; 4]; 4];
        for col in 0..4 {
            for row in 0..4 {
                data[row][col] = bytes.get(col * 4 + row).copied().unwrap_or(0);
            }
        }
        State { data }
    }

    /// Extracts the 16 bytes back out, column by column.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for col in 0..4 {
            for row in 0..4 {
                bytes[col * 4 + row] = self.data[row][col];
            }
        }
        bytes
    }

    /// Replaces every byte with its S-box substitute.
    pub fn sub_bytes(&mut self) {
        for row in self.data.iter_mut() {
            for byte in row.iter_mut() {
                *byte = SBOX[*byte as usize];
            }
        }
    }

    pub fn inv_sub_bytes(&mut self) {
        for row in self.data.iter_mut() {
            for byte in row.iter_mut() {
                *byte = INV_SBOX[*byte as usize];
            }
        }
    }

    /// Rotates row `r` left by `r` positions.
    pub fn shift_rows(&mut self) {
        for row in 1..4 {
            let temp = self.data[row];
            for col in 0..4 {
                self.data[row][col] = temp[(col + row) % 4];
            }
        }
    }

    /// Rotates row `r` right by `r` positions.
    pub fn inv_shift_rows(&mut self) {
        for row in 1..4 {
            let temp = self.data[row];
            for col in 0..4 {
                self.data[row][col] = temp[(col + 4 - row) % 4];
            }
        }
    }

    /// Diffusion: each column becomes a linear combination over GF(2^8) with
    /// the row-cyclic coefficients {2, 3, 1, 1}.
    pub fn mix_columns(&mut self) {
        for col in 0..4 {
            let t = [
                self.data[0][col],
                self.data[1][col],
                self.data[2][col],
                self.data[3][col],
            ];
            self.data[0][col] = gmul(0x02, t[0]) ^ gmul(0x03, t[1]) ^ t[2] ^ t[3];
            self.data[1][col] = t[0] ^ gmul(0x02, t[1]) ^ gmul(0x03, t[2]) ^ t[3];
            self.data[2][col] = t[0] ^ t[1] ^ gmul(0x02, t[2]) ^ gmul(0x03, t[3]);
            self.data[3][col] = gmul(0x03, t[0]) ^ t[1] ^ t[2] ^ gmul(0x02, t[3]);
        }
    }

    /// Inverse diffusion with the coefficients {14, 11, 13, 9}.
    pub fn inv_mix_columns(&mut self) {
        for col in 0..4 {
            let t = [
                self.data[0][col],
                self.data[1][col],
                self.data[2][col],
                self.data[3][col],
            ];
            self.data[0][col] =
                gmul(0x0e, t[0]) ^ gmul(0x0b, t[1]) ^ gmul(0x0d, t[2]) ^ gmul(0x09, t[3]);
            self.data[1][col] =
                gmul(0x09, t[0]) ^ gmul(0x0e, t[1]) ^ gmul(0x0b, t[2]) ^ gmul(0x0d, t[3]);
            self.data[2][col] =
                gmul(0x0d, t[0]) ^ gmul(0x09, t[1]) ^ gmul(0x0e, t[2]) ^ gmul(0x0b, t[3]);
            self.data[3][col] =
                gmul(0x0b, t[0]) ^ gmul(0x0d, t[1]) ^ gmul(0x09, t[2]) ^ gmul(0x0e, t[3]);
        }
    }

    /// XORs the state with round key `round` of the schedule. The state byte
    /// at (row, col) combines with byte `row` of the round's word `col`.
    pub fn add_round_key(&mut self, schedule: &KeySchedule, round: usize) {
        for row in 0..4 {
            for col in 0..4 {
                self.data[row][col] ^= schedule[4 * round + col][row];
            }
        }
    }
}
