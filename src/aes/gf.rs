//! Multiplication in GF(2^8)

/// Multiplies two bytes in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
///
/// Shift-and-add over 8 iterations; only the diffusion step uses this.
pub fn gmul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;

    for _ in 0..8 {
        if b & 1 != 0 {
            p ^= a;
        }
        let hi_bit = a & 0x80;
        a <<= 1;
        if hi_bit != 0 {
            a ^= 0x1b; // low 8 bits of the reduction polynomial 0x11b
        }
        b >>= 1;
    }

    p
}
