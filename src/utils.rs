//! Shared codecs, padding and text normalization

/// Block size of the block cipher in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Encodes text as raw bytes, one byte per character.
///
/// Characters above U+00FF are truncated to their low byte. This mirrors a
/// char-code codec and loses information for non-Latin-1 text; callers that
/// need lossless round-trips must stick to Latin-1 input.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.chars().map(|c| (c as u32 & 0xff) as u8).collect()
}

/// Decodes bytes back into text, one character per byte.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// True when the string consists of hex digits only (the empty string counts).
pub fn is_hex(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Appends padding bytes, each equal to the pad length.
///
/// Always appends at least one byte; an already aligned message receives a
/// full padding block.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = data.to_vec();
    padded.extend(std::iter::repeat(pad_len as u8).take(pad_len));
    padded
}

/// Strips padding by reading the final byte as the candidate pad length.
///
/// A final byte outside 1..=16 leaves the data untouched instead of failing.
pub fn unpad(data: &[u8]) -> Vec<u8> {
    match data.last() {
        Some(&last) if (1..=BLOCK_SIZE as u8).contains(&last) && last as usize <= data.len() => {
            data[..data.len() - last as usize].to_vec()
        }
        _ => data.to_vec(),
    }
}

/// Uppercases the input and drops every character outside A-Z.
pub fn normalize_letters(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}
