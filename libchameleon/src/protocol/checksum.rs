// libchameleon/src/protocol/checksum.rs

/// Longitudinal redundancy check used by both frame checksums:
/// LRC = 0x100 - (sum(bytes) & 0xff)
pub fn lrc(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
