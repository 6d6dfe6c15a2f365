// libchameleon/src/utils.rs

//! Small helpers shared across the crate: hex formatting for log output
//! and fixtures, plus timeout defaults.

use std::fmt::Write as _;
use std::time::Duration;

/// Default per-command reply timeout in milliseconds. BLE round trips plus
/// RF field settling make this deliberately generous.
pub const DEFAULT_REPLY_TIMEOUT_MS: u64 = 3000;

/// Convert milliseconds to a Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default reply timeout as a Duration.
pub fn default_reply_timeout() -> Duration {
    ms(DEFAULT_REPLY_TIMEOUT_MS)
}

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut s, b| {
            let _ = write!(s, "{b:02x}");
            s
        },
    )
}

/// Lowercase hex with one space between bytes, used for frame dumps in
/// debug logs: `&[0x11, 0xef]` -> `"11 ef"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Parse a hex string (whitespace tolerated) into bytes. Dump files are
/// commonly hex text, so callers of the emulation upload use this before
/// handing raw bytes to the engine.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|_| "non-ascii hex input".to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{text}': {e}"))
        })
        .collect()
}
