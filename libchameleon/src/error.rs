// libchameleon/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
///
/// No variant here is ever retried automatically; retry policy belongs to
/// the caller, which is why device-reported failures keep their raw status
/// byte and sequence failures keep the failing step index.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport write failed: {0}")]
    TransportWrite(String),

    #[error("no reply within the timeout budget")]
    ReplyTimeout,

    #[error("payload too large: {len} bytes exceeds the {max}-byte limit")]
    FrameTooLarge { len: usize, max: usize },

    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    // Only produced by strict-mode decoding; the default receive path
    // does not verify checksums.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("no tag found in the field")]
    TagNotFound,

    #[error("device rejected the command: status {0:#04x}")]
    DeviceRejected(u8),

    #[error("HF communication error: status {0:#04x}")]
    HfComm(u8),

    #[error("unrecognized status byte {0:#04x}")]
    UnknownStatus(u8),

    #[error("tag did not acknowledge: got {got:#04x}, expected 0x0a")]
    TagNak { got: u8 },

    #[error("sequence aborted at step {step}: {cause}")]
    SequenceAborted { step: usize, cause: Box<Error> },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Wrap an error as a composite-sequence failure at `step`.
    pub fn aborted_at(step: usize, cause: Error) -> Self {
        Error::SequenceAborted {
            step,
            cause: Box::new(cause),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
