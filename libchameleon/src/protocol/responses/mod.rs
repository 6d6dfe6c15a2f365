// libchameleon/src/protocol/responses/mod.rs

pub mod scan;
pub mod status;

pub use scan::{decode_hf14a_scan, decode_lf_scan};
pub use status::StatusCode;

use crate::protocol::Frame;
use crate::{Error, Result};

/// Classified device verdict on a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Any of the success statuses (generic, LF, HF)
    Ok,
    /// No tag answered in the field (HF or EM410x flavour)
    TagNotFound,
    /// The device refused the command (mode, parameters, flash, slot type)
    DeviceRejected(u8),
    /// RF-side communication failed (CRC, collision, parity, auth, ...)
    HfCommError(u8),
    /// Status byte outside the known table, preserved for the caller
    UnknownStatus(u8),
}

/// A reply frame after status classification. The payload stays raw;
/// command-specific typed extraction lives in [`scan`] and is only
/// defined for the two scan commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedReply {
    /// Command code quoted by the reply
    pub command: u16,
    /// Raw status byte, preserved verbatim
    pub status: StatusCode,
    /// Classified outcome
    pub outcome: Outcome,
    /// Untouched reply payload
    pub payload: Vec<u8>,
}

impl ClassifiedReply {
    /// Classify a decoded frame.
    pub fn from_frame(frame: Frame) -> Self {
        let status = StatusCode::from_u8(frame.status);
        Self {
            command: frame.command,
            status,
            outcome: classify_status(status),
            payload: frame.payload,
        }
    }

    /// Whether the device reported any of the success statuses.
    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Ok
    }

    /// Return the payload if the outcome is a success, otherwise convert
    /// the outcome into the matching error.
    pub fn require_ok(&self) -> Result<&[u8]> {
        match self.outcome {
            Outcome::Ok => Ok(&self.payload),
            Outcome::TagNotFound => Err(Error::TagNotFound),
            Outcome::DeviceRejected(code) => Err(Error::DeviceRejected(code)),
            Outcome::HfCommError(code) => Err(Error::HfComm(code)),
            Outcome::UnknownStatus(code) => Err(Error::UnknownStatus(code)),
        }
    }
}

/// Status -> outcome table. Exhaustive over the closed status set;
/// unknown bytes land in `UnknownStatus` without being dropped.
pub fn classify_status(status: StatusCode) -> Outcome {
    use StatusCode::*;
    match status {
        Success | LfTagOk | HfTagOk => Outcome::Ok,
        HfTagNo | Em410xTagNotFound => Outcome::TagNotFound,
        DeviceModeError | InvalidCmd | NotImplemented | ParamError | FlashWriteFail
        | FlashReadFail | InvalidSlotType => Outcome::DeviceRejected(status.as_u8()),
        HfErrStat | HfErrCrc | HfCollision | HfErrBcc | HfErrParity | HfErrAts | MfErrAuth => {
            Outcome::HfCommError(status.as_u8())
        }
        Unknown(code) => Outcome::UnknownStatus(code),
    }
}
