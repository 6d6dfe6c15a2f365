// libchameleon/src/protocol/responses/status.rs

//! Reply status byte and its classification into outcomes.

/// Status byte carried at offset 5 of every reply frame.
///
/// The set is closed on the firmware side, but unassigned values do show
/// up across firmware revisions, so unknown bytes are preserved rather
/// than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusCode {
    /// IC card operation succeeded
    HfTagOk,
    /// IC card not found
    HfTagNo,
    /// Abnormal IC card communication
    HfErrStat,
    /// IC card communication CRC error
    HfErrCrc,
    /// IC card collision
    HfCollision,
    /// IC card BCC error
    HfErrBcc,
    /// MF card authentication failed
    MfErrAuth,
    /// IC card parity error
    HfErrParity,
    /// ATS expected but the card NAKed, or ATS too large
    HfErrAts,
    /// Low-frequency operation succeeded
    LfTagOk,
    /// No valid EM410x tag found
    Em410xTagNotFound,
    /// Bad command parameters
    ParamError,
    /// Wrong device mode for this command
    DeviceModeError,
    /// Invalid command
    InvalidCmd,
    /// Generic success
    Success,
    /// Command not implemented by this firmware
    NotImplemented,
    /// Flash write failed
    FlashWriteFail,
    /// Flash read failed
    FlashReadFail,
    /// Invalid slot type
    InvalidSlotType,
    /// Any value outside the known table
    Unknown(u8),
}

impl StatusCode {
    pub fn from_u8(byte: u8) -> Self {
        match byte {
            0x00 => Self::HfTagOk,
            0x01 => Self::HfTagNo,
            0x02 => Self::HfErrStat,
            0x03 => Self::HfErrCrc,
            0x04 => Self::HfCollision,
            0x05 => Self::HfErrBcc,
            0x06 => Self::MfErrAuth,
            0x07 => Self::HfErrParity,
            0x08 => Self::HfErrAts,
            0x40 => Self::LfTagOk,
            0x41 => Self::Em410xTagNotFound,
            0x60 => Self::ParamError,
            0x66 => Self::DeviceModeError,
            0x67 => Self::InvalidCmd,
            0x68 => Self::Success,
            0x69 => Self::NotImplemented,
            0x70 => Self::FlashWriteFail,
            0x71 => Self::FlashReadFail,
            0x72 => Self::InvalidSlotType,
            other => Self::Unknown(other),
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::HfTagOk => 0x00,
            Self::HfTagNo => 0x01,
            Self::HfErrStat => 0x02,
            Self::HfErrCrc => 0x03,
            Self::HfCollision => 0x04,
            Self::HfErrBcc => 0x05,
            Self::MfErrAuth => 0x06,
            Self::HfErrParity => 0x07,
            Self::HfErrAts => 0x08,
            Self::LfTagOk => 0x40,
            Self::Em410xTagNotFound => 0x41,
            Self::ParamError => 0x60,
            Self::DeviceModeError => 0x66,
            Self::InvalidCmd => 0x67,
            Self::Success => 0x68,
            Self::NotImplemented => 0x69,
            Self::FlashWriteFail => 0x70,
            Self::FlashReadFail => 0x71,
            Self::InvalidSlotType => 0x72,
            Self::Unknown(b) => b,
        }
    }
}
