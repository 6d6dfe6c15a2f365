// libchameleon/src/prelude.rs

pub use crate::protocol::commands::{CommandCode, RawOptions};
pub use crate::protocol::responses::{ClassifiedReply, Outcome, StatusCode};
pub use crate::protocol::Frame;
pub use crate::session::{BatteryInfo, RawStep, Session, SessionBuilder};
pub use crate::transport::Transport;
pub use crate::{
    Error, HfTagRecord, HwMode, LfTagRecord, MifareKey, Result, TagSenseType, TagType,
    VersionRecord,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_reply_timeout, ms, parse_hex};
