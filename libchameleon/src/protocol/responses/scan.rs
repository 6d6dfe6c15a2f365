// libchameleon/src/protocol/responses/scan.rs

//! Typed payload extraction for the two scan replies. Every other
//! command's payload is passed through raw by the classifier.

use crate::protocol::parser::{byte_at, slice_at};
use crate::protocol::responses::ClassifiedReply;
use crate::types::{HfTagRecord, LfTagRecord};
use crate::{Error, Result};

/// Decode an EM410X_SCAN reply payload: the whole payload is the UID.
pub fn decode_lf_scan(reply: &ClassifiedReply) -> Result<LfTagRecord> {
    let payload = reply.require_ok()?;
    LfTagRecord::new(payload)
}

/// Decode an HF14A_SCAN reply payload:
/// `[uid_len] [uid...] [atqa lo] [atqa hi] [sak]`, with ATQA swapped to
/// canonical order in the returned record.
pub fn decode_hf14a_scan(reply: &ClassifiedReply) -> Result<HfTagRecord> {
    let payload = reply.require_ok()?;

    let size = byte_at(payload, 0)? as usize;
    if size > crate::constants::MAX_UID_LEN {
        return Err(Error::MalformedFrame(format!(
            "scan reply claims a {size}-byte uid"
        )));
    }
    let uid = slice_at(payload, 1, size)?;
    let atqa = [byte_at(payload, 2 + size)?, byte_at(payload, 1 + size)?];
    let sak = byte_at(payload, 3 + size)?;

    HfTagRecord::new(uid, atqa, sak)
}
