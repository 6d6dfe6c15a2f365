// libchameleon/src/session/lf.rs

//! Low-frequency (EM410x) operations.

use crate::protocol::commands::{CommandCode, encode_lf_set_emu_id, encode_lf_write};
use crate::protocol::responses::decode_lf_scan;
use crate::session::Session;
use crate::types::LfTagRecord;
use crate::Result;

impl Session {
    /// Scan for an EM410x tag. The result is also cached as the
    /// session's last LF tag.
    pub fn lf_scan(&mut self) -> Result<LfTagRecord> {
        let reply = self.send_command(CommandCode::Em410xScan, &[])?;
        let record = decode_lf_scan(&reply)?;
        self.cache_lf_tag(record.clone());
        Ok(record)
    }

    /// Write a 5-byte EM410x id to a T55xx card on the reader field.
    pub fn lf_write(&mut self, uid: &[u8]) -> Result<()> {
        let payload = encode_lf_write(uid)?;
        self.send_command(CommandCode::Em410xWriteToT55xx, &payload)?
            .require_ok()?;
        Ok(())
    }

    /// Set the EM410x id emulated by the active slot.
    pub fn lf_set_emu_id(&mut self, uid: &[u8]) -> Result<()> {
        let payload = encode_lf_set_emu_id(uid)?;
        self.send_command(CommandCode::Em410xSetEmuId, &payload)?
            .require_ok()?;
        Ok(())
    }
}
