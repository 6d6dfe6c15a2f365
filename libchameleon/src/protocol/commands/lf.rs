// libchameleon/src/protocol/commands/lf.rs

//! Payload encoders for low-frequency (EM410x / T55xx) commands.

use crate::constants::{EM410X_UID_LEN, T55XX_WRITE_KEYS};
use crate::{Error, Result};

fn check_em_uid(uid: &[u8]) -> Result<()> {
    if uid.len() != EM410X_UID_LEN {
        return Err(Error::InvalidArgument(format!(
            "EM410x id must be {EM410X_UID_LEN} bytes, got {}",
            uid.len()
        )));
    }
    Ok(())
}

/// EM410X_WRITE_TO_T55XX payload: the 5-byte id followed by the stock
/// T55xx access keys the firmware tries in order.
pub fn encode_lf_write(uid: &[u8]) -> Result<Vec<u8>> {
    check_em_uid(uid)?;
    let mut out = Vec::with_capacity(EM410X_UID_LEN + T55XX_WRITE_KEYS.len());
    out.extend_from_slice(uid);
    out.extend_from_slice(&T55XX_WRITE_KEYS);
    Ok(out)
}

/// EM410X_SET_EMU_ID payload: the 5-byte id to emulate.
pub fn encode_lf_set_emu_id(uid: &[u8]) -> Result<Vec<u8>> {
    check_em_uid(uid)?;
    Ok(uid.to_vec())
}
