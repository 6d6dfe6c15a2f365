// libchameleon/src/session/hw.rs

//! Device management operations: slots, mode, battery, factory reset.

use crate::protocol::commands::{
    CommandCode, encode_set_active_slot, encode_set_mode, encode_set_slot_nick,
    encode_set_slot_tag_type, encode_slot_enable,
};
use crate::protocol::parser::{be_u16_at, byte_at};
use crate::session::Session;
use crate::types::{HwMode, TagSenseType, TagType};
use crate::{Error, Result};

/// Battery state reported by GET_BATTERY_INFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatteryInfo {
    pub voltage_mv: u16,
    pub percent: u8,
}

/// Map a user-facing 1-based slot number to the 0-based wire index.
fn wire_slot(slot: u8) -> Result<u8> {
    if !(1..=8).contains(&slot) {
        return Err(Error::InvalidArgument(format!(
            "slot must be 1..=8, got {slot}"
        )));
    }
    Ok(slot - 1)
}

impl Session {
    /// Enable or disable sensing for `slot` (1..=8) on the given band.
    pub fn set_slot_enabled(
        &mut self,
        slot: u8,
        sense: TagSenseType,
        enabled: bool,
    ) -> Result<()> {
        let payload = encode_slot_enable(wire_slot(slot)?, sense, enabled);
        self.send_command(CommandCode::SetSlotEnable, &payload)?
            .require_ok()?;
        Ok(())
    }

    /// Switch the active emulation slot (1..=8).
    pub fn set_active_slot(&mut self, slot: u8) -> Result<()> {
        let payload = encode_set_active_slot(wire_slot(slot)?);
        self.send_command(CommandCode::SetActiveSlot, &payload)?
            .require_ok()?;
        Ok(())
    }

    /// Change the tag type emulated by `slot` (1..=8).
    pub fn set_slot_tag_type(&mut self, slot: u8, tag_type: TagType) -> Result<()> {
        let payload = encode_set_slot_tag_type(wire_slot(slot)?, tag_type);
        self.send_command(CommandCode::SetSlotTagType, &payload)?
            .require_ok()?;
        Ok(())
    }

    /// Set the nickname shown for `slot` (1..=8) on the given band.
    pub fn set_slot_nick(&mut self, slot: u8, sense: TagSenseType, name: &str) -> Result<()> {
        let payload = encode_set_slot_nick(wire_slot(slot)?, sense, name);
        self.send_command(CommandCode::SetSlotTagNick, &payload)?
            .require_ok()?;
        Ok(())
    }

    /// Switch between reader and emulator mode.
    pub fn set_mode(&mut self, mode: HwMode) -> Result<()> {
        self.send_command(CommandCode::ChangeDeviceMode, &encode_set_mode(mode))?
            .require_ok()?;
        Ok(())
    }

    /// Query battery voltage and charge level.
    pub fn battery_info(&mut self) -> Result<BatteryInfo> {
        let reply = self.send_command(CommandCode::GetBatteryInfo, &[])?;
        let payload = reply.require_ok()?;
        Ok(BatteryInfo {
            voltage_mv: be_u16_at(payload, 0)?,
            percent: byte_at(payload, 2)?,
        })
    }

    /// Factory reset: wipes flash data storage. Irreversible on the
    /// device side.
    pub fn factory_reset(&mut self) -> Result<()> {
        self.send_command(CommandCode::WipeFds, &[])?.require_ok()?;
        Ok(())
    }
}
