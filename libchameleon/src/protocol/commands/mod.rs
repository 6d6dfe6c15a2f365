// libchameleon/src/protocol/commands/mod.rs

pub mod hf;
pub mod hw;
pub mod lf;

pub use hf::{
    RawOptions, encode_anti_coll_data, encode_hf14a_raw, encode_mf_read_block,
    encode_mf_write_block,
};
pub use hw::{
    encode_set_active_slot, encode_set_mode, encode_set_slot_nick, encode_set_slot_tag_type,
    encode_slot_enable,
};
pub use lf::{encode_lf_set_emu_id, encode_lf_write};

/// The device's command-code table.
///
/// These are wire values understood by the Chameleon Ultra firmware and
/// must keep their exact numbers: 1000s are device/hardware management,
/// 2000s high-frequency/Mifare, 3000s low-frequency, 4000s emulation
/// memory and anti-collision configuration, 5000s LF emulation id. The
/// table is carried in full even though the engine only issues a subset;
/// replies quote these codes and callers may send any of them raw.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandCode {
    GetAppVersion = 1000,
    ChangeDeviceMode = 1001,
    GetDeviceMode = 1002,
    SetActiveSlot = 1003,
    SetSlotTagType = 1004,
    SetSlotDataDefault = 1005,
    SetSlotEnable = 1006,
    SetSlotTagNick = 1007,
    GetSlotTagNick = 1008,
    SlotDataConfigSave = 1009,
    EnterBootloader = 1010,
    GetDeviceChipId = 1011,
    GetDeviceAddress = 1012,
    SaveSettings = 1013,
    ResetSettings = 1014,
    SetAnimationMode = 1015,
    GetAnimationMode = 1016,
    GetGitVersion = 1017,
    GetActiveSlot = 1018,
    GetSlotInfo = 1019,
    WipeFds = 1020,
    DeleteSlotTagNick = 1021,
    GetEnabledSlots = 1023,
    DeleteSlotSenseType = 1024,
    GetBatteryInfo = 1025,
    GetButtonPressConfig = 1026,
    SetButtonPressConfig = 1027,
    GetLongButtonPressConfig = 1028,
    SetLongButtonPressConfig = 1029,
    SetBlePairingKey = 1030,
    GetBlePairingKey = 1031,
    DeleteAllBleBonds = 1032,
    GetDeviceModel = 1033,
    GetDeviceSettings = 1034,
    GetDeviceCapabilities = 1035,
    GetBlePairingEnable = 1036,
    SetBlePairingEnable = 1037,

    Hf14aScan = 2000,
    Mf1DetectSupport = 2001,
    Mf1DetectPrng = 2002,
    Mf1StaticNestedAcquire = 2003,
    Mf1DarksideAcquire = 2004,
    Mf1DetectNtDist = 2005,
    Mf1NestedAcquire = 2006,
    Mf1AuthOneKeyBlock = 2007,
    Mf1ReadOneBlock = 2008,
    Mf1WriteOneBlock = 2009,
    Hf14aRaw = 2010,
    Mf1ManipulateValueBlock = 2011,
    Mf1CheckKeysOfSectors = 2012,

    Em410xScan = 3000,
    Em410xWriteToT55xx = 3001,

    Mf1WriteEmuBlockData = 4000,
    Hf14aSetAntiCollData = 4001,
    Mf1SetDetectionEnable = 4004,
    Mf1GetDetectionCount = 4005,
    Mf1GetDetectionLog = 4006,
    Mf1GetDetectionEnable = 4007,
    Mf1ReadEmuBlockData = 4008,
    Mf1GetEmulatorConfig = 4009,
    Mf1GetGen1aMode = 4010,
    Mf1SetGen1aMode = 4011,
    Mf1GetGen2Mode = 4012,
    Mf1SetGen2Mode = 4013,
    Mf1GetBlockAntiCollMode = 4014,
    Mf1SetBlockAntiCollMode = 4015,
    Mf1GetWriteMode = 4016,
    Mf1SetWriteMode = 4017,
    Hf14aGetAntiCollData = 4018,
    Mf0NtagGetUidMagicMode = 4019,
    Mf0NtagSetUidMagicMode = 4020,
    Mf0NtagReadEmuPageData = 4021,
    Mf0NtagWriteEmuPageData = 4022,
    Mf0NtagGetVersionData = 4023,
    Mf0NtagSetVersionData = 4024,
    Mf0NtagGetSignatureData = 4025,
    Mf0NtagSetSignatureData = 4026,
    Mf0NtagGetCounterData = 4027,
    Mf0NtagSetCounterData = 4028,
    Mf0NtagResetAuthCnt = 4029,
    Mf0NtagGetPageCount = 4030,

    Em410xSetEmuId = 5000,
    Em410xGetEmuId = 5001,
}

impl CommandCode {
    /// Wire value of this command.
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}
