// libchameleon/src/types.rs

use crate::Error;
use crate::constants::{MAX_UID_LEN, MIFARE_DEFAULT_KEY};
use std::convert::TryFrom;
use std::fmt;

/// Low-frequency (EM410x) tag record returned by an LF scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LfTagRecord {
    uid: Vec<u8>,
}

impl LfTagRecord {
    /// Build a record from raw UID bytes, rejecting oversized UIDs.
    pub fn new(uid: &[u8]) -> crate::Result<Self> {
        if uid.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: uid.len(),
            });
        }
        Ok(Self { uid: uid.to_vec() })
    }

    pub fn size(&self) -> usize {
        self.uid.len()
    }

    pub fn uid(&self) -> &[u8] {
        &self.uid
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.uid)
    }
}

/// High-frequency (ISO 14443-A) tag record returned by an HF scan.
///
/// ATQA is stored in canonical order, i.e. already swapped from the wire
/// byte order the device reports.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HfTagRecord {
    uid: Vec<u8>,
    atqa: [u8; 2],
    sak: u8,
}

impl HfTagRecord {
    pub fn new(uid: &[u8], atqa: [u8; 2], sak: u8) -> crate::Result<Self> {
        if uid.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: uid.len(),
            });
        }
        Ok(Self {
            uid: uid.to_vec(),
            atqa,
            sak,
        })
    }

    pub fn size(&self) -> usize {
        self.uid.len()
    }

    pub fn uid(&self) -> &[u8] {
        &self.uid
    }

    pub fn atqa(&self) -> [u8; 2] {
        self.atqa
    }

    pub fn sak(&self) -> u8 {
        self.sak
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.uid)
    }
}

/// GET_VERSION reply from an Ultralight/NTAG-family tag.
///
/// Only a full 8-byte record carries enough information to refine the tag
/// type; anything else is kept verbatim but ignored by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionRecord {
    data: Vec<u8>,
}

impl VersionRecord {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The 8 bytes the resolver needs, if present.
    pub fn as_full(&self) -> Option<&[u8; 8]> {
        <&[u8; 8]>::try_from(self.data.as_slice()).ok()
    }
}

/// 6-byte Mifare Classic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl Default for MifareKey {
    fn default() -> Self {
        Self(MIFARE_DEFAULT_KEY)
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 6] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 6,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Sense type selector for slot configuration commands.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagSenseType {
    Undefined = 0x00,
    Lf = 0x01,
    Hf = 0x02,
}

/// Device operating mode.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HwMode {
    Emulator = 0x00,
    Reader = 0x01,
}

/// Tag type classification.
///
/// Discriminants are the device's slot-type codes and go on the wire in
/// SET_SLOT_TAG_TYPE, so the numeric values must not change.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagType {
    Undefined = 0,

    // LF
    Em410x = 100,

    // Mifare Classic series
    MifareMini = 1000,
    Mifare1k = 1001,
    Mifare2k = 1002,
    Mifare4k = 1003,

    // MFUL / NTAG series
    Ntag213 = 1100,
    Ntag215 = 1101,
    Ntag216 = 1102,
    Mf0Icu1 = 1103,
    Mf0Icu2 = 1104,
    Mf0Ul11 = 1105,
    Mf0Ul21 = 1106,
    Ntag210 = 1107,
    Ntag212 = 1108,

    Iso14443_4 = 1200,
}

impl TagType {
    /// Device slot-type code for this tag type.
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagType::Undefined => "Unknown type",
            TagType::Em410x => "EM410x",
            TagType::MifareMini => "MIFARE Mini, 320 bytes",
            TagType::Mifare1k => "MIFARE 1KB",
            TagType::Mifare2k => "MIFARE 2KB",
            TagType::Mifare4k => "MIFARE 4KB",
            TagType::Ntag210 => "NTAG 210",
            TagType::Ntag212 => "NTAG 212",
            TagType::Ntag213 => "NTAG 213",
            TagType::Ntag215 => "NTAG 215",
            TagType::Ntag216 => "NTAG 216",
            TagType::Mf0Icu1 => "MIFARE Ultralight",
            TagType::Mf0Icu2 => "MIFARE Ultralight C",
            TagType::Mf0Ul11 => "MIFARE Ultralight EV1 48b",
            TagType::Mf0Ul21 => "MIFARE Ultralight EV1 128b",
            TagType::Iso14443_4 => "PICC compliant with ISO/IEC 14443-4",
        };
        f.write_str(name)
    }
}
