// libchameleon/src/tag.rs

//! Tag identity resolution from anti-collision data.
//!
//! Classification is two-stage: a SAK lookup picks the family, then, when
//! an 8-byte GET_VERSION record is available, an ordered list of
//! refinement rules narrows Ultralight-class tags down to the concrete
//! EV1/NTAG product. Both stages are pure data lookups.

use crate::types::{TagType, VersionRecord};

/// SAK byte -> tag family. Missing entries classify as `Undefined`.
const SAK_TABLE: &[(u8, TagType)] = &[
    (0x00, TagType::Mf0Icu1),
    (0x08, TagType::Mifare1k),
    (0x09, TagType::MifareMini),
    (0x18, TagType::Mifare4k),
    (0x19, TagType::Mifare2k),
    (0x20, TagType::Iso14443_4),
];

/// One version-record refinement rule. Fields refer to the 8-byte
/// GET_VERSION layout: manufacturer `m = data[1]`, product generation
/// `g = data[2]`, storage size major/minor `data[4]`/`data[5]`, product
/// subtype `sub = data[6]`. Every rule additionally requires the storage
/// size pair `(1, 0)`.
struct VersionRule {
    matches_generation: fn(m: u8, g: u8) -> bool,
    subtypes: &'static [(u8, TagType)],
}

/// Ordered refinement rules: Ultralight EV1 first (including the Mikron
/// clone signature m=0x34/g=0x21), then the NTAG 21x family.
const VERSION_RULES: &[VersionRule] = &[
    VersionRule {
        matches_generation: |m, g| g == 3 || (m == 0x34 && g == 0x21),
        subtypes: &[(0x0B, TagType::Mf0Ul11), (0x0E, TagType::Mf0Ul21)],
    },
    VersionRule {
        matches_generation: |_, g| g == 4,
        subtypes: &[
            (0x0B, TagType::Ntag210),
            (0x0E, TagType::Ntag212),
            (0x0F, TagType::Ntag213),
            (0x11, TagType::Ntag215),
            (0x13, TagType::Ntag216),
        ],
    },
];

/// Classify a tag from its SAK byte and an optional version record.
///
/// Pure and side-effect-free; the session layer feeds it the cached
/// results of the latest scan and GET_VERSION exchange.
pub fn classify(sak: u8, version: Option<&VersionRecord>) -> TagType {
    let family = SAK_TABLE
        .iter()
        .find(|(s, _)| *s == sak)
        .map(|(_, t)| *t)
        .unwrap_or(TagType::Undefined);

    let Some(data) = version.and_then(VersionRecord::as_full) else {
        return family;
    };

    let (m, g) = (data[1], data[2]);
    let size_pair = (data[4], data[5]);
    let sub = data[6];

    if size_pair != (1, 0) {
        return family;
    }

    for rule in VERSION_RULES {
        if (rule.matches_generation)(m, g) {
            return rule
                .subtypes
                .iter()
                .find(|(s, _)| *s == sub)
                .map(|(_, t)| *t)
                .unwrap_or(family);
        }
    }

    family
}
