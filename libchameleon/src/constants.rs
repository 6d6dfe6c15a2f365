// libchameleon/src/constants.rs

//! Common protocol constants used across the crate

/// Wire frame magic bytes: every frame starts with 0x11 0xEF
pub const FRAME_MAGIC: [u8; 2] = [0x11, 0xEF];

/// Fixed frame overhead: magic(2) + command(2) + reserved(1) + status(1)
/// + length(2) + header LRC(1) + payload LRC(1)
pub const FRAME_OVERHEAD: usize = 10;

/// Offset of the big-endian command code within a frame
pub const OFF_COMMAND: usize = 2;
/// Offset of the status byte (0x00 on requests)
pub const OFF_STATUS: usize = 5;
/// Offset of the big-endian payload length
pub const OFF_LENGTH: usize = 6;
/// Offset of the header LRC, computed over bytes[2..8]
pub const OFF_HEADER_LRC: usize = 8;
/// Offset of the first payload byte
pub const OFF_PAYLOAD: usize = 9;

/// Maximum payload length: BLE write buffer (200) minus frame overhead
pub const MAX_PAYLOAD_LEN: usize = 190;

/// Maximum UID length carried by tag records
pub const MAX_UID_LEN: usize = 10;

/// Mifare Classic block size in bytes
pub const MF_BLOCK_SIZE: usize = 16;

/// Largest emulation dump chunk per MF1_WRITE_EMU_BLOCK_DATA frame
/// (10 blocks; must stay a multiple of MF_BLOCK_SIZE and fit the MTU
/// together with the leading block-index byte)
pub const MAX_DUMP_CHUNK: usize = 160;

/// Key-A selector byte used by MF1 block read/write payloads
pub const MF_KEY_A: u8 = 0x60;

/// Acknowledge byte returned by Gen1a backdoor commands
pub const GEN1A_ACK: u8 = 0x0A;

/// Factory default Mifare Classic key
pub const MIFARE_DEFAULT_KEY: [u8; 6] = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

/// EM410x card id length in bytes
pub const EM410X_UID_LEN: usize = 5;

/// T55xx write key block appended to EM410X_WRITE_TO_T55XX payloads
pub const T55XX_WRITE_KEYS: [u8; 12] = [
    0x20, 0x20, 0x66, 0x66, 0x51, 0x24, 0x36, 0x48, 0x19, 0x92, 0x04, 0x27,
];
