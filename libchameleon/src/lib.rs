// libchameleon/src/lib.rs

//! libchameleon
//!
//! Pure Rust protocol engine for the Chameleon Ultra NFC/RFID
//! multi-emulator. Implements the BLE frame codec, the command
//! dispatcher with its single-slot reply mailbox, status
//! classification, tag identity resolution, and the Gen1a backdoor
//! sequences, on top of a caller-supplied transport.

pub mod bridge;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the records in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
