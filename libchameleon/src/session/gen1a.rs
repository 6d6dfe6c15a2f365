// libchameleon/src/session/gen1a.rs

//! Gen1a "backdoor" sequences and the composite raw-exchange runner.
//!
//! Gen1a magic cards accept an unauthenticated write path behind a
//! 7-bit unlock handshake. Every step but the last keeps the RF field
//! energized so the tag stays powered between frames; the first failing
//! step aborts the remainder. No rollback is attempted, so a failure in
//! the middle of a write leaves the tag partially mutated and the error
//! says exactly which step it was.

use crate::constants::{GEN1A_ACK, MF_BLOCK_SIZE};
use crate::protocol::commands::RawOptions;
use crate::session::Session;
use crate::{Error, Result};

/// One raw exchange within a composite sequence.
#[derive(Debug, Clone)]
pub struct RawStep {
    /// Short name used in debug logs
    pub label: &'static str,
    /// Tag-bound bytes
    pub data: Vec<u8>,
    /// Explicit transmit bit count; `None` sends all of `data`
    pub bit_count: Option<u16>,
    /// Tag-side response window in milliseconds
    pub timeout_ms: u16,
    pub options: RawOptions,
    /// Require the first reply byte to be the Gen1a ACK
    pub expect_ack: bool,
}

fn unlock_options() -> RawOptions {
    RawOptions {
        keep_rf_field: true,
        wait_response: true,
        ..Default::default()
    }
}

fn write_options() -> RawOptions {
    RawOptions {
        append_crc: true,
        keep_rf_field: true,
        wait_response: true,
        ..Default::default()
    }
}

/// The two-step unlock handshake: 0x40 at 7 bits, then 0x43.
fn unlock_steps() -> Vec<RawStep> {
    vec![
        RawStep {
            label: "gen1a unlock 0x40",
            data: vec![0x40],
            bit_count: Some(7),
            timeout_ms: 1,
            options: unlock_options(),
            expect_ack: true,
        },
        RawStep {
            label: "gen1a unlock 0x43",
            data: vec![0x43],
            bit_count: None,
            timeout_ms: 1,
            options: unlock_options(),
            expect_ack: true,
        },
    ]
}

impl Session {
    /// Run `steps` in order, aborting on the first failure. The error
    /// carries the index of the failing step; earlier steps may already
    /// have mutated tag state.
    pub fn run_raw_sequence(&mut self, steps: &[RawStep]) -> Result<()> {
        for (index, step) in steps.iter().enumerate() {
            log::debug!("sequence step {index}: {}", step.label);
            let reply = self
                .hf14a_raw(step.options, step.timeout_ms, &step.data, step.bit_count)
                .map_err(|e| Error::aborted_at(index, e))?;

            if step.expect_ack {
                match reply.first() {
                    Some(&GEN1A_ACK) => {}
                    Some(&got) => return Err(Error::aborted_at(index, Error::TagNak { got })),
                    None => {
                        return Err(Error::aborted_at(
                            index,
                            Error::InvalidLength {
                                expected: 1,
                                actual: 0,
                            },
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Unlock the Gen1a backdoor. The field is left energized for the
    /// exchange that follows.
    pub fn gen1a_unlock(&mut self) -> Result<()> {
        self.run_raw_sequence(&unlock_steps())
    }

    /// Unlock and read one block through the backdoor. Steps 0 and 1 are
    /// the unlock handshake, step 2 the read itself; the whole exchange
    /// is field-continuous.
    pub fn gen1a_read_block(&mut self, block: u8) -> Result<Vec<u8>> {
        self.run_raw_sequence(&unlock_steps())?;
        let options = RawOptions {
            append_crc: true,
            check_response_crc: true,
            keep_rf_field: true,
            wait_response: true,
            ..Default::default()
        };
        self.hf14a_raw(options, 1, &[0x30, block], None)
            .map_err(|e| Error::aborted_at(2, e))
    }

    /// Unlock and write one 16-byte block through the backdoor. Steps 0
    /// and 1 are the unlock handshake, step 2 announces the block, step 3
    /// carries the data; each must be acked with 0x0A.
    pub fn gen1a_write_block(&mut self, block: u8, data: &[u8]) -> Result<()> {
        if data.len() != MF_BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: MF_BLOCK_SIZE,
                actual: data.len(),
            });
        }
        let mut steps = unlock_steps();
        steps.push(RawStep {
            label: "gen1a write announce",
            data: vec![0xA0, block],
            bit_count: None,
            timeout_ms: 1,
            options: write_options(),
            expect_ack: true,
        });
        steps.push(RawStep {
            label: "gen1a write data",
            data: data.to_vec(),
            bit_count: None,
            timeout_ms: 1,
            options: write_options(),
            expect_ack: true,
        });
        self.run_raw_sequence(&steps)
    }

    /// Rewrite a Gen1a card's UID.
    ///
    /// Reads block 0 with the session key, splices in the new UID and its
    /// XOR checksum byte, then rewrites the block through the backdoor.
    /// Step indices in a [`Error::SequenceAborted`] failure count the
    /// whole operation: 0 block-0 read, 1 halt, 2..=5 the unlock/write
    /// exchange, 6 the final halt. A failure after step 2 leaves the tag
    /// partially rewritten.
    pub fn set_uid(&mut self, uid: &[u8]) -> Result<()> {
        if uid.len() != 4 && uid.len() != 7 {
            return Err(Error::InvalidArgument(format!(
                "uid must be 4 or 7 bytes, got {}",
                uid.len()
            )));
        }

        let mut block = self
            .mf_read_block(0, None)
            .map_err(|e| Error::aborted_at(0, e))?;
        if block.len() != MF_BLOCK_SIZE {
            return Err(Error::aborted_at(
                0,
                Error::InvalidLength {
                    expected: MF_BLOCK_SIZE,
                    actual: block.len(),
                },
            ));
        }

        block[..uid.len()].copy_from_slice(uid);
        let bcc = uid.iter().fold(0u8, |acc, b| acc ^ b);
        block[uid.len()] = bcc;

        self.halt().map_err(|e| Error::aborted_at(1, e))?;

        self.gen1a_write_block(0, &block).map_err(|e| match e {
            Error::SequenceAborted { step, cause } => Error::SequenceAborted {
                step: step + 2,
                cause,
            },
            other => Error::aborted_at(2, other),
        })?;

        self.halt().map_err(|e| Error::aborted_at(6, e))?;
        Ok(())
    }
}
