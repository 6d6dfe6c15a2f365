// libchameleon/src/session/emulation.rs

//! Emulation memory upload and anti-collision configuration.

use crate::constants::{MAX_DUMP_CHUNK, MF_BLOCK_SIZE};
use crate::protocol::commands::{CommandCode, encode_anti_coll_data};
use crate::session::Session;
use crate::{Error, Result};

/// Largest dump accepted by a 4K emulation slot (256 blocks).
const MAX_DUMP_SIZE: usize = 4096;

impl Session {
    /// Upload a Mifare Classic dump into the active slot's emulation
    /// memory, 10 blocks per frame.
    ///
    /// Aborts on the first failed chunk with the chunk's index; earlier
    /// chunks stay written, so the slot is partially populated until a
    /// later upload succeeds.
    pub fn upload_emulation_dump(&mut self, dump: &[u8]) -> Result<()> {
        if dump.is_empty() || dump.len() % MF_BLOCK_SIZE != 0 {
            return Err(Error::InvalidArgument(format!(
                "dump length {} is not a positive multiple of {MF_BLOCK_SIZE}",
                dump.len()
            )));
        }
        if dump.len() > MAX_DUMP_SIZE {
            return Err(Error::InvalidArgument(format!(
                "dump length {} exceeds the {MAX_DUMP_SIZE}-byte slot capacity",
                dump.len()
            )));
        }

        let mut block = 0usize;
        for (index, chunk) in dump.chunks(MAX_DUMP_CHUNK).enumerate() {
            let mut payload = Vec::with_capacity(1 + chunk.len());
            payload.push(block as u8);
            payload.extend_from_slice(chunk);

            self.send_command(CommandCode::Mf1WriteEmuBlockData, &payload)
                .and_then(|reply| reply.require_ok().map(|_| ()))
                .map_err(|e| Error::aborted_at(index, e))?;

            block += chunk.len() / MF_BLOCK_SIZE;
        }
        Ok(())
    }

    /// Configure the active slot's 14a anti-collision answer (uid, ATQA,
    /// SAK). ATQA is given in canonical order and swapped on the wire.
    pub fn set_anti_coll_data(&mut self, uid: &[u8], atqa: [u8; 2], sak: u8) -> Result<()> {
        let payload = encode_anti_coll_data(uid, atqa, sak)?;
        self.send_command(CommandCode::Hf14aSetAntiCollData, &payload)?
            .require_ok()?;
        Ok(())
    }
}
