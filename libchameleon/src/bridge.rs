// libchameleon/src/bridge.rs

//! Bridge between the transport's asynchronous receive callback and the
//! synchronous dispatcher.
//!
//! The protocol is strictly half-duplex with no correlation id, so at most
//! one reply is ever outstanding. A single-slot mailbox models exactly
//! that: the receive path deposits the latest decoded frame (overwriting
//! an unconsumed one), and the dispatcher blocks on it with a deadline.

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::protocol::Frame;
use crate::{Error, Result};

/// Single-slot mailbox holding the pending reply frame.
#[derive(Debug, Default)]
pub struct ReplyMailbox {
    slot: Mutex<Option<Frame>>,
    available: Condvar,
}

impl ReplyMailbox {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Deposit a frame, replacing any undelivered prior value. An
    /// overwrite means the consumer abandoned an earlier wait (timeout),
    /// so the stale frame is dropped by design; it is still logged since
    /// it usually points at a too-tight timeout budget.
    pub fn deliver(&self, frame: Frame) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(stale) = slot.replace(frame) {
            log::warn!(
                "dropping undelivered reply for command {} (late arrival?)",
                stale.command
            );
        }
        self.available.notify_one();
    }

    /// Block until a frame is available or `timeout` elapses, then take
    /// and clear the slot.
    pub fn wait(&self, timeout: Duration) -> Result<Frame> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if let Some(frame) = slot.take() {
                return Ok(frame);
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(Error::ReplyTimeout);
            }
            let (guard, _) = self
                .available
                .wait_timeout(slot, deadline - now)
                .unwrap_or_else(|e| e.into_inner());
            slot = guard;
        }
    }

    /// Discard any stale frame. The dispatcher calls this right before
    /// each write so a late reply to an abandoned command is never
    /// returned as the next command's result.
    pub fn clear(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(stale) = slot.take() {
            log::debug!(
                "discarding stale reply for command {} before next request",
                stale.command
            );
        }
    }
}

/// Cloneable producer handle handed to the transport's receive callback.
/// Decodes each inbound message and deposits it into the mailbox; frames
/// that fail to decode are logged and dropped (the callback context has
/// nowhere to propagate an error to).
#[derive(Clone)]
pub struct NotificationSink {
    mailbox: Arc<ReplyMailbox>,
    strict: bool,
}

impl NotificationSink {
    pub fn new(mailbox: Arc<ReplyMailbox>, strict: bool) -> Self {
        Self { mailbox, strict }
    }

    /// Feed one complete inbound message from the transport.
    pub fn push(&self, bytes: &[u8]) {
        let decoded = if self.strict {
            Frame::decode_strict(bytes)
        } else {
            Frame::decode(bytes)
        };
        match decoded {
            Ok(frame) => {
                log::trace!(
                    "rx frame: {}",
                    crate::utils::bytes_to_hex_spaced(bytes)
                );
                self.mailbox.deliver(frame);
            }
            Err(err) => {
                log::warn!("dropping undecodable notification: {err}");
            }
        }
    }
}
