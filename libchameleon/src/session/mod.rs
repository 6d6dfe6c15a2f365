// libchameleon/src/session/mod.rs

//! Device session: the command dispatcher plus per-area operations.
//!
//! A [`Session`] owns the transport for exactly one device and issues
//! commands strictly one at a time. Replies carry no correlation id, so
//! request/reply matching is purely temporal; every entry point takes
//! `&mut self`, which makes the single-outstanding-request contract a
//! compile-time property instead of a runtime convention.

mod emulation;
mod gen1a;
mod hf;
mod hw;
mod lf;

pub use gen1a::RawStep;
pub use hw::BatteryInfo;

use std::sync::Arc;
use std::time::Duration;

use crate::bridge::{NotificationSink, ReplyMailbox};
use crate::protocol::commands::CommandCode;
use crate::protocol::responses::ClassifiedReply;
use crate::protocol::Frame;
use crate::tag;
use crate::transport::Transport;
use crate::types::{HfTagRecord, LfTagRecord, MifareKey, TagType, VersionRecord};
use crate::utils::{bytes_to_hex_spaced, default_reply_timeout};
use crate::{Error, Result};

/// Configuration builder for [`Session`].
pub struct SessionBuilder {
    transport: Box<dyn Transport>,
    timeout: Duration,
    strict: bool,
    mifare_key: MifareKey,
}

impl SessionBuilder {
    /// Reply timeout applied to every command unless overridden per call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Verify magic bytes and both checksums on every received frame.
    /// Off by default, matching the device protocol's receive path.
    pub fn strict_decode(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Key used by authenticated block operations when the caller does
    /// not supply one.
    pub fn mifare_key(mut self, key: MifareKey) -> Self {
        self.mifare_key = key;
        self
    }

    pub fn build(self) -> Result<Session> {
        let mailbox = ReplyMailbox::new();
        let sink = NotificationSink::new(Arc::clone(&mailbox), self.strict);
        let mut transport = self.transport;
        transport.subscribe(sink.clone())?;
        Ok(Session {
            transport,
            mailbox,
            sink,
            timeout: self.timeout,
            mifare_key: self.mifare_key,
            last_lf: None,
            last_hf: None,
            last_version: None,
        })
    }
}

/// A live protocol session with one device.
pub struct Session {
    transport: Box<dyn Transport>,
    mailbox: Arc<ReplyMailbox>,
    sink: NotificationSink,
    timeout: Duration,
    mifare_key: MifareKey,
    last_lf: Option<LfTagRecord>,
    last_hf: Option<HfTagRecord>,
    last_version: Option<VersionRecord>,
}

impl Session {
    /// Open a session over the given transport with default settings.
    pub fn new(transport: Box<dyn Transport>) -> Result<Self> {
        Self::builder(transport).build()
    }

    pub fn builder(transport: Box<dyn Transport>) -> SessionBuilder {
        SessionBuilder {
            transport,
            timeout: default_reply_timeout(),
            strict: false,
            mifare_key: MifareKey::default(),
        }
    }

    /// Send one command and block for its classified reply.
    pub fn send_command(
        &mut self,
        command: CommandCode,
        payload: &[u8],
    ) -> Result<ClassifiedReply> {
        let timeout = self.timeout;
        self.send_command_with_timeout(command, payload, timeout)
    }

    /// Send one command with an explicit reply timeout.
    pub fn send_command_with_timeout(
        &mut self,
        command: CommandCode,
        payload: &[u8],
        timeout: Duration,
    ) -> Result<ClassifiedReply> {
        let bytes = Frame::encode(command.as_u16(), payload)?;

        // A late reply to a previously timed-out command may still be
        // sitting in the slot; it must never be matched to this request.
        self.mailbox.clear();

        log::debug!("tx {:?}: {}", command, bytes_to_hex_spaced(&bytes));
        self.transport.write(&bytes)?;

        let frame = self.mailbox.wait(timeout)?;
        let reply = ClassifiedReply::from_frame(frame);
        log::debug!(
            "rx {:?}: status {:#04x}, {} payload bytes",
            command,
            reply.status.as_u8(),
            reply.payload.len()
        );
        Ok(reply)
    }

    /// Handle for feeding inbound messages from a receive context the
    /// transport cannot reach itself (and for tests that fabricate
    /// device traffic).
    pub fn notification_sink(&self) -> NotificationSink {
        self.sink.clone()
    }

    /// Default reply timeout for this session.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Key used for authenticated block operations when none is given.
    pub fn mifare_key(&self) -> &MifareKey {
        &self.mifare_key
    }

    pub fn set_mifare_key(&mut self, key: MifareKey) {
        self.mifare_key = key;
    }

    /// Most recent LF scan result.
    pub fn last_lf_tag(&self) -> Option<&LfTagRecord> {
        self.last_lf.as_ref()
    }

    /// Most recent HF scan result.
    pub fn last_hf_tag(&self) -> Option<&HfTagRecord> {
        self.last_hf.as_ref()
    }

    /// Version record from the most recent GET_VERSION exchange; cleared
    /// by the next HF scan.
    pub fn last_version(&self) -> Option<&VersionRecord> {
        self.last_version.as_ref()
    }

    /// Classify the most recently scanned HF tag, refined by the cached
    /// version record when one is present.
    pub fn tag_type(&self) -> Result<TagType> {
        let record = self.last_hf.as_ref().ok_or(Error::TagNotFound)?;
        Ok(tag::classify(record.sak(), self.last_version.as_ref()))
    }

    pub(crate) fn cache_lf_tag(&mut self, record: LfTagRecord) {
        self.last_lf = Some(record);
    }

    pub(crate) fn cache_hf_tag(&mut self, record: HfTagRecord) {
        self.last_hf = Some(record);
        // Any cached version data described the previous tag
        self.last_version = None;
    }

    pub(crate) fn cache_version(&mut self, record: VersionRecord) {
        self.last_version = Some(record);
    }
}
