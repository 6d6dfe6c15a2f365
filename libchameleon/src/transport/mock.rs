// libchameleon/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::bridge::NotificationSink;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Shared view of the frames a [`MockTransport`] has written, usable
/// after the transport itself has been boxed away behind the trait.
#[derive(Clone, Default)]
pub struct SentLog(Arc<Mutex<Vec<Vec<u8>>>>);

impl SentLog {
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec<u8>> {
        self.lock().get(index).cloned()
    }

    pub fn last(&self) -> Option<Vec<u8>> {
        self.lock().last().cloned()
    }

    pub fn all(&self) -> Vec<Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<u8>>> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, frame: Vec<u8>) {
        self.lock().push(frame);
    }
}

/// Mock transport for unit tests. Records every outbound frame and plays
/// back pre-seeded reply frames through the notification sink, one per
/// write, which matches the device's strict request/reply cadence.
#[derive(Default)]
pub struct MockTransport {
    sent: SentLog,
    /// Queued raw reply frames, consumed one per write
    pub replies: VecDeque<Vec<u8>>,
    /// Testing hook: number of writes that should fail
    pub write_failures: usize,
    sink: Option<NotificationSink>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw reply frame to be delivered after the next unanswered
    /// write.
    pub fn push_reply(&mut self, frame: Vec<u8>) {
        self.replies.push_back(frame);
    }

    /// Make the next `n` writes fail with a transport error.
    pub fn fail_writes(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Handle onto the record of written frames. Clones share the same
    /// underlying log, so it stays usable after the transport is moved
    /// into a session.
    pub fn sent_log(&self) -> SentLog {
        self.sent.clone()
    }

    /// Last frame written, if any.
    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.sent.last()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::TransportWrite("mock write failure".into()));
        }
        self.sent.push(data.to_vec());

        // Immediate playback keeps single-threaded tests simple: the
        // reply is already in the mailbox by the time the dispatcher
        // starts waiting.
        if let (Some(reply), Some(sink)) = (self.replies.pop_front(), self.sink.as_ref()) {
            sink.push(&reply);
        }
        Ok(())
    }

    fn subscribe(&mut self, sink: NotificationSink) -> Result<()> {
        self.sink = Some(sink);
        Ok(())
    }
}
