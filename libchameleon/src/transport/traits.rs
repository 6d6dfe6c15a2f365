// libchameleon/src/transport/traits.rs

use crate::Result;
use crate::bridge::NotificationSink;

/// Contract of the connection layer (BLE, serial, ...), which is outside
/// this crate. The transport must deliver whole, ordered messages or fail
/// cleanly; it never interprets frame contents.
pub trait Transport: Send {
    /// Write one complete outbound frame.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Register the receive sink. Called once per session; every complete
    /// inbound message must be pushed into the sink from the transport's
    /// own receive context (notification callback, reader thread, ...).
    fn subscribe(&mut self, sink: NotificationSink) -> Result<()>;
}
