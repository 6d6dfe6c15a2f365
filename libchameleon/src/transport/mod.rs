// libchameleon/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{MockTransport, SentLog};
pub use traits::Transport;
