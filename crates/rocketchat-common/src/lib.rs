pub mod errors;
pub mod events;

pub use errors::{ConfigError, RocketChatError};
pub use events::{SessionEvent, SessionEventBus};
