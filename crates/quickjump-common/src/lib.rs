pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, PlatformError, QuickJumpError};
pub use events::{Event, EventBus};
pub use types::{Color, Tab, TabId};

pub type Result<T> = std::result::Result<T, QuickJumpError>;
