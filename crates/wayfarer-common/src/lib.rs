pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, PlatformError, WayfarerError};
pub use events::{Event, EventBus};
pub use id::TabId;
pub use types::Rect;

pub type Result<T> = std::result::Result<T, WayfarerError>;
