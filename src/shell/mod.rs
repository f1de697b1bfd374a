//! External command execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CommandRunner, ProcessRunner, ToolOutput};
pub use mock::{MockRunner, RecordedCall};
pub use platform::is_ci;
