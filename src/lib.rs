pub mod app;
pub mod config;
pub mod errors;
pub mod io;
pub mod logging;
pub mod wrap;

// Re-export commonly used types
pub use crate::app::{run, RunReport};
pub use crate::config::Config;
pub use crate::errors::{AppError, AppResult};
pub use crate::io::InputPair;
pub use crate::wrap::{wrap, wrap_lines, WrapError};
