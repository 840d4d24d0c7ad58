#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::greeting::{get_message, MESSAGE};
pub use crate::utils::error::{GreetingError, Result};
