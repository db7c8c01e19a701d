//! Configuration for procmap.
//!
//! Settings persist to disk as a RON file. Every section uses
//! `#[serde(default)]` so partial or older files still load, and CLI
//! arguments override whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, OutputConfig};
pub use error::ConfigError;
