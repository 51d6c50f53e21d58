//! Terminal Front End
//!
//! Everything that touches the outside world: configuration, text
//! rendering, the interactive loop and history export.

pub mod config;
pub mod console;
pub mod export;
pub mod render;

// Re-export key types
pub use config::{Cli, GameConfig, ConfigError};
pub use console::{run, ConsoleError};
pub use export::{write_history, ExportError};
