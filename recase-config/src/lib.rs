//! recase.toml parsing and validation.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{Config, ConvertConfig, KeysConfig, NamingConfig, parse_config};
pub use error::{Error, Result, SourceContext};
pub use file::{DEFAULT_CONFIG_FILE, RecaseToml};
