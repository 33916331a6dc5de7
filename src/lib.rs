#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::dial::{run, Dial};
pub use crate::core::engine::DialEngine;
pub use crate::core::parser::{parse, parse_bytes, parse_str};
pub use domain::model::{
    DialReport, DialSettings, DialVariant, Instructions, OutputFormat, Turn, VariantSelection,
};
pub use utils::error::{DialError, Result};
