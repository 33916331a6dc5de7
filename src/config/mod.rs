pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, DialSettings};
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, VariantSelection};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_dial_settings, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "input/input_d1.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "dial-zeros")]
#[command(about = "Count how often a rotary dial stops on or passes zero")]
pub struct CliConfig {
    /// Instruction file, one R<n> or L<n> per line
    pub input: Option<String>,

    /// TOML configuration file; flags given here override it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of positions on the dial
    #[arg(long)]
    pub size: Option<i64>,

    /// Starting position
    #[arg(long)]
    pub start: Option<i64>,

    #[arg(long, value_enum)]
    pub variant: Option<VariantSelection>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn dial_settings(&self) -> DialSettings {
        let defaults = DialSettings::default();
        DialSettings {
            size: self.size.unwrap_or(defaults.size),
            start: self.start.unwrap_or(defaults.start),
        }
    }

    fn variant_selection(&self) -> VariantSelection {
        self.variant.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input", self.input_path())?;
        validate_dial_settings("dial", &self.dial_settings())
    }
}
