use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
use crate::core::engine::DialEngine;
use crate::core::{ConfigProvider, DialReport};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Run the command line flow and return what belongs on stdout.
///
/// With `--config`, the TOML file is loaded first and the flags override it.
pub async fn run_cli(cli: &CliConfig) -> Result<String> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            run_with(file_config.with_overrides(cli)).await
        }
        None => run_with(cli.clone()).await,
    }
}

async fn run_with<C: ConfigProvider + Validate>(config: C) -> Result<String> {
    config.validate()?;
    let format = config.output_format();
    let engine = DialEngine::new(LocalStorage::default(), config);
    let report = engine.run().await?;
    render(&report, format)
}

pub fn render(report: &DialReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
