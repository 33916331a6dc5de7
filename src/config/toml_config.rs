use crate::config::DEFAULT_INPUT_PATH;
use crate::core::{ConfigProvider, DialSettings};
use crate::domain::model::{OutputFormat, VariantSelection};
use crate::utils::error::{DialError, Result};
use crate::utils::validation::{validate_dial_settings, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub dial: DialConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_INPUT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialConfig {
    pub size: Option<i64>,
    pub start: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub variant: Option<VariantSelection>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DialError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DialError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DIAL_INPUT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DialError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 套用命令列覆蓋設定
    #[cfg(feature = "cli")]
    pub fn with_overrides(mut self, cli: &crate::config::CliConfig) -> Self {
        if let Some(input) = &cli.input {
            self.input.path = input.clone();
        }
        if let Some(size) = cli.size {
            self.dial.size = Some(size);
        }
        if let Some(start) = cli.start {
            self.dial.start = Some(start);
        }
        if let Some(format) = cli.format {
            self.output.format = Some(format);
        }
        if let Some(variant) = cli.variant {
            self.output.variant = Some(variant);
        }
        self
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn dial_settings(&self) -> DialSettings {
        let defaults = DialSettings::default();
        DialSettings {
            size: self.dial.size.unwrap_or(defaults.size),
            start: self.dial.start.unwrap_or(defaults.start),
        }
    }

    fn variant_selection(&self) -> VariantSelection {
        self.output.variant.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_dial_settings("dial", &self.dial_settings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
path = "puzzles/day1.txt"

[dial]
size = 40
start = 10

[output]
format = "json"
variant = "crossing"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "puzzles/day1.txt");
        assert_eq!(config.dial_settings(), DialSettings { size: 40, start: 10 });
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.variant_selection(), VariantSelection::Crossing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.input_path(), DEFAULT_INPUT_PATH);
        assert_eq!(config.dial_settings(), DialSettings::default());
        assert_eq!(config.variant_selection(), VariantSelection::Both);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DIAL_ZEROS_TEST_INPUT", "from-env.txt");

        let toml_content = r#"
[input]
path = "${DIAL_ZEROS_TEST_INPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.path, "from-env.txt");

        std::env::remove_var("DIAL_ZEROS_TEST_INPUT");
    }

    #[test]
    fn test_unknown_env_var_is_left_alone() {
        let toml_content = r#"
[input]
path = "${DIAL_ZEROS_SURELY_UNSET}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.path, "${DIAL_ZEROS_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[dial]
size = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[dial\nsize = ").unwrap_err();
        assert!(matches!(err, DialError::ConfigError { .. }));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_content = r#"
[output]
format = "yaml"
"#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
path = "file-test.txt"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), "file-test.txt");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file_values() {
        use clap::Parser;

        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "from-file.txt"

[dial]
size = 40
start = 10
"#,
        )
        .unwrap();
        let cli = crate::config::CliConfig::parse_from(["dial-zeros", "cli.txt", "--start", "5"]);

        let merged = config.with_overrides(&cli);
        assert_eq!(merged.input_path(), "cli.txt");
        assert_eq!(merged.dial_settings(), DialSettings { size: 40, start: 5 });
    }
}
