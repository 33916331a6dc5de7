use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialError {
    #[error("Bad line {line_number}: {line:?} ({reason})")]
    ParseError {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DialError {
    pub fn parse(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        DialError::ParseError {
            line_number,
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DialError::ParseError { .. } => 1,
            DialError::ConfigError { .. } | DialError::InvalidConfigValueError { .. } => 2,
            DialError::IoError(_) | DialError::SerializationError(_) => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DialError::ParseError { .. } => {
                "Every non-empty line must be UTF-8 text: R or L followed by a non-negative integer"
            }
            DialError::IoError(_) => "Check that the input file exists and is readable",
            DialError::SerializationError(_) => "Try the text output format instead",
            DialError::ConfigError { .. } | DialError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DialError>;
