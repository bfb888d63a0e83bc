use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpError {
    #[error("Usage error: {message}")]
    Usage { message: String },

    #[error("The specified path {} is not in the windows filesystem", .path.display())]
    NotInspectable { path: PathBuf },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to launch {}", .program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExpError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Every failure is terminal and reported the same way to the shell.
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }

    pub fn is_not_inspectable(&self) -> bool {
        matches!(self, Self::NotInspectable { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_inspectable_message_names_path() {
        let err = ExpError::NotInspectable {
            path: PathBuf::from("/home/user"),
        };
        assert_eq!(
            err.to_string(),
            "The specified path /home/user is not in the windows filesystem"
        );
        assert!(err.is_not_inspectable());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_usage_helper() {
        let err = ExpError::usage("too many arguments");
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "Usage error: too many arguments");
    }
}
