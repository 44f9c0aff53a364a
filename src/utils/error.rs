use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreadError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No asset stored under key '{key}'")]
    AssetNotFound { key: String },

    #[error("Card '{card}' not found (looked for asset '{key}')")]
    CardNotFound { card: String, key: String },

    #[error("Asset '{key}' is not a valid image: {source}")]
    DecodeError {
        key: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read asset '{key}': {source}")]
    AssetIoError {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list assets in '{}': {source}", .path.display())]
    AssetDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Spread of {cards} cards ({card_width}x{card_height}, spacing {spacing}) is too large to compose"
    )]
    CanvasTooLarge {
        cards: usize,
        card_width: u32,
        card_height: u32,
        spacing: u32,
    },

    #[error("No cards provided")]
    EmptyInput,

    #[error("Failed to encode spread: {0}")]
    EncodeError(#[source] image::ImageError),

    #[error("Failed to write output file '{}': {source}", .path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Asset,
    Usage,
    Output,
}

impl SpreadError {
    /// Attaches the user-facing card name to a lookup failure coming out of an asset store.
    pub fn for_card(self, card: &str) -> Self {
        match self {
            SpreadError::AssetNotFound { key } => SpreadError::CardNotFound {
                card: card.to_string(),
                key,
            },
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SpreadError::ConfigReadError { .. }
            | SpreadError::YamlError(_)
            | SpreadError::TomlError(_)
            | SpreadError::InvalidConfigValueError { .. }
            | SpreadError::CanvasTooLarge { .. } => ErrorCategory::Input,
            SpreadError::AssetNotFound { .. }
            | SpreadError::CardNotFound { .. }
            | SpreadError::DecodeError { .. }
            | SpreadError::AssetIoError { .. }
            | SpreadError::AssetDirError { .. } => ErrorCategory::Asset,
            SpreadError::EmptyInput => ErrorCategory::Usage,
            SpreadError::EncodeError(_)
            | SpreadError::OutputError { .. }
            | SpreadError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    /// Process exit status for this failure. Usage problems get their own code.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SpreadError::CardNotFound { card, .. } => format!("Unknown card: {}", card),
            SpreadError::EmptyInput => "No cards were given".to_string(),
            SpreadError::OutputError { path, .. } => {
                format!("Could not save the spread to {}", path.display())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the config file exists and lists its cards under `cards:`",
            ErrorCategory::Asset => "Run with --list to see the available card names",
            ErrorCategory::Usage => "Pass cards with -c, a config file with --yaml, or use --list",
            ErrorCategory::Output => "Check that the output directory exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, SpreadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_card_names_the_requested_card() {
        let err = SpreadError::AssetNotFound {
            key: "major_arcana_fool.png".to_string(),
        }
        .for_card("Fool");

        match &err {
            SpreadError::CardNotFound { card, key } => {
                assert_eq!(card, "Fool");
                assert_eq!(key, "major_arcana_fool.png");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("'Fool'"));
    }

    #[test]
    fn test_for_card_keeps_other_errors() {
        let err = SpreadError::EmptyInput.for_card("hermit");
        assert!(matches!(err, SpreadError::EmptyInput));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SpreadError::EmptyInput.exit_code(), 2);
        let missing = SpreadError::CardNotFound {
            card: "x".to_string(),
            key: "major_arcana_x.png".to_string(),
        };
        assert_eq!(missing.exit_code(), 1);
        assert_eq!(missing.category(), ErrorCategory::Asset);

        let too_large = SpreadError::CanvasTooLarge {
            cards: 2,
            card_width: 1,
            card_height: 1,
            spacing: u32::MAX,
        };
        assert_eq!(too_large.category(), ErrorCategory::Input);
        assert_eq!(too_large.exit_code(), 1);
    }
}
