use crate::domain::model::{parse_card_tokens, CardRequest};
use crate::domain::ports::SpreadSource;
use crate::utils::error::{Result, SpreadError};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Reading description loaded from a YAML or TOML file.
///
/// ```yaml
/// cards:
///   - strength
///   - "!hermit"
///   - 5 of swords
/// output: reading.png
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpreadFile {
    #[serde(default)]
    pub cards: Vec<String>,
    pub output: Option<String>,
    pub spacing: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Toml,
}

impl FileFormat {
    /// `.toml` files are TOML, everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
            _ => FileFormat::Yaml,
        }
    }
}

impl SpreadFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| SpreadError::ConfigReadError {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Read {} bytes of config from {}", content.len(), path.display());
        Self::from_str_with_format(&content, FileFormat::from_path(path))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, FileFormat::Yaml)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, FileFormat::Toml)
    }

    fn from_str_with_format(content: &str, format: FileFormat) -> Result<Self> {
        let content = substitute_env_vars(content);
        let file = match format {
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };
        Ok(file)
    }
}

/// Replaces `${VAR}` with the variable's value. Unset variables stay as written.
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

    re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl SpreadSource for SpreadFile {
    fn cards(&self) -> Vec<CardRequest> {
        parse_card_tokens(self.cards.iter().map(String::as_str))
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref().filter(|output| !output.trim().is_empty())
    }

    fn spacing(&self) -> Option<u32> {
        self.spacing
    }
}

impl Validate for SpreadFile {
    fn validate(&self) -> Result<()> {
        if let Some(output) = self.output_path() {
            validation::validate_output_path("output", output)?;
        }
        if let Some(spacing) = self.spacing {
            validation::validate_spacing("spacing", spacing)?;
        }
        Ok(())
    }
}
