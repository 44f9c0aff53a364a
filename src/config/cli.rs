use super::spread_file::SpreadFile;
use super::DEFAULT_OUTPUT;
use crate::adapters::dir_store::DEFAULT_CARDS_DIR;
use crate::core::compositor::DEFAULT_SPACING;
use crate::domain::model::{parse_card_list, CardRequest};
use crate::domain::ports::SpreadSource;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tarot-spread")]
#[command(about = "Lay out tarot card images side by side in a single PNG")]
pub struct CliConfig {
    /// Path to a YAML (or .toml) file listing the cards and output
    #[arg(long = "yaml", visible_alias = "config", short = 'y', value_name = "FILE")]
    pub config_file: Option<String>,

    /// Output PNG filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Comma-separated list of cards (e.g. strength,!hermit,5_of_swords)
    #[arg(short, long, value_name = "LIST")]
    pub cards: Option<String>,

    /// List all available card names
    #[arg(long)]
    pub list: bool,

    /// Print the card list as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Directory holding the card images
    #[arg(long, env = "TAROT_CARDS_DIR", default_value = DEFAULT_CARDS_DIR)]
    pub cards_dir: String,

    /// Gap between cards in pixels
    #[arg(long, default_value_t = DEFAULT_SPACING)]
    pub spacing: u32,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    ConfigFile(String),
    Inline,
    Usage,
}

impl CliConfig {
    /// Picks the mode, preferring `--list`, then the config file, then `--cards`.
    pub fn mode(&self) -> Mode {
        let given = [self.list, self.config_file.is_some(), self.cards.is_some()]
            .iter()
            .filter(|set| **set)
            .count();
        if given > 1 {
            tracing::warn!("Several inputs given; using --list, then --yaml, then --cards");
        }

        if self.list {
            Mode::List
        } else if let Some(path) = &self.config_file {
            Mode::ConfigFile(path.clone())
        } else if self.cards.is_some() {
            Mode::Inline
        } else {
            Mode::Usage
        }
    }

    /// Output path, letting a config file override the flag.
    pub fn resolve_output(&self, file: Option<&SpreadFile>) -> String {
        file.and_then(|f| f.output_path())
            .or_else(|| self.output_path())
            .unwrap_or(DEFAULT_OUTPUT)
            .to_string()
    }

    /// Card gap, letting a config file override the flag.
    pub fn resolve_spacing(&self, file: Option<&SpreadFile>) -> u32 {
        file.and_then(|f| f.spacing())
            .or_else(|| SpreadSource::spacing(self))
            .unwrap_or(DEFAULT_SPACING)
    }
}

impl SpreadSource for CliConfig {
    fn cards(&self) -> Vec<CardRequest> {
        self.cards.as_deref().map(parse_card_list).unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        Some(self.output.as_str()).filter(|output| !output.trim().is_empty())
    }

    fn spacing(&self) -> Option<u32> {
        Some(self.spacing)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_output_path("output", &self.output)?;
        validation::validate_cards_dir("cards_dir", &self.cards_dir)?;
        validation::validate_spacing("spacing", self.spacing)?;
        Ok(())
    }
}
