#[cfg(feature = "cli")]
pub mod cli;
pub mod spread_file;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Mode};
pub use spread_file::SpreadFile;

pub const DEFAULT_OUTPUT: &str = "spread.png";
