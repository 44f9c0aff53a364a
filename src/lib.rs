pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{DirAssetStore, MemoryAssetStore};
pub use config::SpreadFile;
pub use crate::core::{catalog::list_cards, resolver::resolve, spread::SpreadEngine};
pub use domain::model::{AssetKey, CardRequest, DecodedImage};
pub use domain::ports::AssetStore;
pub use utils::error::{Result, SpreadError};
