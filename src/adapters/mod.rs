// Adapters layer: concrete asset store backends.

pub mod dir_store;
pub mod memory_store;

pub use dir_store::DirAssetStore;
pub use memory_store::MemoryAssetStore;

use crate::domain::model::{AssetKey, DecodedImage};
use crate::utils::error::{Result, SpreadError};

fn decode_asset(key: &AssetKey, data: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory(data).map_err(|source| SpreadError::DecodeError {
        key: key.to_string(),
        source,
    })?;
    Ok(img.to_rgba8())
}
