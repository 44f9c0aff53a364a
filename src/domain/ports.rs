use crate::domain::model::{AssetKey, CardRequest, DecodedImage};
use crate::utils::error::Result;

/// Read-only collection of card images.
///
/// Stores are built once at startup and never change afterwards. `fetch`
/// reports a missing key as `SpreadError::AssetNotFound` and unreadable image
/// bytes as `SpreadError::DecodeError`.
pub trait AssetStore {
    fn fetch(&self, key: &AssetKey) -> Result<DecodedImage>;

    /// Every stored key, sorted.
    fn list_keys(&self) -> Result<Vec<AssetKey>>;
}

impl<S: AssetStore + ?Sized> AssetStore for &S {
    fn fetch(&self, key: &AssetKey) -> Result<DecodedImage> {
        (**self).fetch(key)
    }

    fn list_keys(&self) -> Result<Vec<AssetKey>> {
        (**self).list_keys()
    }
}

/// Where a run gets its cards and output settings from.
pub trait SpreadSource {
    fn cards(&self) -> Vec<CardRequest>;
    fn output_path(&self) -> Option<&str>;
    fn spacing(&self) -> Option<u32>;
}
