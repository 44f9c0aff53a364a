use crate::domain::model::{AssetKey, DecodedImage};
use crate::domain::ports::AssetStore;
use crate::utils::error::{Result, SpreadError};
use std::collections::BTreeMap;

/// Card images held as encoded bytes in memory, e.g. from `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    assets: BTreeMap<AssetKey, Vec<u8>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, key: impl Into<AssetKey>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(key, data);
        self
    }

    pub fn insert(&mut self, key: impl Into<AssetKey>, data: impl Into<Vec<u8>>) {
        self.assets.insert(key.into(), data.into());
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetStore for MemoryAssetStore {
    fn fetch(&self, key: &AssetKey) -> Result<DecodedImage> {
        let data = self
            .assets
            .get(key)
            .ok_or_else(|| SpreadError::AssetNotFound {
                key: key.to_string(),
            })?;
        super::decode_asset(key, data)
    }

    fn list_keys(&self) -> Result<Vec<AssetKey>> {
        Ok(self.assets.keys().cloned().collect())
    }
}
