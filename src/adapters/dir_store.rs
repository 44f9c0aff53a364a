use crate::core::resolver::IMAGE_EXTENSION;
use crate::domain::model::{AssetKey, DecodedImage};
use crate::domain::ports::AssetStore;
use crate::utils::error::{Result, SpreadError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CARDS_DIR: &str = "cards";

/// Card images stored as `<key>` files in one directory.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    base_path: PathBuf,
}

impl DirAssetStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, key: &AssetKey) -> Option<PathBuf> {
        // Keys are plain file names; anything that could leave the directory is unknown.
        let name = key.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return None;
        }
        Some(self.base_path.join(name))
    }
}

impl AssetStore for DirAssetStore {
    fn fetch(&self, key: &AssetKey) -> Result<DecodedImage> {
        let path = self.path_for(key).ok_or_else(|| SpreadError::AssetNotFound {
            key: key.to_string(),
        })?;

        let data = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SpreadError::AssetNotFound {
                key: key.to_string(),
            },
            _ => SpreadError::AssetIoError {
                key: key.to_string(),
                source: e,
            },
        })?;

        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        super::decode_asset(key, &data)
    }

    fn list_keys(&self) -> Result<Vec<AssetKey>> {
        let dir_error = |source| SpreadError::AssetDirError {
            path: self.base_path.clone(),
            source,
        };

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.base_path).map_err(dir_error)? {
            let entry = entry.map_err(dir_error)?;
            if !entry.file_type().map_err(dir_error)?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(IMAGE_EXTENSION) {
                    keys.push(AssetKey::new(name));
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn write_card(dir: &Path, name: &str) {
        DecodedImage::from_pixel(2, 3, Rgba([1, 2, 3, 255]))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn test_fetch_decodes_stored_png() {
        let temp_dir = TempDir::new().unwrap();
        write_card(temp_dir.path(), "major_arcana_sun.png");

        let store = DirAssetStore::new(temp_dir.path());
        let img = store.fetch(&AssetKey::from("major_arcana_sun.png")).unwrap();
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(img.get_pixel(1, 2), &Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirAssetStore::new(temp_dir.path());

        let err = store.fetch(&AssetKey::from("major_arcana_moon.png")).unwrap_err();
        assert!(matches!(err, SpreadError::AssetNotFound { ref key } if key == "major_arcana_moon.png"));
    }

    #[test]
    fn test_keys_cannot_escape_the_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirAssetStore::new(temp_dir.path().join("cards"));
        write_card(temp_dir.path(), "outside.png");

        let err = store.fetch(&AssetKey::from("../outside.png")).unwrap_err();
        assert!(matches!(err, SpreadError::AssetNotFound { .. }));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("major_arcana_fool.png"), b"not a png").unwrap();

        let store = DirAssetStore::new(temp_dir.path());
        let err = store.fetch(&AssetKey::from("major_arcana_fool.png")).unwrap_err();
        assert!(matches!(err, SpreadError::DecodeError { .. }));
    }

    #[test]
    fn test_list_keys_is_sorted_and_png_only() {
        let temp_dir = TempDir::new().unwrap();
        write_card(temp_dir.path(), "minor_arcana_swords_5.png");
        write_card(temp_dir.path(), "major_arcana_strength.png");
        fs::write(temp_dir.path().join("README.txt"), b"cards").unwrap();
        fs::create_dir(temp_dir.path().join("nested.png")).unwrap();

        let store = DirAssetStore::new(temp_dir.path());
        let keys = store.list_keys().unwrap();
        assert_eq!(
            keys,
            vec![
                AssetKey::from("major_arcana_strength.png"),
                AssetKey::from("minor_arcana_swords_5.png"),
            ]
        );
    }

    #[test]
    fn test_list_keys_on_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = DirAssetStore::new(temp_dir.path().join("nope"));
        assert!(matches!(
            store.list_keys(),
            Err(SpreadError::AssetDirError { .. })
        ));
    }
}
