//! Card name ↔ asset key mapping.
//!
//! User-facing minor cards read `<rank>_of_<suit>` while stored keys put the
//! suit first (`minor_arcana_<suit>_<rank>.png`). Both directions live here so
//! the swap stays in one place.

use crate::domain::model::AssetKey;

pub const IMAGE_EXTENSION: &str = ".png";
pub const MAJOR_PREFIX: &str = "major_arcana_";
pub const MINOR_PREFIX: &str = "minor_arcana_";

const QUALIFIED_PREFIXES: [&str; 2] = ["major_", "minor_"];
const OF_SEPARATOR: &str = "_of_";

/// Lowercases and replaces spaces and hyphens with underscores.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

/// Maps a card name to the key of its stored image.
///
/// Branches are tried in order: already-qualified keys pass through, then
/// `<rank>_of_<suit>` becomes a minor card, anything else a major card.
pub fn resolve(name: &str) -> AssetKey {
    let card = normalize(name);

    if QUALIFIED_PREFIXES.iter().any(|p| card.starts_with(p)) {
        return AssetKey::new(format!("{}{}", card, IMAGE_EXTENSION));
    }

    if card.contains(OF_SEPARATOR) {
        let mut parts = card.split(OF_SEPARATOR);
        let rank = parts.next().unwrap_or_default();
        let suit = parts.next().unwrap_or_default();
        return AssetKey::new(format!(
            "{}{}_{}{}",
            MINOR_PREFIX, suit, rank, IMAGE_EXTENSION
        ));
    }

    AssetKey::new(format!("{}{}{}", MAJOR_PREFIX, card, IMAGE_EXTENSION))
}

/// Turns a stored key back into the name a user would type.
///
/// Keys outside the major/minor naming scheme have no display name.
pub fn display_name(key: &AssetKey) -> Option<String> {
    let base = key
        .as_str()
        .strip_suffix(IMAGE_EXTENSION)
        .unwrap_or(key.as_str());

    if let Some(major) = base.strip_prefix(MAJOR_PREFIX) {
        return Some(major.to_string());
    }

    if base.starts_with(MINOR_PREFIX) {
        let parts: Vec<&str> = base.split('_').collect();
        if parts.len() >= 4 {
            return Some(format!("{}_of_{}", parts[3..].join("_"), parts[2]));
        }
    }

    None
}
