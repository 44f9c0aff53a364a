use crate::core::resolver::display_name;
use crate::domain::ports::AssetStore;
use crate::utils::error::Result;

/// User-facing names of every card in the store, in key order.
///
/// Keys that do not follow the major/minor naming scheme are skipped.
pub fn list_cards<S: AssetStore>(store: &S) -> Result<Vec<String>> {
    let keys = store.list_keys()?;
    let names: Vec<String> = keys
        .iter()
        .filter_map(|key| {
            let name = display_name(key);
            if name.is_none() {
                tracing::debug!("Skipping asset '{}' outside the card naming scheme", key);
            }
            name
        })
        .collect();

    tracing::debug!("Listed {} of {} assets", names.len(), keys.len());
    Ok(names)
}

/// Listing rendered as a JSON array of names.
pub fn list_cards_json<S: AssetStore>(store: &S) -> Result<String> {
    Ok(serde_json::to_string_pretty(&list_cards(store)?)?)
}
