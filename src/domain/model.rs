use std::fmt;

/// Marks a card as drawn upside down when it prefixes a token.
pub const REVERSED_MARKER: char = '!';

/// A decoded card image. Transforms always produce a fresh buffer.
pub type DecodedImage = image::RgbaImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub name: String,
    pub reversed: bool,
}

impl CardRequest {
    pub fn new(name: impl Into<String>, reversed: bool) -> Self {
        Self {
            name: name.into(),
            reversed,
        }
    }

    /// Parses one raw token such as `" !hermit "`.
    ///
    /// Returns `None` for tokens that hold no card name once whitespace and
    /// the reversed marker are stripped.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (name, reversed) = match token.strip_prefix(REVERSED_MARKER) {
            Some(rest) => (rest.trim(), true),
            None => (token, false),
        };

        if name.is_empty() {
            return None;
        }

        Some(Self::new(name, reversed))
    }
}

/// Parses every entry of a list, dropping the empty ones.
pub fn parse_card_tokens<'a, I>(tokens: I) -> Vec<CardRequest>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().filter_map(CardRequest::parse).collect()
}

/// Parses an inline list like `strength,!hermit,5_of_swords`.
pub fn parse_card_list(csv: &str) -> Vec<CardRequest> {
    parse_card_tokens(csv.split(','))
}

/// Canonical name of a stored card image, e.g. `minor_arcana_swords_5.png`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
