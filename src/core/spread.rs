use crate::core::compositor::{compose, encode_png, DEFAULT_SPACING};
use crate::core::orientation::orient;
use crate::core::resolver::resolve;
use crate::domain::model::{CardRequest, DecodedImage};
use crate::domain::ports::AssetStore;
use crate::utils::error::{Result, SpreadError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Runs the resolve → fetch → orient → compose → encode pipeline for one spread.
pub struct SpreadEngine<S: AssetStore> {
    store: S,
    spacing: u32,
}

impl<S: AssetStore> SpreadEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            spacing: DEFAULT_SPACING,
        }
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Loads every card, rotating the reversed ones. Fails on the first missing card.
    pub fn load_cards(&self, cards: &[CardRequest]) -> Result<Vec<DecodedImage>> {
        cards
            .iter()
            .map(|card| -> Result<DecodedImage> {
                let key = resolve(&card.name);
                tracing::debug!("Resolved '{}' to '{}'", card.name, key);
                let img = self.store.fetch(&key).map_err(|e| e.for_card(&card.name))?;
                Ok(orient(img, card))
            })
            .collect()
    }

    pub fn render(&self, cards: &[CardRequest]) -> Result<DecodedImage> {
        if cards.is_empty() {
            return Err(SpreadError::EmptyInput);
        }

        tracing::info!("Loading {} cards...", cards.len());
        let images = self.load_cards(cards)?;

        tracing::info!("Composing spread...");
        let canvas = compose(&images, self.spacing)?;
        tracing::info!("Spread is {}x{}", canvas.width(), canvas.height());

        Ok(canvas)
    }

    pub fn render_png(&self, cards: &[CardRequest]) -> Result<Vec<u8>> {
        let canvas = self.render(cards)?;
        encode_png(&canvas)
    }

    /// Renders the spread and writes it to `output`.
    ///
    /// The PNG is fully encoded before the file is created, so failures while
    /// loading or composing never leave a file behind.
    pub fn run(&self, cards: &[CardRequest], output: impl AsRef<Path>) -> Result<PathBuf> {
        let output = output.as_ref();
        let png = self.render_png(cards)?;

        tracing::info!("Writing {} bytes to {}", png.len(), output.display());
        write_output(output, &png)?;

        Ok(output.to_path_buf())
    }
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let output_error = |source| SpreadError::OutputError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data).map_err(output_error)?;
    writer.flush().map_err(output_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryAssetStore;
    use crate::core::orientation::reverse;
    use crate::domain::model::parse_card_list;
    use image::Rgba;
    use tempfile::TempDir;

    fn card(seed: u8) -> DecodedImage {
        DecodedImage::from_fn(4, 6, |x, y| Rgba([seed, x as u8, y as u8, 255]))
    }

    fn store() -> MemoryAssetStore {
        MemoryAssetStore::new()
            .with_asset("major_arcana_strength.png", encode_png(&card(1)).unwrap())
            .with_asset("major_arcana_hermit.png", encode_png(&card(2)).unwrap())
            .with_asset("minor_arcana_swords_5.png", encode_png(&card(3)).unwrap())
    }

    #[test]
    fn test_render_reading() {
        let engine = SpreadEngine::new(store()).with_spacing(5);
        let cards = parse_card_list("strength,!hermit,5_of_swords");
        let canvas = engine.render(&cards).unwrap();

        assert_eq!(canvas.dimensions(), (3 * 4 + 2 * 5, 6));

        let hermit = reverse(&card(2));
        for (x, y, pixel) in hermit.enumerate_pixels() {
            assert_eq!(canvas.get_pixel(9 + x, y), pixel);
        }
        assert_eq!(canvas.get_pixel(18, 0), card(3).get_pixel(0, 0));
    }

    #[test]
    fn test_default_spacing() {
        let engine = SpreadEngine::new(store());
        assert_eq!(engine.spacing(), DEFAULT_SPACING);
        let canvas = engine
            .render(&parse_card_list("strength,hermit"))
            .unwrap();
        assert_eq!(canvas.width(), 2 * 4 + DEFAULT_SPACING);
    }

    #[test]
    fn test_huge_spacing_fails_without_panicking() {
        let engine = SpreadEngine::new(store()).with_spacing(u32::MAX);
        let err = engine
            .render(&parse_card_list("strength,hermit"))
            .unwrap_err();
        assert!(matches!(err, SpreadError::CanvasTooLarge { .. }));
    }

    #[test]
    fn test_unknown_card_names_the_request() {
        let engine = SpreadEngine::new(store());
        let err = engine
            .render(&parse_card_list("strength,Ten of Pentacles"))
            .unwrap_err();

        match err {
            SpreadError::CardNotFound { card, key } => {
                assert_eq!(card, "Ten of Pentacles");
                assert_eq!(key, "minor_arcana_pentacles_ten.png");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_run_writes_nothing_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("spread.png");
        let engine = SpreadEngine::new(store());

        assert!(matches!(engine.run(&[], &output), Err(SpreadError::EmptyInput)));
        assert!(engine.run(&parse_card_list("moon"), &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("spread.png");
        let engine = SpreadEngine::new(store()).with_spacing(0);

        let written = engine.run(&parse_card_list("!strength"), &output).unwrap();
        assert_eq!(written, output);

        let saved = image::open(&output).unwrap().to_rgba8();
        assert_eq!(saved, reverse(&card(1)));
    }

    #[test]
    fn test_unwritable_output_is_an_output_error() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("spread.png");
        let engine = SpreadEngine::new(store());

        let err = engine.run(&parse_card_list("strength"), &output).unwrap_err();
        assert!(matches!(err, SpreadError::OutputError { .. }));
    }
}
