//! Horizontal spread layout and PNG encoding.

use crate::domain::model::DecodedImage;
use crate::utils::error::{Result, SpreadError};
use image::{imageops, ImageFormat, Rgba};
use std::io::Cursor;

/// Gap between neighbouring cards, in pixels.
pub const DEFAULT_SPACING: u32 = 20;
/// Largest accepted gap between cards.
pub const MAX_SPACING: u32 = 4096;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Canvas size for `count` cards of `card_width`×`card_height`.
///
/// Returns `None` when the width does not fit in a `u32` or the RGBA buffer
/// would not fit in memory addressing.
pub fn canvas_size(
    count: usize,
    card_width: u32,
    card_height: u32,
    spacing: u32,
) -> Option<(u32, u32)> {
    let count = u32::try_from(count).ok()?;
    let gaps = count.saturating_sub(1).checked_mul(spacing)?;
    let width = count.checked_mul(card_width)?.checked_add(gaps)?;

    let bytes = u64::from(width)
        .checked_mul(u64::from(card_height))?
        .checked_mul(4)?;
    usize::try_from(bytes).ok()?;

    Some((width, card_height))
}

/// Lays the cards out left to right on a white canvas.
///
/// Every card is expected to share the first card's dimensions. Each one is
/// anchored on its slot center `(i*(w+spacing) + w/2, h/2)` and copied
/// verbatim, without blending.
pub fn compose(images: &[DecodedImage], spacing: u32) -> Result<DecodedImage> {
    let first = images.first().ok_or(SpreadError::EmptyInput)?;
    let (card_width, card_height) = first.dimensions();
    let (width, height) = canvas_size(images.len(), card_width, card_height, spacing).ok_or(
        SpreadError::CanvasTooLarge {
            cards: images.len(),
            card_width,
            card_height,
            spacing,
        },
    )?;

    tracing::debug!(
        "Composing {} cards of {}x{} onto a {}x{} canvas",
        images.len(),
        card_width,
        card_height,
        width,
        height
    );

    let mut canvas = DecodedImage::from_pixel(width, height, BACKGROUND);

    let stride = i64::from(card_width) + i64::from(spacing);
    for (i, img) in images.iter().enumerate() {
        let center_x = i as i64 * stride + i64::from(card_width / 2);
        let center_y = i64::from(card_height / 2);
        let left = center_x - i64::from(img.width() / 2);
        let top = center_y - i64::from(img.height() / 2);
        imageops::replace(&mut canvas, img, left, top);
    }

    Ok(canvas)
}

/// Encodes a canvas as PNG.
pub fn encode_png(canvas: &DecodedImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    canvas
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(SpreadError::EncodeError)?;
    Ok(buf.into_inner())
}
