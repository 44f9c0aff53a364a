use crate::domain::model::{CardRequest, DecodedImage};
use image::imageops;

/// Rotates a card 180° about its center.
///
/// The output pixel at `(x, y)` is the input pixel at `(w-1-x, h-1-y)`; the
/// pixel grid maps onto itself so nothing is resampled.
pub fn reverse(img: &DecodedImage) -> DecodedImage {
    imageops::rotate180(img)
}

/// Applies the orientation a request asks for.
pub fn orient(img: DecodedImage, request: &CardRequest) -> DecodedImage {
    if request.reversed {
        tracing::debug!("Reversing card '{}'", request.name);
        reverse(&img)
    } else {
        img
    }
}
