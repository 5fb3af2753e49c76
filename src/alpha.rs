//! Alpha derivation from the inverted red channel.
//!
//! reMarkable strokes render as dark ink on a white page, so after the
//! chrome is erased the red channel alone separates ink from page: a
//! white background pixel has `r == 255`, full ink has `r == 0`. Copying
//! the inverted red channel into alpha makes the background transparent
//! while keeping ink opaque. Green or blue would work just as well.

use image::{Rgba, RgbImage, RgbaImage};

/// Build an RGBA image whose alpha is `255 - red`.
///
/// Colour channels are carried over unchanged; a pure-white pixel ends
/// up fully transparent and any pixel with `r == 0` fully opaque.
#[must_use]
pub fn derive_alpha(img: &RgbImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b] = img.get_pixel(x, y).0;
        Rgba([r, g, b, 255 - r])
    })
}
