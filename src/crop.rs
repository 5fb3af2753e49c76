//! Content bounding box and crop.
//!
//! After the chrome is erased, everything that matters on the page is
//! darker than the white background. The bounding box of non-white
//! content equals the bounding box of non-zero pixels in the inverted
//! image (each channel replaced by `255 - value`).

use image::imageops;
use image::RgbImage;

use crate::regions::Rect;

/// Compute the bounding box of all pixels that are not pure white.
///
/// Returns `None` when the image is entirely white (or empty); a crop
/// would then be undefined and the caller must treat it as an error.
#[must_use]
pub fn content_bounding_box(img: &RgbImage) -> Option<Rect> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;

    for (x, y, px) in img.enumerate_pixels() {
        if px.0 == [255, 255, 255] {
            continue;
        }
        left = left.min(x);
        top = top.min(y);
        right = right.max(x + 1);
        bottom = bottom.max(y + 1);
    }

    if left == u32::MAX {
        None
    } else {
        Some(Rect::new(left, top, right, bottom))
    }
}

/// Copy the given rectangle out of the image.
///
/// The rectangle is clipped to the image bounds first, so a stale or
/// oversized box cannot read past the buffer.
#[must_use]
pub fn crop_to(img: &RgbImage, rect: Rect) -> RgbImage {
    let rect = rect.clipped_to(img);
    imageops::crop_imm(img, rect.left, rect.top, rect.width(), rect.height()).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn white_image(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([255, 255, 255]))
    }

    #[test]
    fn single_dark_pixel_yields_unit_box() {
        let mut img = white_image(50, 50);
        img.put_pixel(10, 20, Rgb([0, 0, 0]));
        assert_eq!(content_bounding_box(&img), Some(Rect::new(10, 20, 11, 21)));
    }

    #[test]
    fn near_white_pixel_counts_as_content() {
        let mut img = white_image(50, 50);
        img.put_pixel(3, 4, Rgb([255, 254, 255]));
        assert_eq!(content_bounding_box(&img), Some(Rect::new(3, 4, 4, 5)));
    }

    #[test]
    fn box_spans_scattered_content() {
        let mut img = white_image(100, 80);
        img.put_pixel(12, 70, Rgb([0, 0, 0]));
        img.put_pixel(90, 5, Rgb([128, 128, 128]));
        assert_eq!(content_bounding_box(&img), Some(Rect::new(12, 5, 91, 71)));
    }

    #[test]
    fn all_white_image_has_no_box() {
        assert_eq!(content_bounding_box(&white_image(30, 30)), None);
    }

    #[test]
    fn crop_extracts_the_box() {
        let mut img = white_image(100, 80);
        for y in 20..40 {
            for x in 30..60 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let bbox = content_bounding_box(&img).unwrap();
        assert_eq!(bbox, Rect::new(30, 20, 60, 40));

        let cropped = crop_to(&img, bbox);
        assert_eq!(cropped.dimensions(), (30, 20));
        assert_eq!(*cropped.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*cropped.get_pixel(29, 19), Rgb([0, 0, 0]));
    }

    #[test]
    fn crop_is_idempotent_on_its_own_output() {
        let mut img = white_image(100, 80);
        for y in 20..40 {
            for x in 30..60 {
                img.put_pixel(x, y, Rgb([40, 40, 40]));
            }
        }
        let bbox = content_bounding_box(&img).unwrap();
        let cropped = crop_to(&img, bbox);

        // No white border remains, so the box is the whole image.
        let again = content_bounding_box(&cropped).unwrap();
        assert_eq!(again, Rect::new(0, 0, 30, 20));
        assert_eq!(crop_to(&cropped, again), cropped);
    }

    #[test]
    fn crop_clips_oversized_rect() {
        let img = white_image(10, 10);
        let cropped = crop_to(&img, Rect::new(5, 5, 100, 100));
        assert_eq!(cropped.dimensions(), (5, 5));
    }
}
