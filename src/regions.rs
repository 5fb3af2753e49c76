//! Fixed screenshot geometry.
//!
//! The reMarkable UI draws its chrome at known pixel positions, so the
//! regions to probe and erase are hardcoded rectangles. The coordinates
//! encode the tablet's screenshot layout and are external domain
//! knowledge, not derivable from the image.

use image::RgbImage;

/// A half-open pixel rectangle: `left..right` columns, `top..bottom` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// First column inside the rectangle.
    pub left: u32,
    /// First row inside the rectangle.
    pub top: u32,
    /// One past the last column.
    pub right: u32,
    /// One past the last row.
    pub bottom: u32,
}

impl Rect {
    /// Construct a rectangle from column and row bounds.
    #[must_use]
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels (zero if degenerate).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels (zero if degenerate).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Whether the rectangle contains no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Intersect with an image's bounds.
    #[must_use]
    pub fn clipped_to(&self, img: &RgbImage) -> Self {
        Self {
            left: self.left.min(img.width()),
            top: self.top.min(img.height()),
            right: self.right.min(img.width()),
            bottom: self.bottom.min(img.height()),
        }
    }

    /// Whether the pixel at `(x, y)` lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.left..self.right).contains(&x) && (self.top..self.bottom).contains(&y)
    }
}

/// 6x6 sample block probed for menu-presence detection.
///
/// When the menu overlay is open this block sits on the solid black menu
/// background; every channel of every pixel reads 0.
pub const MENU_PROBE: Rect = Rect::new(52, 52, 58, 58);

/// The full-height menu panel along the left edge.
///
/// `bottom` is unbounded; the rectangle is clipped to the image before use.
pub const MENU_PANEL: Rect = Rect::new(0, 0, 120, u32::MAX);

/// Close control in the top right corner, shown while the menu is open.
pub const MENU_CLOSE: Rect = Rect::new(1324, 40, 1364, 81);

/// 41x41 menu indicator circle, shown while the menu is closed.
pub const MENU_INDICATOR: Rect = Rect::new(40, 40, 81, 81);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_height_of_probe_block() {
        assert_eq!(MENU_PROBE.width(), 6);
        assert_eq!(MENU_PROBE.height(), 6);
        assert!(!MENU_PROBE.is_empty());
    }

    #[test]
    fn indicator_is_41_square() {
        assert_eq!(MENU_INDICATOR.width(), 41);
        assert_eq!(MENU_INDICATOR.height(), 41);
    }

    #[test]
    fn degenerate_rect_is_empty() {
        assert!(Rect::new(10, 10, 10, 20).is_empty());
        assert!(Rect::new(10, 10, 20, 10).is_empty());
        // Inverted bounds saturate to zero width rather than wrap.
        assert!(Rect::new(20, 0, 10, 10).is_empty());
    }

    #[test]
    fn clipping_shrinks_to_image_bounds() {
        let img = RgbImage::new(100, 50);
        let clipped = MENU_PANEL.clipped_to(&img);
        assert_eq!(clipped, Rect::new(0, 0, 100, 50));

        // Fully outside the image clips to empty.
        let clipped = MENU_CLOSE.clipped_to(&img);
        assert!(clipped.is_empty());
    }

    #[test]
    fn contains_respects_half_open_bounds() {
        let r = Rect::new(2, 3, 5, 7);
        assert!(r.contains(2, 3));
        assert!(r.contains(4, 6));
        assert!(!r.contains(5, 6));
        assert!(!r.contains(4, 7));
        assert!(!r.contains(1, 3));
    }
}
