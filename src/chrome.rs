//! Menu detection and chrome removal.
//!
//! The reMarkable screenshot either shows the open menu overlay (solid
//! black panel down the left edge plus a close control top right) or a
//! small round menu indicator in the top left corner. Detection samples
//! a fixed 6x6 block: the menu counts as open only when every channel of
//! every probed pixel is exactly 0. No tolerance is applied.

use image::{Rgb, RgbImage};

use crate::regions::{Rect, MENU_CLOSE, MENU_INDICATOR, MENU_PANEL, MENU_PROBE};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Whether the menu overlay was open in the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Menu overlay open: the left panel and close control are visible.
    Open,
    /// Menu closed: only the indicator circle is visible.
    Closed,
}

/// Detect whether the menu overlay is open.
///
/// Samples the fixed [`MENU_PROBE`] block; the menu is open iff every
/// channel of every pixel in the block equals 0. Images too small to
/// contain the whole block report the menu as closed: a screenshot that
/// cannot fit the probe cannot show the panel either.
#[must_use]
pub fn menu_is_open(img: &RgbImage) -> bool {
    let probe = MENU_PROBE.clipped_to(img);
    if probe != MENU_PROBE {
        return false;
    }

    for y in probe.top..probe.bottom {
        for x in probe.left..probe.right {
            if img.get_pixel(x, y).0 != [0, 0, 0] {
                return false;
            }
        }
    }
    true
}

/// Fill a rectangle with white, clipped to the image bounds.
fn whiten(img: &mut RgbImage, rect: Rect) {
    let rect = rect.clipped_to(img);
    for y in rect.top..rect.bottom {
        for x in rect.left..rect.right {
            img.put_pixel(x, y, WHITE);
        }
    }
}

/// Erase the UI chrome from a screenshot in-place.
///
/// If the menu is open, whites out the whole left panel and the close
/// control in the top right corner. Otherwise whites out only the menu
/// indicator circle. Returns which branch was taken.
pub fn strip_chrome(img: &mut RgbImage) -> MenuState {
    if menu_is_open(img) {
        whiten(img, MENU_PANEL);
        whiten(img, MENU_CLOSE);
        MenuState::Open
    } else {
        whiten(img, MENU_INDICATOR);
        MenuState::Closed
    }
}
