//! Core screenshot cleanup pipeline.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};

use crate::alpha;
use crate::chrome::{self, MenuState};
use crate::crop;
use crate::error::{Error, Result};
use crate::regions::Rect;

/// Result of cleaning an in-memory screenshot.
#[derive(Debug)]
pub struct Cleaned {
    /// The cropped RGBA image with the page background transparent.
    pub image: RgbaImage,
    /// Whether the menu overlay was detected as open.
    pub menu: MenuState,
    /// Bounding box of the content within the masked screenshot, in the
    /// coordinates of the original image.
    pub content_box: Rect,
}

/// Summary of processing a single screenshot file.
#[derive(Debug)]
pub struct ProcessReport {
    /// Path the cleaned image was written to.
    pub path: PathBuf,
    /// Whether the menu overlay was detected as open.
    pub menu: MenuState,
    /// Bounding box the image was cropped to.
    pub content_box: Rect,
    /// Width of the written image in pixels.
    pub width: u32,
    /// Height of the written image in pixels.
    pub height: u32,
}

/// Run the full cleanup pipeline on an in-memory screenshot.
///
/// Erases the UI chrome, crops to the bounding box of non-white content
/// and converts the inverted red channel into an alpha channel.
///
/// # Errors
///
/// Returns [`Error::BlankImage`] if nothing but white remains after the
/// chrome is erased; the crop would be undefined.
pub fn clean_screenshot(mut page: RgbImage) -> Result<Cleaned> {
    let menu = chrome::strip_chrome(&mut page);
    let content_box = crop::content_bounding_box(&page).ok_or(Error::BlankImage)?;
    let cropped = crop::crop_to(&page, content_box);
    let image = alpha::derive_alpha(&cropped);

    Ok(Cleaned {
        image,
        menu,
        content_box,
    })
}

/// Process a single screenshot file: load, clean, save.
///
/// The image is written back to `input` unless an explicit `output` path
/// is given. Any existing alpha channel in the input is discarded before
/// processing; the output always carries a fresh alpha channel.
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, if no
/// content remains after chrome removal, or if the output path's format
/// cannot store transparency.
pub fn process_file(input: &Path, output: Option<&Path>) -> Result<ProcessReport> {
    let page = image::open(input)?.to_rgb8();
    let cleaned = clean_screenshot(page)?;

    let dest = output.unwrap_or(input);
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    save_image(&cleaned.image, dest)?;

    Ok(ProcessReport {
        path: dest.to_path_buf(),
        menu: cleaned.menu,
        content_box: cleaned.content_box,
        width: cleaned.image.width(),
        height: cleaned.image.height(),
    })
}

/// Save an RGBA image, refusing formats that cannot store alpha.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for destinations such as JPEG
/// where the derived transparency would be silently flattened, or when
/// the extension is not recognized; I/O and encoding failures are
/// propagated.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    match format {
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Tiff | ImageFormat::Bmp => {
            let dyn_img = DynamicImage::ImageRgba8(img.clone());
            dyn_img.save_with_format(path, format)?;
            Ok(())
        }
        _ => Err(Error::UnsupportedFormat(format!("{format:?}"))),
    }
}
