//! Clean up reMarkable screenshots for note embedding.
//!
//! Screenshots pulled from a reMarkable tablet carry UI chrome at fixed
//! pixel positions: either the open menu overlay (a black panel down the
//! left edge plus a close control top right) or a small menu indicator
//! circle. This crate erases that chrome, crops the page to the bounding
//! box of its handwritten content and copies the inverted red channel
//! into an alpha channel, so the white page background turns transparent
//! and the drawing can be embedded over any background.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! // Cleans screenshot.png in place.
//! let report = resnap_cleanup::process_file(Path::new("screenshot.png"), None).unwrap();
//! println!("cropped to {}x{}", report.width, report.height);
//! ```
//!
//! The in-memory pipeline is also available directly:
//!
//! ```no_run
//! use resnap_cleanup::clean_screenshot;
//!
//! let page = image::open("screenshot.png").unwrap().to_rgb8();
//! let cleaned = clean_screenshot(page).unwrap();
//! cleaned.image.save("transparent.png").unwrap();
//! ```

#![deny(missing_docs)]

pub mod alpha;
pub mod chrome;
pub mod crop;
mod engine;
pub mod error;
pub mod regions;

pub use chrome::{menu_is_open, MenuState};
pub use engine::{clean_screenshot, process_file, save_image, Cleaned, ProcessReport};
pub use error::{Error, Result};
pub use regions::Rect;
