//! Photo decoding pipeline for Badgekit.
//!
//! This module provides functionality for:
//! - Decoding uploaded JPEG/PNG photos with EXIF orientation correction
//! - Classifying photo resolution against the print-quality threshold
//! - Resizing for crop output and roster previews
//!
//! All operations are synchronous; the decoding path is designed to run on
//! the browser main thread (or a worker) via WASM bindings.

mod photo;
mod resize;
mod types;

pub use photo::decode_photo;
pub use resize::{resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType, PhotoQuality};
