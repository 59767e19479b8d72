//! Badgekit Core - employee ID-card photo and batch logic
//!
//! This crate provides the core functionality behind the card-ordering UI:
//! photo decoding, the fixed-ratio crop session, JPEG output encoding, and
//! the batch employee pipeline (import, photo attachment, validation,
//! export).

pub mod batch;
pub mod crop;
pub mod decode;
pub mod encode;

pub use batch::{BatchError, BatchState, CardType, EmployeeRecord, OrderBatch};
pub use crop::{CropError, CropSession};
pub use decode::{decode_photo, DecodedImage, PhotoQuality};

/// Configuration for one crop session.
///
/// The defaults reproduce the production card layout: a 5.9cm x 3.59cm
/// photo area, a 320px-wide on-screen frame, and a 600px-wide JPEG output.
/// Everything is passed explicitly; the core reads no ambient state.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropConfig {
    /// Physical width of the photo area on the card, in cm.
    pub target_width_cm: f64,
    /// Physical height of the photo area on the card, in cm.
    pub target_height_cm: f64,
    /// On-screen crop frame width in logical pixels.
    pub frame_width: f64,
    /// Output raster width in pixels; height follows the physical ratio.
    pub output_width: u32,
    /// JPEG quality of the committed crop (1-100).
    pub jpeg_quality: u8,
    /// Shortest-edge threshold below which a photo is flagged as poor.
    pub quality_threshold: u32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            target_width_cm: 5.9,
            target_height_cm: 3.59,
            frame_width: 320.0,
            output_width: 600,
            jpeg_quality: 95,
            quality_threshold: 500,
        }
    }
}

impl CropConfig {
    /// Aspect ratio of the photo area as height over width.
    pub fn aspect(&self) -> f64 {
        self.target_height_cm / self.target_width_cm
    }

    /// Output raster height derived from the physical ratio.
    pub fn output_height(&self) -> u32 {
        ((self.output_width as f64 * self.aspect()).round() as u32).max(1)
    }
}
