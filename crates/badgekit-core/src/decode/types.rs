//! Core types for photo decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for photo decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Requested output dimensions are unusable (zero width or height).
    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resolution classification of an uploaded photo.
///
/// Badge photos are printed at a fixed physical size, so low-resolution
/// uploads produce visibly soft prints. The UI surfaces `Poor` as a warning
/// but never blocks the crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoQuality {
    /// Shortest edge is below the configured threshold.
    Poor,
    /// Acceptable resolution for printing.
    Good,
}

impl PhotoQuality {
    /// Classify a photo by its shortest edge against a pixel threshold.
    pub fn classify(width: u32, height: u32, threshold: u32) -> Self {
        if width.min(height) < threshold {
            PhotoQuality::Poor
        } else {
            PhotoQuality::Good
        }
    }
}

/// A decoded photo with RGB pixel data.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_quality_threshold_boundary() {
        assert_eq!(PhotoQuality::classify(499, 800, 500), PhotoQuality::Poor);
        assert_eq!(PhotoQuality::classify(500, 800, 500), PhotoQuality::Good);
        assert_eq!(PhotoQuality::classify(800, 499, 500), PhotoQuality::Poor);
        assert_eq!(PhotoQuality::classify(2000, 3000, 500), PhotoQuality::Good);
    }

    #[test]
    fn test_quality_custom_threshold() {
        // The threshold is configurable; 500 is only the default heuristic
        assert_eq!(PhotoQuality::classify(499, 800, 300), PhotoQuality::Good);
        assert_eq!(PhotoQuality::classify(299, 800, 300), PhotoQuality::Poor);
    }

    #[test]
    fn test_decoded_image_creation() {
        let pixels = vec![0u8; 120 * 80 * 3];
        let img = DecodedImage::new(120, 80, pixels);

        assert_eq!(img.width, 120);
        assert_eq!(img.height, 80);
        assert_eq!(img.pixels.len(), 28800);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_rgb_image_conversion_roundtrip() {
        let pixels: Vec<u8> = (0..(4 * 2 * 3)).map(|i| i as u8).collect();
        let img = DecodedImage::new(4, 2, pixels.clone());

        let rgb = img.to_rgb_image().unwrap();
        let back = DecodedImage::from_rgb_image(rgb);

        assert_eq!(back.width, 4);
        assert_eq!(back.height, 2);
        assert_eq!(back.pixels, pixels);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("unexpected EOF".to_string());
        assert_eq!(
            err.to_string(),
            "Corrupted or incomplete image file: unexpected EOF"
        );

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
