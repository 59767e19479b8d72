//! Photo decoding with EXIF orientation handling.
//!
//! Uploaded badge photos are almost always JPEGs straight off a phone
//! camera, which stores rotation as EXIF metadata instead of rotating the
//! pixels. The browser applied that correction implicitly when rendering;
//! here it has to happen explicitly before any crop math runs, or the crop
//! frame would operate on sideways pixels.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// EXIF orientation values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90Cw,
    Transverse,
    Rotate270Cw,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90Cw,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270Cw,
            _ => Orientation::Normal,
        }
    }
}

/// Decode an uploaded photo (JPEG or PNG) into RGB pixels.
///
/// EXIF orientation is read from the file and baked into the pixel data, so
/// the returned image is always upright.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes cannot be parsed as a
/// supported image format.
pub fn decode_photo(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = extract_orientation(bytes);

    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let upright = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgb_image(upright.into_rgb8()))
}

/// Extract EXIF orientation, defaulting to `Normal` when the file carries no
/// EXIF segment (PNGs, stripped JPEGs) or the tag is unreadable.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90Cw => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270Cw => img.rotate270(),
    }
}
