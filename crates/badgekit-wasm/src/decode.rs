//! WASM bindings for photo decoding and previews.

use badgekit_core::decode::{decode_photo as core_decode, resize_to_fit, FilterType, PhotoQuality};
use wasm_bindgen::prelude::*;

use crate::types::JsDecodedImage;

/// Decode an uploaded photo (JPEG or PNG bytes) into RGB pixels.
///
/// EXIF orientation is applied, so the result is always upright.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const photo = decode_photo(bytes);
/// console.log(`${photo.width}x${photo.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_photo(bytes: &[u8]) -> Result<JsDecodedImage, JsError> {
    let image = core_decode(bytes)?;
    Ok(JsDecodedImage::from_decoded(image))
}

/// Downscale a photo to fit a bounding box, for the thumbnails shown next
/// to each employee in the batch table.
#[wasm_bindgen]
pub fn preview_thumbnail(image: &JsDecodedImage, max_edge: u32) -> Result<JsDecodedImage, JsError> {
    let src = image.to_decoded();
    let thumb = resize_to_fit(&src, max_edge, FilterType::Bilinear)?;
    Ok(JsDecodedImage::from_decoded(thumb))
}

/// Classify a photo's resolution: `"poor"` below the shortest-edge
/// threshold, `"good"` otherwise. The UI shows a warning for poor uploads.
#[wasm_bindgen]
pub fn photo_quality(width: u32, height: u32, threshold: u32) -> String {
    match PhotoQuality::classify(width, height, threshold) {
        PhotoQuality::Poor => "poor".to_string(),
        PhotoQuality::Good => "good".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_photo_binding() {
        let photo = decode_photo(&png_bytes(30, 20)).unwrap();
        assert_eq!(photo.width(), 30);
        assert_eq!(photo.height(), 20);
    }

    #[test]
    fn test_decode_photo_rejects_garbage() {
        assert!(decode_photo(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_preview_thumbnail() {
        let photo = decode_photo(&png_bytes(200, 100)).unwrap();
        let thumb = preview_thumbnail(&photo, 50).unwrap();
        assert_eq!(thumb.width(), 50);
        assert_eq!(thumb.height(), 25);
    }

    #[test]
    fn test_photo_quality_strings() {
        assert_eq!(photo_quality(400, 800, 500), "poor");
        assert_eq!(photo_quality(800, 600, 500), "good");
    }
}
