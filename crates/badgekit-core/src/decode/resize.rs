//! Image resizing for crop output and roster previews.
//!
//! The crop pipeline uses [`resize`] to bring the cropped region to the
//! canonical badge resolution; [`resize_to_fit`] produces the small previews
//! shown next to each employee in the batch table.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` for a zero target dimension and
/// `DecodeError::CorruptedFile` if the pixel buffer is inconsistent.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Scale an image down so its longest edge fits `max_edge`, preserving
/// aspect ratio. Images already within bounds are returned unchanged.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: max_edge,
            height: max_edge,
        });
    }

    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = fit_dimensions(image.width, image.height, max_edge);
    resize(image, new_width, new_height, filter)
}

/// Compute dimensions fitting within `max_edge` while preserving the aspect
/// ratio. Both dimensions stay at least 1.
fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    if width >= height {
        let scaled = (height as f64 * max_edge as f64 / width as f64).round() as u32;
        (max_edge, scaled.max(1))
    } else {
        let scaled = (width as f64 * max_edge as f64 / height as f64).round() as u32;
        (scaled.max(1), max_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(width, height, vec![128u8; (width * height * 3) as usize])
    }

    #[test]
    fn test_resize_exact() {
        let img = gray_image(100, 80);
        let out = resize(&img, 60, 36, FilterType::Bilinear).unwrap();
        assert_eq!(out.width, 60);
        assert_eq!(out.height, 36);
        assert_eq!(out.pixels.len(), 60 * 36 * 3);
    }

    #[test]
    fn test_resize_same_size_is_clone() {
        let img = gray_image(50, 50);
        let out = resize(&img, 50, 50, FilterType::Nearest).unwrap();
        assert_eq!(out.pixels, img.pixels);
    }

    #[test]
    fn test_resize_zero_dimension_rejected() {
        let img = gray_image(10, 10);
        assert!(matches!(
            resize(&img, 0, 10, FilterType::Bilinear),
            Err(DecodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            resize(&img, 10, 0, FilterType::Bilinear),
            Err(DecodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_resize_upscale() {
        let img = gray_image(10, 10);
        let out = resize(&img, 40, 40, FilterType::Lanczos3).unwrap();
        assert_eq!(out.width, 40);
        assert_eq!(out.height, 40);
    }

    #[test]
    fn test_resize_to_fit_landscape() {
        let img = gray_image(400, 200);
        let out = resize_to_fit(&img, 100, FilterType::Bilinear).unwrap();
        assert_eq!(out.width, 100);
        assert_eq!(out.height, 50);
    }

    #[test]
    fn test_resize_to_fit_portrait() {
        let img = gray_image(200, 400);
        let out = resize_to_fit(&img, 100, FilterType::Bilinear).unwrap();
        assert_eq!(out.width, 50);
        assert_eq!(out.height, 100);
    }

    #[test]
    fn test_resize_to_fit_already_small() {
        let img = gray_image(64, 48);
        let out = resize_to_fit(&img, 100, FilterType::Bilinear).unwrap();
        assert_eq!(out.width, 64);
        assert_eq!(out.height, 48);
    }

    #[test]
    fn test_fit_dimensions_extreme_ratio() {
        // A 1000x10 strip scaled to fit 100 must not round height to zero
        let (w, h) = fit_dimensions(1000, 10, 100);
        assert_eq!(w, 100);
        assert_eq!(h, 1);
    }
}
