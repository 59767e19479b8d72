//! Coordinate math for the crop viewport.
//!
//! # Coordinate Systems
//!
//! Two spaces are involved:
//!
//! - **Viewport space**: logical pixels with the origin at the center of the
//!   crop frame. The frame spans `±width/2` by `±height/2` and never moves
//!   or resizes during a session.
//! - **Source space**: pixels of the decoded photo, origin at its top-left.
//!
//! The photo is placed with its center at `frame center + offset` and scaled
//! uniformly by the effective scale. Committing a crop inverse-transforms
//! the frame rectangle through that placement to find which source pixels
//! are currently visible.

use crate::decode::DecodedImage;

/// The fixed-size crop viewport rectangle.
///
/// Its aspect ratio matches the physical photo area printed on the badge
/// (5.9cm x 3.59cm by default), so whatever lands inside the frame is
/// exactly what ends up on the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropFrame {
    /// Frame width in logical pixels.
    pub width: f64,
    /// Frame height in logical pixels.
    pub height: f64,
}

impl CropFrame {
    /// Build a frame of the given logical width whose height follows the
    /// physical aspect ratio (`height / width`).
    pub fn for_ratio(width: f64, ratio_h_over_w: f64) -> Self {
        Self {
            width,
            height: width * ratio_h_over_w,
        }
    }
}

/// A rectangle in source-image pixel space (fractional coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Auto-fit scale for a freshly loaded photo.
///
/// `max` (rather than `min`) of the two per-axis ratios guarantees the photo
/// covers the whole frame; the overscan factor adds a small margin so
/// rounding can never expose an unfilled frame edge.
pub fn fit_scale(frame: &CropFrame, img_width: u32, img_height: u32, overscan: f64) -> f64 {
    let sx = frame.width / img_width as f64;
    let sy = frame.height / img_height as f64;
    sx.max(sy) * overscan
}

/// Compute the source-space rectangle currently visible inside the frame.
///
/// `offset` is the translation of the photo center away from the frame
/// center, in viewport logical pixels; `scale` is the effective
/// source-to-viewport scale. The returned origin is clamped to non-negative
/// coordinates; the pixel crop clamps the far edges against the image
/// bounds.
pub fn visible_source_rect(
    frame: &CropFrame,
    img_width: u32,
    img_height: u32,
    offset: (f64, f64),
    scale: f64,
) -> SourceRect {
    debug_assert!(scale > 0.0, "scale must be positive");

    // Frame left/top corner in viewport space, relative to the photo center,
    // then mapped back into source pixels.
    let x = (-frame.width / 2.0 - offset.0) / scale + img_width as f64 / 2.0;
    let y = (-frame.height / 2.0 - offset.1) / scale + img_height as f64 / 2.0;

    SourceRect {
        x: x.max(0.0),
        y: y.max(0.0),
        width: frame.width / scale,
        height: frame.height / scale,
    }
}

/// Copy the pixels of a source-space rectangle into a new image.
///
/// Coordinates are rounded to whole pixels and clamped to the image bounds;
/// the result is never smaller than 1x1.
pub fn crop_source_rect(image: &DecodedImage, rect: SourceRect) -> DecodedImage {
    let src_w = image.width;
    let src_h = image.height;

    let px_left = (rect.x.round().max(0.0) as u32).min(src_w.saturating_sub(1));
    let px_top = (rect.y.round().max(0.0) as u32).min(src_h.saturating_sub(1));
    let px_right = (px_left as f64 + rect.width.round()).min(src_w as f64) as u32;
    let px_bottom = (px_top as f64 + rect.height.round()).min(src_h as f64) as u32;

    let out_width = px_right.saturating_sub(px_left).max(1);
    let out_height = px_bottom.saturating_sub(px_top).max(1);

    let mut output = vec![0u8; (out_width * out_height * 3) as usize];

    // Copy pixel data row by row
    for y in 0..out_height {
        let src_y = px_top + y;
        let src_row_start = ((src_y * src_w + px_left) * 3) as usize;
        let dst_row_start = (y * out_width * 3) as usize;
        let row_len = (out_width * 3) as usize;

        output[dst_row_start..dst_row_start + row_len]
            .copy_from_slice(&image.pixels[src_row_start..src_row_start + row_len]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
