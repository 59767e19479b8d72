//! Crop session state: pan, zoom, and commit.
//!
//! A [`CropSession`] is created per photo and dropped when the user closes
//! the crop dialog. All transform state lives inside the session value, so
//! starting a new session can never observe leftovers from a previous one.

use thiserror::Error;

use crate::decode::{resize, DecodeError, DecodedImage, FilterType, PhotoQuality};
use crate::encode::{encode_jpeg, jpeg_data_url, EncodeError};
use crate::CropConfig;

use super::geometry::{crop_source_rect, fit_scale, visible_source_rect, CropFrame, SourceRect};

/// Lower bound of the user zoom factor.
pub const ZOOM_MIN: f64 = 0.5;
/// Upper bound of the user zoom factor.
pub const ZOOM_MAX: f64 = 3.0;
/// Increment applied by the discrete zoom buttons.
pub const ZOOM_STEP: f64 = 0.1;
/// Overscan applied to the auto-fit scale so the frame is always covered.
pub const FIT_OVERSCAN: f64 = 1.05;

/// Errors that can occur while committing a crop.
#[derive(Debug, Error)]
pub enum CropError {
    /// The photo has no pixels to crop.
    #[error("Cannot start a crop session on an empty image")]
    EmptyImage,

    /// Rescaling the cropped region to the output resolution failed.
    #[error(transparent)]
    Resize(#[from] DecodeError),

    /// Encoding the output JPEG failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// One interactive crop session over a single decoded photo.
///
/// The user zoom is a factor on top of the auto-fit scale: `1.0` shows the
/// photo exactly as fitted, values up to [`ZOOM_MAX`] magnify, values down
/// to [`ZOOM_MIN`] shrink. The effective source-to-viewport scale is
/// `fit_scale * zoom`.
#[derive(Debug, Clone)]
pub struct CropSession {
    image: DecodedImage,
    config: CropConfig,
    frame: CropFrame,
    fit_scale: f64,
    zoom: f64,
    offset: (f64, f64),
    quality: PhotoQuality,
}

impl CropSession {
    /// Begin a session: measure the photo, classify its resolution, and
    /// compute the centered auto-fit placement.
    pub fn begin(image: DecodedImage, config: CropConfig) -> Result<Self, CropError> {
        if image.is_empty() {
            return Err(CropError::EmptyImage);
        }

        let frame = CropFrame::for_ratio(config.frame_width, config.aspect());
        let fit = fit_scale(&frame, image.width, image.height, FIT_OVERSCAN);
        let quality = PhotoQuality::classify(image.width, image.height, config.quality_threshold);

        Ok(Self {
            image,
            config,
            frame,
            fit_scale: fit,
            zoom: 1.0,
            offset: (0.0, 0.0),
            quality,
        })
    }

    /// Translate the photo by a pointer delta in viewport logical pixels.
    ///
    /// Gesture bookkeeping (drag-in-progress, ignoring multi-touch) belongs
    /// to the UI layer; the session applies whatever delta it is handed.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    /// Set the user zoom factor, clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Nudge the zoom up by one button step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Nudge the zoom down by one button step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Current user zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset in viewport logical pixels.
    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    /// Effective source-to-viewport scale (`fit_scale * zoom`).
    pub fn effective_scale(&self) -> f64 {
        self.fit_scale * self.zoom
    }

    /// Resolution classification computed when the session began.
    pub fn quality(&self) -> PhotoQuality {
        self.quality
    }

    /// The fixed crop frame for this session.
    pub fn frame(&self) -> CropFrame {
        self.frame
    }

    /// Dimensions of the source photo.
    pub fn image_dimensions(&self) -> (u32, u32) {
        (self.image.width, self.image.height)
    }

    /// Source-space rectangle currently visible inside the frame.
    pub fn visible_rect(&self) -> SourceRect {
        visible_source_rect(
            &self.frame,
            self.image.width,
            self.image.height,
            self.offset,
            self.effective_scale(),
        )
    }

    /// Rasterize the frame's visible content to the canonical output
    /// resolution and return it as a JPEG data URL.
    ///
    /// Takes `&self`: committing mutates nothing, so repeated commits
    /// without intervening pan/zoom produce bit-identical output.
    pub fn commit_crop(&self) -> Result<String, CropError> {
        let visible = self.visible_rect();
        let cropped = crop_source_rect(&self.image, visible);

        let out_w = self.config.output_width;
        let out_h = self.config.output_height();
        let resized = resize(&cropped, out_w, out_h, FilterType::Lanczos3)?;

        let jpeg = encode_jpeg(&resized.pixels, out_w, out_h, self.config.jpeg_quality)?;
        Ok(jpeg_data_url(&jpeg))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn small_photo(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(width, height, vec![99u8; (width * height * 3) as usize])
    }

    proptest! {
        /// Property: the zoom factor is always within bounds no matter what
        /// the slider requests.
        #[test]
        fn prop_zoom_always_clamped(requested in -100.0f64..=100.0) {
            let mut s =
                CropSession::begin(small_photo(100, 100), CropConfig::default()).unwrap();
            s.set_zoom(requested);
            prop_assert!(s.zoom() >= ZOOM_MIN && s.zoom() <= ZOOM_MAX);
        }

        /// Property: any sequence of zoom button presses stays in bounds.
        #[test]
        fn prop_zoom_steps_stay_in_bounds(steps in prop::collection::vec(any::<bool>(), 0..80)) {
            let mut s =
                CropSession::begin(small_photo(100, 100), CropConfig::default()).unwrap();
            for step_in in steps {
                if step_in {
                    s.zoom_in();
                } else {
                    s.zoom_out();
                }
                prop_assert!(s.zoom() >= ZOOM_MIN && s.zoom() <= ZOOM_MAX);
            }
        }

        /// Property: a fresh session always covers the frame, whatever the
        /// photo dimensions.
        #[test]
        fn prop_fresh_session_covers_frame(
            w in 50u32..=600,
            h in 50u32..=600,
        ) {
            let s = CropSession::begin(small_photo(w, h), CropConfig::default()).unwrap();
            let rect = s.visible_rect();

            prop_assert!(rect.x >= 0.0);
            prop_assert!(rect.y >= 0.0);
            prop_assert!(rect.x + rect.width <= w as f64 + 1e-6);
            prop_assert!(rect.y + rect.height <= h as f64 + 1e-6);
        }
    }
}
