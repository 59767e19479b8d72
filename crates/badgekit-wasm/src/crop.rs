//! WASM bindings for the crop session.
//!
//! The UI keeps one `Cropper` handle for the crop dialog. Opening the
//! dialog calls `begin_session` with the decoded photo; pointer and slider
//! events call `pan`/`set_zoom`; the confirm button calls `commit_crop`.
//! Every transform accessor is guarded: with no active session the
//! mutations are no-ops and `commit_crop` returns `undefined`, which covers
//! the "commit before the image finished loading" race in the dialog.

use badgekit_core::crop::{CropSession, ZOOM_MAX, ZOOM_MIN};
use badgekit_core::decode::PhotoQuality;
use badgekit_core::CropConfig;
use wasm_bindgen::prelude::*;

use crate::types::JsDecodedImage;

/// Stateful crop handle for the photo dialog.
#[wasm_bindgen]
pub struct Cropper {
    config: CropConfig,
    session: Option<CropSession>,
}

impl Default for Cropper {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Cropper {
    /// Create a cropper with the default card layout (5.9cm x 3.59cm photo
    /// area, 600px output).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Cropper {
        Cropper {
            config: CropConfig::default(),
            session: None,
        }
    }

    /// Create a cropper from a config object (same shape as `CropConfig`).
    pub fn with_config(config: JsValue) -> Result<Cropper, JsError> {
        let config: CropConfig = serde_wasm_bindgen::from_value(config)?;
        Ok(Cropper {
            config,
            session: None,
        })
    }

    /// Start a crop session over a decoded photo, replacing any previous
    /// session. The photo starts centered at the auto-fit scale.
    pub fn begin_session(&mut self, image: &JsDecodedImage) -> Result<(), JsError> {
        let session = CropSession::begin(image.to_decoded(), self.config.clone())?;
        self.session = Some(session);
        Ok(())
    }

    /// Discard the active session without producing output.
    pub fn cancel_session(&mut self) {
        self.session = None;
    }

    /// Whether a session is active.
    #[wasm_bindgen(getter)]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Translate the photo by a pointer delta (viewport logical pixels).
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if let Some(session) = &mut self.session {
            session.pan(dx, dy);
        }
    }

    /// Set the zoom slider value, clamped to `[0.5, 3.0]`.
    pub fn set_zoom(&mut self, zoom: f64) {
        if let Some(session) = &mut self.session {
            session.set_zoom(zoom);
        }
    }

    /// Nudge zoom up one button step.
    pub fn zoom_in(&mut self) {
        if let Some(session) = &mut self.session {
            session.zoom_in();
        }
    }

    /// Nudge zoom down one button step.
    pub fn zoom_out(&mut self) {
        if let Some(session) = &mut self.session {
            session.zoom_out();
        }
    }

    /// Current zoom factor (1.0 when no session is active).
    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.session.as_ref().map_or(1.0, CropSession::zoom)
    }

    /// Minimum slider value.
    #[wasm_bindgen(getter)]
    pub fn zoom_min(&self) -> f64 {
        ZOOM_MIN
    }

    /// Maximum slider value.
    #[wasm_bindgen(getter)]
    pub fn zoom_max(&self) -> f64 {
        ZOOM_MAX
    }

    /// Crop frame width in logical pixels.
    #[wasm_bindgen(getter)]
    pub fn frame_width(&self) -> f64 {
        self.config.frame_width
    }

    /// Crop frame height in logical pixels (follows the physical ratio).
    #[wasm_bindgen(getter)]
    pub fn frame_height(&self) -> f64 {
        self.config.frame_width * self.config.aspect()
    }

    /// `"poor"` / `"good"` for the active session's photo, `undefined`
    /// otherwise.
    #[wasm_bindgen(getter)]
    pub fn photo_quality(&self) -> Option<String> {
        self.session.as_ref().map(|s| match s.quality() {
            PhotoQuality::Poor => "poor".to_string(),
            PhotoQuality::Good => "good".to_string(),
        })
    }

    /// Rasterize the visible frame content and return a JPEG data URL.
    ///
    /// Returns `undefined` when no session is active (load guard); the
    /// session itself stays untouched, so the dialog can keep adjusting and
    /// commit again.
    pub fn commit_crop(&self) -> Result<Option<String>, JsError> {
        match &self.session {
            Some(session) => Ok(Some(session.commit_crop()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(width: u32, height: u32) -> JsDecodedImage {
        JsDecodedImage::new(width, height, vec![120u8; (width * height * 3) as usize])
    }

    #[test]
    fn test_commit_without_session_is_noop() {
        let cropper = Cropper::new();
        assert!(!cropper.has_session());
        assert_eq!(cropper.commit_crop().unwrap(), None);
    }

    #[test]
    fn test_begin_and_commit() {
        let mut cropper = Cropper::new();
        cropper.begin_session(&photo(800, 600)).unwrap();

        assert!(cropper.has_session());
        let url = cropper.commit_crop().unwrap().unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_begin_resets_previous_transform() {
        let mut cropper = Cropper::new();
        cropper.begin_session(&photo(800, 600)).unwrap();
        cropper.pan(50.0, 50.0);
        cropper.set_zoom(2.0);

        // Reopening the dialog with a new photo starts from scratch
        cropper.begin_session(&photo(800, 600)).unwrap();
        assert_eq!(cropper.zoom(), 1.0);
    }

    #[test]
    fn test_cancel_discards_session() {
        let mut cropper = Cropper::new();
        cropper.begin_session(&photo(800, 600)).unwrap();
        cropper.cancel_session();

        assert!(!cropper.has_session());
        assert_eq!(cropper.commit_crop().unwrap(), None);
    }

    #[test]
    fn test_transform_guards_without_session() {
        let mut cropper = Cropper::new();
        // None of these should panic with no active session
        cropper.pan(10.0, 10.0);
        cropper.set_zoom(2.0);
        cropper.zoom_in();
        cropper.zoom_out();
        assert_eq!(cropper.zoom(), 1.0);
        assert_eq!(cropper.photo_quality(), None);
    }

    #[test]
    fn test_quality_surfaced() {
        let mut cropper = Cropper::new();
        cropper.begin_session(&photo(400, 300)).unwrap();
        assert_eq!(cropper.photo_quality().as_deref(), Some("poor"));

        cropper.begin_session(&photo(1200, 900)).unwrap();
        assert_eq!(cropper.photo_quality().as_deref(), Some("good"));
    }

    #[test]
    fn test_frame_follows_ratio() {
        let cropper = Cropper::new();
        assert_eq!(cropper.frame_width(), 320.0);
        assert!((cropper.frame_height() - 320.0 * 3.59 / 5.9).abs() < 1e-9);
    }
}
