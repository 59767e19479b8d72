//! Photo cropping for the badge photo area.
//!
//! The crop viewport is a fixed rectangle whose aspect ratio matches the
//! physical photo area printed on the card. The user pans and zooms the
//! photo behind that frame; committing rasterizes exactly the visible
//! region at the canonical output resolution.

mod geometry;
mod session;

pub use geometry::{crop_source_rect, fit_scale, visible_source_rect, CropFrame, SourceRect};
pub use session::{CropError, CropSession, FIT_OVERSCAN, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
