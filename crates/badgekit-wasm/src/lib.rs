//! Badgekit WASM - WebAssembly bindings for Badgekit
//!
//! This crate exposes the badgekit-core functionality to the card-ordering
//! web UI.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for photo data
//! - `decode` - Photo decoding, previews, and quality classification
//! - `crop` - The stateful crop-dialog handle
//! - `batch` - The batch employee pipeline handle
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_photo, Cropper, Batch } from '@badgekit/wasm';
//!
//! await init();
//!
//! const photo = decode_photo(new Uint8Array(await file.arrayBuffer()));
//! const cropper = new Cropper();
//! cropper.begin_session(photo);
//! const dataUrl = cropper.commit_crop();
//! ```

use wasm_bindgen::prelude::*;

mod batch;
mod crop;
mod decode;
mod types;

// Re-export public types
pub use batch::Batch;
pub use crop::Cropper;
pub use decode::{decode_photo, photo_quality, preview_thumbnail};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Panics in WASM otherwise die as an opaque "unreachable executed";
    // forward the message to the browser console instead
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&info.to_string().into());
    }));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
