//! Data URL encoding for crop output.
//!
//! The UI attaches the cropped photo to an employee record as a
//! `data:image/jpeg;base64,...` string, the same shape the original photo
//! preview pipeline consumed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Prefix of every JPEG data URL produced by the crop pipeline.
pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Wrap JPEG bytes in a base64 data URL.
pub fn jpeg_data_url(jpeg_bytes: &[u8]) -> String {
    let mut url = String::with_capacity(JPEG_DATA_URL_PREFIX.len() + jpeg_bytes.len() * 4 / 3 + 4);
    url.push_str(JPEG_DATA_URL_PREFIX);
    STANDARD.encode_string(jpeg_bytes, &mut url);
    url
}

/// Decode a JPEG data URL back into raw bytes.
///
/// Returns `None` when the prefix is missing or the payload is not valid
/// base64. Used by tests and by callers that need to re-open a previously
/// committed crop.
pub fn jpeg_from_data_url(url: &str) -> Option<Vec<u8>> {
    let payload = url.strip_prefix(JPEG_DATA_URL_PREFIX)?;
    STANDARD.decode(payload).ok()
}
