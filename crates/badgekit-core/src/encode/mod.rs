//! Crop output encoding.
//!
//! Produces the compressed JPEG data URL that gets attached to an employee
//! record after a crop is committed.

mod data_url;
mod jpeg;

pub use data_url::{jpeg_data_url, jpeg_from_data_url, JPEG_DATA_URL_PREFIX};
pub use jpeg::{encode_jpeg, EncodeError};
