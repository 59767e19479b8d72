//! Batch employee/card pipeline.
//!
//! Everything needed to assemble one card order: the employee record model,
//! card-type classification, the CSV batch-file codec, and the
//! [`OrderBatch`] working set with its photo-completeness submission gate.

mod csv;
mod record;
mod roster;

pub use csv::{parse_batch_csv, write_batch_csv, BATCH_CSV_HEADER, PHOTO_MARKER};
pub use record::{
    CardType, EmployeeRecord, RecordDraft, RecordUpdate, DEFAULT_VALID_THROUGH,
};
pub use roster::{BatchError, BatchState, OrderBatch};
