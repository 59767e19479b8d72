//! Batch file import/export.
//!
//! The batch file is a UTF-8 CSV with a fixed column order:
//! `Nome, Nome Completo, Matrícula, Foto`. The header row is display-only;
//! columns are matched by position, never by name. RFC 4180 quoting is
//! handled by the `csv` crate (an upgrade over the original's naive
//! comma-split, which silently broke on quoted names).

use super::record::{EmployeeRecord, RecordDraft};
use super::roster::BatchError;

/// Display header written on export; ignored on import.
pub const BATCH_CSV_HEADER: [&str; 4] = ["Nome", "Nome Completo", "Matrícula", "Foto"];

/// Fixed marker written into the Foto column for records with a photo.
/// Exporting the actual data URL would bloat the file by megabytes.
pub const PHOTO_MARKER: &str = "anexada";

/// Parse a batch file into record drafts.
///
/// Column positions: 0 = short name (ignored; derived on export), 1 = full
/// name, 2 = matrícula, 3 = Foto. A non-empty Foto cell marks the photo as
/// already attached, which is what lets an exported batch round-trip.
///
/// # Errors
///
/// Fails on the first malformed row (missing or empty required fields):
/// the whole import is rejected rather than leaving a partial batch.
pub fn parse_batch_csv(text: &str) -> Result<Vec<RecordDraft>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut drafts = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // Header occupies line 1
        let line = idx + 2;
        let row = result.map_err(|e| BatchError::MalformedRow {
            line,
            reason: e.to_string(),
        })?;

        let full_name = field(&row, 1);
        let employee_number = field(&row, 2);
        let photo = field(&row, 3);

        if full_name.is_empty() {
            return Err(BatchError::MalformedRow {
                line,
                reason: "missing full name".to_string(),
            });
        }
        if employee_number.is_empty() {
            return Err(BatchError::MalformedRow {
                line,
                reason: "missing employee number".to_string(),
            });
        }

        drafts.push(RecordDraft {
            full_name: full_name.to_string(),
            employee_number: employee_number.to_string(),
            photo_url: (!photo.is_empty()).then(|| photo.to_string()),
            ..RecordDraft::default()
        });
    }

    Ok(drafts)
}

/// Serialize records back to the batch file format.
///
/// The short-name column is filled with the first word of the full name;
/// the Foto column carries [`PHOTO_MARKER`] for records with a photo.
pub fn write_batch_csv(records: &[EmployeeRecord]) -> Result<String, BatchError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(BATCH_CSV_HEADER)
        .map_err(|e| BatchError::Csv(e.to_string()))?;

    for record in records {
        let short_name = record.full_name.split_whitespace().next().unwrap_or("");
        let photo = if record.has_photo() { PHOTO_MARKER } else { "" };

        writer
            .write_record([
                short_name,
                record.full_name.as_str(),
                record.employee_number.as_str(),
                photo,
            ])
            .map_err(|e| BatchError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BatchError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| BatchError::Csv(e.to_string()))
}

fn field<'a>(row: &'a csv::StringRecord, index: usize) -> &'a str {
    row.get(index).map(str::trim).unwrap_or("")
}
