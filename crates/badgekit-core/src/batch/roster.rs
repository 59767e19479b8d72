//! The working set of employee records for one order.
//!
//! An [`OrderBatch`] owns the records being assembled into a single card
//! order: import them from a batch file (or add them one by one), attach
//! cropped photos, edit, and finally submit once every record has a photo.
//! Nothing here talks to a server; submission hands the finished records
//! back to the caller.

use thiserror::Error;
use tracing::{debug, warn};

use super::csv::{parse_batch_csv, write_batch_csv};
use super::record::{
    CardType, EmployeeRecord, RecordDraft, RecordUpdate, DEFAULT_VALID_THROUGH,
};

/// Errors surfaced by batch operations.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A required field is empty.
    #[error("Required field '{0}' is empty")]
    EmptyField(&'static str),

    /// A batch file row could not be parsed; the whole import is rejected.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// The record id is not (or no longer) in the working set.
    #[error("Record {0} not found in the working set")]
    RecordNotFound(u64),

    /// Submission blocked: these employees still have no photo.
    #[error("Submission blocked: {} record(s) missing a photo", names.len())]
    MissingPhotos { names: Vec<String> },

    /// Underlying CSV serialization failure.
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Lifecycle state of the working set, as shown by the order flow UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BatchState {
    /// No records yet (or just submitted).
    Empty,
    /// Records present, at least one without a photo.
    Imported,
    /// Every record has a photo; submission is unblocked.
    PhotoComplete,
}

/// The in-memory working set for one new-order session.
#[derive(Debug, Default)]
pub struct OrderBatch {
    records: Vec<EmployeeRecord>,
    next_id: u64,
}

impl OrderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a batch file, replacing any existing working set.
    ///
    /// Card types are classified per record from the matrícula prefix; a
    /// declared batch-wide type, if the UI collected one, is deliberately
    /// not trusted. Returns the number of records imported.
    ///
    /// # Errors
    ///
    /// On any malformed row the whole import fails and the previous
    /// working set is left untouched.
    pub fn import_csv(&mut self, text: &str) -> Result<usize, BatchError> {
        let drafts = parse_batch_csv(text)?;

        // Parse succeeded in full; only now replace the working set
        self.records.clear();
        for draft in drafts {
            self.push_draft(draft);
        }

        debug!(count = self.records.len(), "imported batch file");
        Ok(self.records.len())
    }

    /// Add a single record. Returns the new record's id.
    pub fn add_record(&mut self, draft: RecordDraft) -> Result<u64, BatchError> {
        if draft.full_name.trim().is_empty() {
            return Err(BatchError::EmptyField("fullName"));
        }
        if draft.employee_number.trim().is_empty() {
            return Err(BatchError::EmptyField("employeeNumber"));
        }

        Ok(self.push_draft(draft))
    }

    /// Attach a cropped photo to a record.
    pub fn attach_photo(&mut self, id: u64, photo_url: String) -> Result<(), BatchError> {
        let record = self.find_mut(id)?;
        record.photo_url = Some(photo_url);
        debug!(id, "photo attached");
        Ok(())
    }

    /// Merge edits into a record's editable fields.
    ///
    /// Rejects updates that would blank a required field. The card type is
    /// re-classified only when the employee number actually changes.
    pub fn update_record(&mut self, id: u64, update: RecordUpdate) -> Result<(), BatchError> {
        if matches!(&update.full_name, Some(name) if name.trim().is_empty()) {
            return Err(BatchError::EmptyField("fullName"));
        }
        if matches!(&update.employee_number, Some(number) if number.trim().is_empty()) {
            return Err(BatchError::EmptyField("employeeNumber"));
        }

        let record = self.find_mut(id)?;

        if let Some(name) = update.full_name {
            record.full_name = name;
        }
        if let Some(number) = update.employee_number {
            record.card_type = CardType::classify(&number);
            record.employee_number = number;
        }
        if let Some(role) = update.role {
            record.role = Some(role);
        }
        if let Some(department) = update.department {
            record.department = Some(department);
        }
        if let Some(valid_through) = update.valid_through {
            record.valid_through = valid_through;
        }
        Ok(())
    }

    /// Remove a record. Deleting an absent id is a silent no-op.
    pub fn delete_record(&mut self, id: u64) {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            warn!(id, "delete requested for a record not in the working set");
        }
    }

    /// Records still lacking a photo: the submission gate.
    ///
    /// Submission must be blocked (and these employees' names shown) while
    /// this list is non-empty.
    pub fn missing_photos(&self) -> Vec<&EmployeeRecord> {
        self.records.iter().filter(|r| !r.has_photo()).collect()
    }

    /// Submit the batch: drains and returns the records for the caller to
    /// hand to order processing, leaving the working set empty.
    ///
    /// # Errors
    ///
    /// `MissingPhotos` with the offending names when the gate is non-empty;
    /// the working set is unchanged in that case.
    pub fn submit(&mut self) -> Result<Vec<EmployeeRecord>, BatchError> {
        let missing: Vec<String> = self
            .missing_photos()
            .iter()
            .map(|r| r.full_name.clone())
            .collect();

        if !missing.is_empty() {
            warn!(blocked = missing.len(), "submission blocked");
            return Err(BatchError::MissingPhotos { names: missing });
        }

        debug!(count = self.records.len(), "batch submitted");
        Ok(std::mem::take(&mut self.records))
    }

    /// Serialize the working set back to the batch file format.
    pub fn export_csv(&self) -> Result<String, BatchError> {
        write_batch_csv(&self.records)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BatchState {
        if self.records.is_empty() {
            BatchState::Empty
        } else if self.missing_photos().is_empty() {
            BatchState::PhotoComplete
        } else {
            BatchState::Imported
        }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push_draft(&mut self, draft: RecordDraft) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.records.push(EmployeeRecord {
            id,
            card_type: CardType::classify(&draft.employee_number),
            full_name: draft.full_name,
            employee_number: draft.employee_number,
            role: draft.role,
            department: draft.department,
            valid_through: draft
                .valid_through
                .unwrap_or_else(|| DEFAULT_VALID_THROUGH.to_string()),
            photo_url: draft.photo_url,
        });
        id
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut EmployeeRecord, BatchError> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(BatchError::RecordNotFound(id))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
