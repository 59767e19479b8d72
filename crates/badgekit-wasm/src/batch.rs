//! WASM bindings for the batch employee pipeline.
//!
//! Records cross the JS boundary as plain objects (camelCase keys) via
//! `serde-wasm-bindgen`; errors surface as thrown `JsError`s carrying the
//! core error message.

use badgekit_core::batch::{BatchState, OrderBatch, RecordDraft, RecordUpdate};
use wasm_bindgen::prelude::*;

/// Stateful handle over the working set for one new-order session.
#[wasm_bindgen]
pub struct Batch {
    inner: OrderBatch,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Batch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Batch {
        Batch {
            inner: OrderBatch::new(),
        }
    }

    /// Import a batch CSV, replacing the working set. Returns the number of
    /// records imported; throws on any malformed row (the previous working
    /// set survives a failed import).
    pub fn import_csv(&mut self, text: &str) -> Result<usize, JsError> {
        Ok(self.inner.import_csv(text)?)
    }

    /// Add a single record from a `{ fullName, employeeNumber, ... }`
    /// object. Returns the new record's id.
    pub fn add_record(&mut self, draft: JsValue) -> Result<u64, JsError> {
        let draft: RecordDraft = serde_wasm_bindgen::from_value(draft)?;
        Ok(self.inner.add_record(draft)?)
    }

    /// Attach a cropped photo (data URL) to a record.
    pub fn attach_photo(&mut self, id: u64, photo_url: String) -> Result<(), JsError> {
        Ok(self.inner.attach_photo(id, photo_url)?)
    }

    /// Merge edits from a partial `{ fullName?, employeeNumber?, ... }`
    /// object into a record.
    pub fn update_record(&mut self, id: u64, update: JsValue) -> Result<(), JsError> {
        let update: RecordUpdate = serde_wasm_bindgen::from_value(update)?;
        Ok(self.inner.update_record(id, update)?)
    }

    /// Remove a record; absent ids are silently ignored.
    pub fn delete_record(&mut self, id: u64) {
        self.inner.delete_record(id);
    }

    /// Full names of records still missing a photo, for the blocked-
    /// submission message.
    pub fn missing_photo_names(&self) -> Vec<String> {
        self.inner
            .missing_photos()
            .iter()
            .map(|r| r.full_name.clone())
            .collect()
    }

    /// The working set as an array of record objects.
    pub fn records(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.inner.records())?)
    }

    /// Ids of the records in the working set, in display order.
    pub fn record_ids(&self) -> Vec<u64> {
        self.inner.records().iter().map(|r| r.id).collect()
    }

    /// Submit the batch. Returns the submitted records (the working set
    /// becomes empty); throws with the missing-photo names when blocked.
    pub fn submit(&mut self) -> Result<JsValue, JsError> {
        let submitted = self.inner.submit()?;
        Ok(serde_wasm_bindgen::to_value(&submitted)?)
    }

    /// Serialize the working set to the batch CSV format for download.
    pub fn export_csv(&self) -> Result<String, JsError> {
        Ok(self.inner.export_csv()?)
    }

    /// Lifecycle state: `"empty"`, `"imported"`, or `"photoComplete"`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.inner.state() {
            BatchState::Empty => "empty".to_string(),
            BatchState::Imported => "imported".to_string(),
            BatchState::PhotoComplete => "photoComplete".to_string(),
        }
    }

    /// Number of records in the working set.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Nome,Nome Completo,Matrícula,Foto
João,João da Silva,3001234,
Maria,Maria Souza,3005678,
";

    #[test]
    fn test_import_and_state() {
        let mut batch = Batch::new();
        assert_eq!(batch.state(), "empty");

        let count = batch.import_csv(SAMPLE).unwrap();
        assert_eq!(count, 2);
        assert_eq!(batch.size(), 2);
        assert_eq!(batch.state(), "imported");
    }

    #[test]
    fn test_import_malformed_throws() {
        let mut batch = Batch::new();
        let bad = "Nome,Nome Completo,Matrícula,Foto\nAna,,3000001,\n";
        assert!(batch.import_csv(bad).is_err());
        assert_eq!(batch.size(), 0);
    }

    #[test]
    fn test_missing_photo_names() {
        let mut batch = Batch::new();
        batch.import_csv(SAMPLE).unwrap();
        assert_eq!(
            batch.missing_photo_names(),
            vec!["João da Silva", "Maria Souza"]
        );
    }

    #[test]
    fn test_submit_blocked_then_succeeds() {
        let mut batch = Batch::new();
        batch.import_csv(SAMPLE).unwrap();

        assert!(batch.submit().is_err());
        assert_eq!(batch.size(), 2);

        for id in batch.record_ids() {
            batch.attach_photo(id, format!("data:{id}")).unwrap();
        }
        assert_eq!(batch.state(), "photoComplete");

        assert!(batch.submit().is_ok());
        assert_eq!(batch.size(), 0);
        assert_eq!(batch.state(), "empty");
    }

    #[test]
    fn test_export_contains_header() {
        let mut batch = Batch::new();
        batch.import_csv(SAMPLE).unwrap();

        let csv = batch.export_csv().unwrap();
        assert!(csv.starts_with("Nome,Nome Completo,Matrícula,Foto"));
    }

    #[test]
    fn test_record_ids_follow_working_set() {
        let mut batch = Batch::new();
        batch.import_csv(SAMPLE).unwrap();

        let ids = batch.record_ids();
        assert_eq!(ids.len(), 2);

        // Ids come from the working set, not from assumptions about how
        // the counter starts
        batch.attach_photo(ids[1], "data:x".to_string()).unwrap();
        assert_eq!(batch.missing_photo_names(), vec!["João da Silva"]);

        batch.delete_record(ids[0]);
        assert_eq!(batch.record_ids(), vec![ids[1]]);
    }

    #[test]
    fn test_delete_silent_on_absent_id() {
        let mut batch = Batch::new();
        batch.import_csv(SAMPLE).unwrap();
        batch.delete_record(99);
        assert_eq!(batch.size(), 2);
    }
}
