//! Employee records and card-type classification.

use serde::{Deserialize, Serialize};

/// Expiry stamped on records that arrive without one.
pub const DEFAULT_VALID_THROUGH: &str = "12/2030";

/// The two card brands.
///
/// The brand is derived from the matrícula (employee number) prefix and
/// drives downstream rendering: `3…` numbers belong to Light, `7…` numbers
/// to Conecta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Light,
    Conecta,
}

impl CardType {
    /// Classify an employee number by its leading character.
    ///
    /// Unrecognized prefixes (including the empty string) fall back to
    /// `Light`. This is the documented tolerant behavior, not an error;
    /// strict callers reject out-of-range numbers before classifying.
    pub fn classify(employee_number: &str) -> Self {
        match employee_number.chars().next() {
            Some('7') => CardType::Conecta,
            _ => CardType::Light,
        }
    }

    /// Brand label as shown in the admin consoles.
    pub fn label(&self) -> &'static str {
        match self {
            CardType::Light => "Light",
            CardType::Conecta => "Conecta",
        }
    }
}

/// One employee in the working batch.
///
/// `has_photo` from the original data model is intentionally not a stored
/// field: it is derived from `photo_url`, which makes the
/// `hasPhoto == (photoUrl != null)` invariant impossible to violate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Unique within one working batch; regenerated on import.
    pub id: u64,
    pub full_name: String,
    /// Matrícula; its leading digit determines [`CardType`].
    pub employee_number: String,
    pub role: Option<String>,
    pub department: Option<String>,
    /// Expiry in `MM/YYYY` form.
    pub valid_through: String,
    pub card_type: CardType,
    /// Data/object URL of the attached photo, if one has been cropped.
    pub photo_url: Option<String>,
}

impl EmployeeRecord {
    pub fn has_photo(&self) -> bool {
        self.photo_url.is_some()
    }
}

/// Fields accepted when creating a record manually or from an import row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub full_name: String,
    pub employee_number: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Defaults to [`DEFAULT_VALID_THROUGH`] when absent.
    #[serde(default)]
    pub valid_through: Option<String>,
    /// Pre-attached photo (set by imports whose Foto column is non-empty).
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Partial update of a record's editable fields. `None` leaves a field as
/// it was.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    pub full_name: Option<String>,
    pub employee_number: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub valid_through: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_light_prefix() {
        assert_eq!(CardType::classify("3001234"), CardType::Light);
        assert_eq!(CardType::classify("3999999"), CardType::Light);
    }

    #[test]
    fn test_classify_conecta_prefix() {
        assert_eq!(CardType::classify("7009876"), CardType::Conecta);
        assert_eq!(CardType::classify("7"), CardType::Conecta);
    }

    #[test]
    fn test_classify_fallback_to_light() {
        assert_eq!(CardType::classify("1002345"), CardType::Light);
        assert_eq!(CardType::classify("9"), CardType::Light);
        assert_eq!(CardType::classify("abc"), CardType::Light);
        assert_eq!(CardType::classify(""), CardType::Light);
    }

    #[test]
    fn test_card_type_labels() {
        assert_eq!(CardType::Light.label(), "Light");
        assert_eq!(CardType::Conecta.label(), "Conecta");
    }

    #[test]
    fn test_has_photo_derived_from_url() {
        let mut record = EmployeeRecord {
            id: 1,
            full_name: "Maria Souza".to_string(),
            employee_number: "3005678".to_string(),
            role: None,
            department: None,
            valid_through: DEFAULT_VALID_THROUGH.to_string(),
            card_type: CardType::Light,
            photo_url: None,
        };
        assert!(!record.has_photo());

        record.photo_url = Some("data:image/jpeg;base64,abc".to_string());
        assert!(record.has_photo());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
