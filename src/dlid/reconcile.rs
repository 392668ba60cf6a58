use serde::Serialize;

use super::{
    catalog::{CatalogEntry, CATALOG},
    elements::DataElement,
    record::LicenseRecord,
    scan,
};

/// Outcome of one catalog field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldStatus {
    Match,
    Mismatch,
    MissingInScan,
    InvalidFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldResult {
    pub id: &'static str,
    pub description: &'static str,
    pub expected: String,
    pub observed: String,
    pub status: FieldStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Field-by-field discrepancy report for one scanned record, in catalog
/// order. Produced fresh per reconciliation; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub signature_valid: bool,
    pub raw: String,
    pub fields: Vec<FieldResult>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.signature_valid && self.fields.iter().all(|f| f.status == FieldStatus::Match)
    }
}

/// Reconciles a raw scanned record against `reference`, applying the
/// catalog's format patterns and normalization-aware comparison.
///
/// Scanned input is expected to be imperfect: every defect surfaces as a
/// per-field status, never as an error.
pub fn reconcile(raw: &str, reference: &LicenseRecord) -> ValidationReport {
    let observed = scan::decode_elements(raw);
    let signature_valid = raw.starts_with('@') && raw.contains("ANSI");

    let mut fields = Vec::with_capacity(CATALOG.len());
    for entry in CATALOG.iter() {
        let element = entry.element;
        // the reference goes through the same encode-time substitutions as
        // the encoder, so a scan of our own output compares slot-for-slot
        let expected = element.encoded_value(reference).into_owned();

        let result = match observed.get(element.string_id()) {
            None => FieldResult {
                id: element.string_id(),
                description: element.description(),
                expected: if expected.trim().is_empty() {
                    "(empty)".to_string()
                } else {
                    expected
                },
                observed: String::new(),
                status: FieldStatus::MissingInScan,
                message: Some("element not present in the scanned record".to_string()),
            },
            Some(value) => {
                let (status, message) = check_field(entry, &expected, value);
                FieldResult {
                    id: element.string_id(),
                    description: element.description(),
                    expected,
                    observed: value.clone(),
                    status,
                    message,
                }
            }
        };

        fields.push(result);
    }

    tracing::debug!(
        signature_valid,
        discrepancies = fields
            .iter()
            .filter(|f| f.status != FieldStatus::Match)
            .count(),
        "reconciled scanned record"
    );

    ValidationReport {
        signature_valid,
        raw: raw.to_string(),
        fields,
    }
}

/// A data discrepancy outranks a pattern failure in the report, so the
/// equality check runs first.
fn check_field(
    entry: &CatalogEntry,
    expected: &str,
    observed: &str,
) -> (FieldStatus, Option<String>) {
    let equal = if entry.element == DataElement::Height {
        // unit-suffix and zero-padding differences are not discrepancies
        numeric_digits(expected) == numeric_digits(observed)
    } else {
        normalize(expected) == normalize(observed)
    };

    if !equal {
        return (
            FieldStatus::Mismatch,
            Some(format!("expected `{expected}`, scanned `{observed}`")),
        );
    }

    if !entry.matches(observed) {
        return (
            FieldStatus::InvalidFormat,
            Some("scanned value does not match the expected format".to_string()),
        );
    }

    (FieldStatus::Match, None)
}

/// Uppercase, collapse internal whitespace runs, trim.
fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

fn numeric_digits(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
