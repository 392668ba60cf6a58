use serde::{Deserialize, Serialize};

/// Issuing-jurisdiction slots of a license record.
///
/// Set once when a jurisdiction is selected and treated as read-only by the
/// rest of the pipeline. `issuer_id` is the 6-digit Issuer Identification
/// Number assigned to the jurisdiction, `version` the 2-digit version of the
/// card design standard the record conforms to.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub issuing_authority: String,
    pub country: String,
    pub issuer_id: u32,
    pub version: u8,
}

impl Jurisdiction {
    pub fn new(
        issuing_authority: impl Into<String>,
        country: impl Into<String>,
        issuer_id: u32,
        version: u8,
    ) -> Self {
        Self {
            issuing_authority: issuing_authority.into(),
            country: country.into(),
            issuer_id,
            version,
        }
    }

    pub fn virginia() -> Self {
        Self::new("VA", "USA", 636000, 9)
    }

    pub fn new_york() -> Self {
        Self::new("NY", "USA", 636001, 9)
    }

    pub fn california() -> Self {
        Self::new("CA", "USA", 636014, 9)
    }
}

/// In-memory representation of one license/ID's data elements.
///
/// Every slot holds a string; an empty string means the slot is unset. The
/// encoder never mutates a record: encode-time substitutions (the `NONE`
/// fallback for restriction and endorsement codes, the height unit suffix)
/// are applied on the way out by
/// [`DataElement::encoded_value`](super::elements::DataElement::encoded_value).
///
/// Dates are 8 ASCII digits in month-day-year order, no separators.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub jurisdiction: Jurisdiction,

    /// DHS compliance type: `F` for fully compliant, `N` for standard (DDA).
    pub compliance_type: String,

    /// Date the record was created or last revised (DDB).
    pub card_revision_date: String,

    /// Customer ID / license number (DAQ).
    pub customer_id_number: String,

    pub customer_family_name: String,
    pub customer_first_name: String,
    pub customer_middle_name: String,

    /// Jurisdiction-specific vehicle class (DCA).
    pub vehicle_class: String,

    /// Jurisdiction-specific restriction codes (DCB); encoded as `NONE`
    /// when empty.
    pub restriction_codes: String,

    /// Jurisdiction-specific endorsement codes (DCD); encoded as `NONE`
    /// when empty.
    pub endorsement_codes: String,

    pub document_expiration_date: String,
    pub date_of_birth: String,

    /// Physical description: sex code (DBC).
    pub sex: String,

    pub eye_color: String,
    pub hair_color: String,

    /// Height with unit suffix, e.g. `069 in` (DAU); ` in` is assumed when
    /// no suffix is present.
    pub height: String,

    pub weight: String,

    pub address_street: String,
    pub address_city: String,
    pub address_jurisdiction_code: String,
    pub address_postal_code: String,

    /// Document discriminator (DCF).
    pub document_discriminator: String,

    pub document_issue_date: String,
}

impl LicenseRecord {
    /// A fresh record with the jurisdiction slots populated and every other
    /// slot empty, ready for user edits or OCR pre-fill.
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self {
            jurisdiction,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_carries_jurisdiction_only() {
        let record = LicenseRecord::new(Jurisdiction::virginia());
        assert_eq!(record.jurisdiction.issuer_id, 636000);
        assert_eq!(record.jurisdiction.country, "USA");
        assert!(record.customer_id_number.is_empty());
        assert!(record.height.is_empty());
    }
}
