use lazy_static::lazy_static;
use regex::Regex;

use super::elements::DataElement;

/// One reconciler-checked element: an optional format pattern over the raw
/// scanned value. No pattern means presence-only validation.
pub struct CatalogEntry {
    pub element: DataElement,
    pub pattern: Option<Regex>,
}

impl CatalogEntry {
    fn new(element: DataElement, pattern: Option<&str>) -> Self {
        Self {
            element,
            pattern: pattern.map(|p| Regex::new(p).unwrap()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.pattern.as_ref().map_or(true, |p| p.is_match(value))
    }
}

lazy_static! {
    /// The elements the reconciler reports on, in report order. Patterns are
    /// case-insensitive where the underlying data is alphabetic; the address
    /// jurisdiction code is a strict two-letter uppercase code.
    pub static ref CATALOG: [CatalogEntry; 21] = [
        CatalogEntry::new(DataElement::CustomerIdNumber, Some(r"(?i)^[a-z0-9 -]{1,25}$")),
        CatalogEntry::new(DataElement::CustomerFamilyName, None),
        CatalogEntry::new(DataElement::CustomerFirstName, None),
        CatalogEntry::new(DataElement::CustomerMiddleName, None),
        CatalogEntry::new(DataElement::DateOfBirth, Some(r"^\d{8}$")),
        CatalogEntry::new(DataElement::DocumentExpirationDate, Some(r"^\d{8}$")),
        CatalogEntry::new(DataElement::DocumentIssueDate, Some(r"^\d{8}$")),
        CatalogEntry::new(DataElement::Sex, Some(r"^[129]$")),
        CatalogEntry::new(DataElement::EyeColor, Some(r"(?i)^[a-z]{3}$")),
        CatalogEntry::new(DataElement::HairColor, Some(r"(?i)^[a-z]{3,12}$")),
        CatalogEntry::new(DataElement::Height, Some(r"(?i)^\d{1,3}\s*(in|cm)?$")),
        CatalogEntry::new(DataElement::Weight, Some(r"^\d{1,3}$")),
        CatalogEntry::new(DataElement::AddressStreet, None),
        CatalogEntry::new(DataElement::AddressCity, None),
        CatalogEntry::new(DataElement::AddressJurisdictionCode, Some(r"^[A-Z]{2}$")),
        CatalogEntry::new(DataElement::AddressPostalCode, Some(r"^\d{5}(-?\d{4})?$")),
        CatalogEntry::new(DataElement::VehicleClass, Some(r"(?i)^[a-z0-9]{1,6}$")),
        CatalogEntry::new(DataElement::RestrictionCodes, None),
        CatalogEntry::new(DataElement::EndorsementCodes, None),
        CatalogEntry::new(DataElement::DocumentDiscriminator, None),
        CatalogEntry::new(DataElement::CountryIdentification, Some(r"^[A-Z]{3}$")),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_non_placeholder_data_element() {
        let mut ids: Vec<_> = CATALOG.iter().map(|e| e.element.string_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 21);
        assert!(CATALOG.iter().all(|e| !e.element.is_placeholder()));
    }

    #[test]
    fn jurisdiction_code_pattern_is_case_sensitive() {
        let entry = CATALOG
            .iter()
            .find(|e| e.element == DataElement::AddressJurisdictionCode)
            .unwrap();
        assert!(entry.matches("CA"));
        assert!(!entry.matches("california"));
        assert!(!entry.matches("C1"));
    }

    #[test]
    fn height_pattern_accepts_bare_and_suffixed_values() {
        let entry = CATALOG
            .iter()
            .find(|e| e.element == DataElement::Height)
            .unwrap();
        assert!(entry.matches("70"));
        assert!(entry.matches("069 in"));
        assert!(entry.matches("175 CM"));
        assert!(!entry.matches("tall"));
    }

    #[test]
    fn missing_pattern_means_presence_only() {
        let entry = CATALOG
            .iter()
            .find(|e| e.element == DataElement::CustomerFamilyName)
            .unwrap();
        assert!(entry.matches("anything at all"));
    }
}
