use std::borrow::Cow;

use super::{data_elements, record::LicenseRecord};

data_elements! {
    /// Data elements of the `DL` subfile, in canonical encode order.
    ///
    /// The three name-truncation indicators are structural placeholders
    /// required by the format; they carry no record data and are always
    /// emitted empty.
    pub enum DataElement for LicenseRecord {
        /// DHS compliance type (DDA).
        ComplianceType: b"DDA", "Compliance Type" => compliance_type;

        /// Card revision / record creation date (DDB).
        CardRevisionDate: b"DDB", "Card Revision Date" => card_revision_date;

        /// Customer ID Number (DAQ).
        CustomerIdNumber: b"DAQ", "License Number" => customer_id_number;

        /// Customer Family Name (DCS).
        CustomerFamilyName: b"DCS", "Last Name" => customer_family_name;

        /// Family name truncation (DDE).
        FamilyNameTruncation: b"DDE", "Last Name Truncation";

        /// Customer First Name (DAC).
        CustomerFirstName: b"DAC", "First Name" => customer_first_name;

        /// First name truncation (DDF).
        FirstNameTruncation: b"DDF", "First Name Truncation";

        /// Customer Middle Name(s) (DAD).
        CustomerMiddleName: b"DAD", "Middle Name" => customer_middle_name;

        /// Middle name truncation (DDG).
        MiddleNameTruncation: b"DDG", "Middle Name Truncation";

        /// Jurisdiction-specific vehicle class (DCA).
        VehicleClass: b"DCA", "Vehicle Class" => vehicle_class;

        /// Jurisdiction-specific restriction codes (DCB).
        RestrictionCodes: b"DCB", "Restrictions" => restriction_codes;

        /// Jurisdiction-specific endorsement codes (DCD).
        EndorsementCodes: b"DCD", "Endorsements" => endorsement_codes;

        /// Document Expiration Date (DBA).
        DocumentExpirationDate: b"DBA", "Expiration Date" => document_expiration_date;

        /// Date of Birth (DBB).
        DateOfBirth: b"DBB", "Date of Birth" => date_of_birth;

        /// Physical Description – Sex (DBC).
        Sex: b"DBC", "Sex" => sex;

        /// Physical Description – Eye Color (DAY).
        EyeColor: b"DAY", "Eye Color" => eye_color;

        /// Hair color (DAZ).
        HairColor: b"DAZ", "Hair Color" => hair_color;

        /// Physical Description – Height (DAU).
        Height: b"DAU", "Height" => height;

        /// Cardholder weight in pounds (DAW).
        Weight: b"DAW", "Weight" => weight;

        /// Address – Street 1 (DAG).
        AddressStreet: b"DAG", "Street Address" => address_street;

        /// Address – City (DAI).
        AddressCity: b"DAI", "City" => address_city;

        /// Address – Jurisdiction Code (DAJ).
        AddressJurisdictionCode: b"DAJ", "State" => address_jurisdiction_code;

        /// Address – Postal Code (DAK).
        AddressPostalCode: b"DAK", "Postal Code" => address_postal_code;

        /// Document Discriminator (DCF).
        DocumentDiscriminator: b"DCF", "Document Discriminator" => document_discriminator;

        /// Country Identification (DCG).
        CountryIdentification: b"DCG", "Country" => jurisdiction.country;

        /// Document Issue Date (DBD).
        DocumentIssueDate: b"DBD", "Issue Date" => document_issue_date;
    }
}

impl DataElement {
    /// Slot value as it goes on the wire: restriction and endorsement codes
    /// fall back to the literal `NONE`, height gains a ` in` suffix when no
    /// unit is present, truncation placeholders stay empty.
    pub fn encoded_value<'a>(&self, record: &'a LicenseRecord) -> Cow<'a, str> {
        let raw = self.value_of(record);
        match self {
            Self::RestrictionCodes | Self::EndorsementCodes if raw.trim().is_empty() => {
                Cow::Borrowed("NONE")
            }
            Self::Height if !raw.ends_with(" in") && !raw.ends_with(" cm") => {
                Cow::Owned(format!("{raw} in"))
            }
            _ => Cow::Borrowed(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dlid::record::Jurisdiction;

    #[test]
    fn canonical_order_is_fixed() {
        assert_eq!(DataElement::COUNT, 26);
        assert_eq!(DataElement::LIST[0], DataElement::ComplianceType);
        assert_eq!(DataElement::LIST[25], DataElement::DocumentIssueDate);
    }

    #[test]
    fn id_round_trip() {
        for element in DataElement::LIST {
            assert_eq!(DataElement::from_id(element.id()), Some(element));
        }
        assert_eq!(DataElement::from_id(b"XXX"), None);
    }

    #[test]
    fn truncation_indicators_are_placeholders() {
        let placeholders: Vec<_> = DataElement::LIST
            .into_iter()
            .filter(DataElement::is_placeholder)
            .collect();
        assert_eq!(
            placeholders,
            [
                DataElement::FamilyNameTruncation,
                DataElement::FirstNameTruncation,
                DataElement::MiddleNameTruncation,
            ]
        );

        let record = LicenseRecord::default();
        for element in placeholders {
            assert_eq!(element.value_of(&record), "");
            assert_eq!(element.encoded_value(&record), "");
        }
    }

    #[test]
    fn restrictions_and_endorsements_default_to_none() {
        let mut record = LicenseRecord::default();
        record.restriction_codes = "  ".to_string();
        assert_eq!(DataElement::RestrictionCodes.encoded_value(&record), "NONE");
        assert_eq!(DataElement::EndorsementCodes.encoded_value(&record), "NONE");

        record.restriction_codes = "B".to_string();
        assert_eq!(DataElement::RestrictionCodes.encoded_value(&record), "B");
    }

    #[test]
    fn height_gains_unit_suffix() {
        let mut record = LicenseRecord::default();
        record.height = "070".to_string();
        assert_eq!(DataElement::Height.encoded_value(&record), "070 in");

        record.height = "175 cm".to_string();
        assert_eq!(DataElement::Height.encoded_value(&record), "175 cm");
    }

    #[test]
    fn country_reads_from_jurisdiction() {
        let record = LicenseRecord::new(Jurisdiction::california());
        assert_eq!(DataElement::CountryIdentification.value_of(&record), "USA");
    }
}
