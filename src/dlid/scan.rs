use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A 2-letter subfile type tag glued to the first element of its
    /// subfile, as some encoders and scan transports produce it.
    static ref GLUED_SUBFILE_TAG: Regex = Regex::new(r"^(?:DL|ID|EN)[A-Z]{3}").unwrap();

    /// Three uppercase letters of element identifier, then the raw value.
    static ref ELEMENT_LINE: Regex = Regex::new(r"^([A-Z]{3})(.*)$").unwrap();
}

/// Best-effort decode of a scanned record into element identifier → raw
/// value.
///
/// Tolerates CR/LF substitution by scanning hardware and a subfile tag glued
/// to the first data line. Lines that cannot carry an identifier are
/// skipped; a bare identifier records an empty value; the last occurrence of
/// a duplicated identifier wins. A record that does not start with the
/// compliance indicator yields an empty map.
pub fn decode_elements(raw: &str) -> HashMap<String, String> {
    let mut elements = HashMap::new();

    if !raw.starts_with('@') {
        return elements;
    }

    for line in raw.split(['\n', '\r']) {
        let mut line = line.trim();
        if GLUED_SUBFILE_TAG.is_match(line) {
            line = &line[2..];
        }

        let Some(captures) = ELEMENT_LINE.captures(line) else {
            continue;
        };

        elements.insert(captures[1].to_string(), captures[2].trim().to_string());
    }

    tracing::debug!(elements = elements.len(), "decoded scanned record");
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_glued_subfile_tag() {
        let elements = decode_elements("@\nDLDDAF\n");
        assert_eq!(elements["DDA"], "F");
        assert!(!elements.contains_key("DLD"));
    }

    #[test]
    fn rejects_records_without_compliance_indicator() {
        assert!(decode_elements("ANSI 636000090001DLDAQ123\n").is_empty());
        assert!(decode_elements("").is_empty());
    }

    #[test]
    fn treats_carriage_return_as_separator() {
        let elements = decode_elements("@\rDAQ123456\rDCSSMITH\r");
        assert_eq!(elements["DAQ"], "123456");
        assert_eq!(elements["DCS"], "SMITH");
    }

    #[test]
    fn bare_identifier_decodes_to_empty_value() {
        let elements = decode_elements("@\nDDE\nDDF\n");
        assert_eq!(elements["DDE"], "");
        assert_eq!(elements["DDF"], "");
    }

    #[test]
    fn skips_lines_without_an_identifier() {
        let elements = decode_elements("@\nAB\n1\n  \nda lowercase\nDAQ123\n");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements["DAQ"], "123");
    }

    #[test]
    fn last_duplicate_wins() {
        let elements = decode_elements("@\nDAQ111\nDAQ222\n");
        assert_eq!(elements["DAQ"], "222");
    }

    #[test]
    fn trims_observed_values() {
        let elements = decode_elements("@\nDCS  SMITH  \n");
        assert_eq!(elements["DCS"], "SMITH");
    }
}
