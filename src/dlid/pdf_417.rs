use std::io;

use super::{elements::DataElement, record::LicenseRecord};

const HEADER_SIZE: usize = 9 + 6 + 2 + 2 + 2;

const SUBFILE_DESIGNATOR_SIZE: usize = 2 + 4 + 4;

/// Byte offset of the single `DL` subfile body. Header and designator are
/// fixed-width and this crate always emits exactly one subfile, so the
/// offset never varies.
pub const SUBFILE_OFFSET: usize = HEADER_SIZE + SUBFILE_DESIGNATOR_SIZE;

const DATA_ELEMENT_SEPARATOR: u8 = b'\n';

const SEGMENT_TERMINATOR: u8 = b'\r';

/// Compliance indicator, data element separator, record separator, segment
/// terminator, file type.
const PREFIX: [u8; 9] = *b"@\n\x1e\rANSI ";

const SUBFILE_TYPE: [u8; 2] = *b"DL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("record too short for the fixed-width header")]
    Truncated,

    #[error("compliance indicator or file type marker missing")]
    BadPrefix,

    #[error("non-digit byte in a fixed-width numeric field")]
    BadDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub issuer_id: u32,
    pub version: u8,
    pub jurisdiction_version: u8,
    pub entry_count: u8,
}

impl Header {
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        if raw.len() < HEADER_SIZE {
            return Err(ParseError::Truncated);
        }
        if raw[..9] != PREFIX {
            return Err(ParseError::BadPrefix);
        }

        Ok(Self {
            issuer_id: parse_digits(&raw[9..15])? as u32,
            version: parse_digits(&raw[15..17])? as u8,
            jurisdiction_version: parse_digits(&raw[17..19])? as u8,
            entry_count: parse_digits(&raw[19..21])? as u8,
        })
    }

    pub fn write(&self, writer: &mut impl io::Write) -> io::Result<()> {
        writer.write_all(&PREFIX)?;
        write_digits(writer, self.issuer_id as u64, 6)?;
        write_digits(writer, self.version as u64, 2)?;
        write_digits(writer, self.jurisdiction_version as u64, 2)?;
        write_digits(writer, self.entry_count as u64, 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubfileDesignator {
    pub subfile_type: [u8; 2],
    pub offset: usize,
    pub length: usize,
}

impl SubfileDesignator {
    /// Parses the designator that follows the header, from a slice starting
    /// at the beginning of the full record.
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        let raw = raw
            .get(HEADER_SIZE..SUBFILE_OFFSET)
            .ok_or(ParseError::Truncated)?;

        Ok(Self {
            subfile_type: [raw[0], raw[1]],
            offset: parse_digits(&raw[2..6])? as usize,
            length: parse_digits(&raw[6..10])? as usize,
        })
    }

    pub fn write(&self, writer: &mut impl io::Write) -> io::Result<()> {
        writer.write_all(&self.subfile_type)?;
        write_digits(writer, self.offset as u64, 4)?;
        write_digits(writer, self.length as u64, 4)
    }
}

/// Serializes `record` into the exact barcode payload: 21-byte header,
/// 10-byte subfile designator, `DL` subfile body, segment terminator.
///
/// Never fails on a well-formed record; empty slots serialize as empty
/// segments, which is the caller's responsibility to avoid.
pub fn write_record(record: &LicenseRecord, writer: &mut impl io::Write) -> io::Result<()> {
    let body = subfile_body(record);

    Header {
        issuer_id: record.jurisdiction.issuer_id,
        version: record.jurisdiction.version,
        jurisdiction_version: 0,
        entry_count: 1,
    }
    .write(writer)?;

    SubfileDesignator {
        subfile_type: SUBFILE_TYPE,
        offset: SUBFILE_OFFSET,
        // the trailing segment terminator counts toward the subfile length
        length: body.len() + 1,
    }
    .write(writer)?;

    writer.write_all(&body)?;
    writer.write_all(&[SEGMENT_TERMINATOR])
}

/// Serializes `record` to its payload string.
pub fn encode(record: &LicenseRecord) -> String {
    let mut data = Vec::new();
    write_record(record, &mut data).unwrap();
    String::from_utf8(data).unwrap()
}

/// Subfile type tag followed by every element in canonical order, each as
/// identifier + value + separator. Truncation placeholders contribute an
/// empty value.
fn subfile_body(record: &LicenseRecord) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&SUBFILE_TYPE);

    for element in DataElement::LIST {
        body.extend_from_slice(element.id());
        body.extend_from_slice(element.encoded_value(record).as_bytes());
        body.push(DATA_ELEMENT_SEPARATOR);
    }

    body
}

fn parse_digits(raw: &[u8]) -> Result<u64, ParseError> {
    let mut value = 0u64;
    for &b in raw {
        if !b.is_ascii_digit() {
            return Err(ParseError::BadDigit);
        }
        value = value * 10 + (b - b'0') as u64;
    }
    Ok(value)
}

fn write_digits(writer: &mut impl io::Write, value: u64, width: u32) -> io::Result<()> {
    for i in (0..width).rev() {
        let digit = ((value / 10u64.pow(i)) % 10) as u8;
        writer.write_all(&[digit + b'0'])?;
    }
    Ok(())
}
