//! Codec and cross-validation engine for the AAMVA driver's-license
//! machine-readable barcode payload.
//!
//! Three operations, all synchronous and free of shared mutable state:
//!
//! - [`encode`] serializes a [`LicenseRecord`] into the byte-exact,
//!   offset-addressed text record a PDF417 renderer consumes;
//! - [`decode_elements`] turns a raw (possibly noisy) scanned record back
//!   into an element identifier → value map;
//! - [`reconcile`] compares a scanned record against a reference
//!   [`LicenseRecord`] and produces a field-by-field [`ValidationReport`].
//!
//! Barcode symbol rendering and scanning are external collaborators; this
//! crate only deals in the text payload.
pub mod dlid;

pub use dlid::{
    elements::DataElement,
    pdf_417::encode,
    reconcile::{reconcile, FieldResult, FieldStatus, ValidationReport},
    record::{Jurisdiction, LicenseRecord},
    scan::decode_elements,
};
