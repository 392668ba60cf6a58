//! AAMVA DL/ID Card Design Standard payload codec.
//!
//! See: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
mod macros;
pub(crate) use macros::*;

pub mod catalog;
pub mod elements;
pub mod pdf_417;
pub mod record;
pub mod reconcile;
pub mod scan;
