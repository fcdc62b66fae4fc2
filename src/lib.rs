//! GS1 to EPC URN conversion
//!
//! GTIN and SSCC values found in XML documents are converted to EPC tag URNs.

pub mod domain;
pub use domain::{classify, Config, GtinMatch, Identifier, NodeText, SsccMatch};

/// Lenient document parsing and identifier node lookup.
pub mod scanner;
pub use scanner::{scan, Document, ScanError};
