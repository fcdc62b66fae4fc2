//! Domain logic for converting GS1 identifiers.
//!
//! This module contains the identifier grammars, URN formatting, the
//! classifier that ties them together, and the conversion settings.

pub mod identifier;
pub use identifier::{GtinMatch, SsccMatch};

pub mod urn;
pub use urn::{format_gtin_urn, format_sscc_urn};

mod classifier;
pub use classifier::{classify, convert_node, Identifier, NodeText};

mod config;
pub use config::{Config, DEFAULT_GTIN_PREFIX, DEFAULT_NODE_NAME, DEFAULT_SSCC_PREFIX};
