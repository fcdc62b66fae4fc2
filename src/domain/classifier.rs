//! Choosing a grammar for a piece of node text.

use std::borrow::Cow;

use super::{
    identifier::{GtinMatch, SsccMatch},
    urn::{format_gtin_urn, format_sscc_urn},
    Config,
};

/// Anything that can hand over its text content.
///
/// Implemented by parsed document elements, and by plain strings so the
/// classifier can be driven without a document.
pub trait NodeText {
    /// The text content of the node.
    fn text(&self) -> Cow<'_, str>;
}

impl NodeText for str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl NodeText for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// A GS1 identifier recognised in node text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'t> {
    /// Matched the GTIN grammar.
    Gtin(GtinMatch<'t>),
    /// Matched the SSCC grammar.
    Sscc(SsccMatch<'t>),
}

impl<'t> Identifier<'t> {
    /// Recognises `text` as a GTIN or, failing that, an SSCC.
    ///
    /// The SSCC grammar is only tried when the GTIN grammar does not match.
    #[must_use]
    pub fn parse(text: &'t str) -> Option<Self> {
        GtinMatch::parse(text)
            .map(Self::Gtin)
            .or_else(|| SsccMatch::parse(text).map(Self::Sscc))
    }

    /// Formats the identifier using the matching prefix.
    #[must_use]
    pub fn to_urn(&self, gtin_prefix: &str, sscc_prefix: &str) -> String {
        match self {
            Self::Gtin(gtin) => format_gtin_urn(gtin, gtin_prefix),
            Self::Sscc(sscc) => format_sscc_urn(sscc, sscc_prefix),
        }
    }
}

/// Converts node text to a URN.
///
/// Returns `None` when the text matches neither grammar. This is not an error:
/// unrelated or malformed values are skipped.
///
/// # Examples
///
/// ```
/// use gs12urn::classify;
///
/// let urn = classify("00303398220017116004", "", "urn:epc:tag:sscc-96:0.");
/// assert_eq!(urn.as_deref(), Some("urn:epc:tag:sscc-96:0.0339822.3001711600"));
///
/// assert_eq!(classify("not a serial", "", ""), None);
/// ```
#[must_use]
pub fn classify(text: &str, gtin_prefix: &str, sscc_prefix: &str) -> Option<String> {
    let Some(identifier) = Identifier::parse(text) else {
        tracing::trace!("Skipping unrecognised value {text:?}");
        return None;
    };
    Some(identifier.to_urn(gtin_prefix, sscc_prefix))
}

/// Converts the text of `node` to a URN using the prefixes in `config`.
#[must_use]
pub fn convert_node<N: NodeText + ?Sized>(node: &N, config: &Config) -> Option<String> {
    classify(&node.text(), config.gtin_prefix(), config.sscc_prefix())
}
