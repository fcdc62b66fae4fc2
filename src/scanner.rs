//! Finding identifier nodes in inbound documents.
//!
//! Documents are parsed with an HTML5 parser rather than a strict XML parser,
//! so unclosed tags, stray markup and mismatched case are recovered from
//! instead of rejected. Tag names are compared as literal strings: a namespace
//! prefix such as `cmn:` is part of the name and is never resolved.

use std::{borrow::Cow, io::Read};

use scraper::{ElementRef, Html};
use tracing::instrument;

use crate::domain::{convert_node, Config, NodeText};

/// Errors that make a document unreadable.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The input stream could not be read.
    #[error("failed to read document")]
    Io(#[from] std::io::Error),
}

/// A parsed inbound document.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a document held in memory.
    ///
    /// Parsing never fails; malformed markup is repaired the way a browser
    /// would repair it.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Reads a whole stream into memory and parses it.
    ///
    /// Bytes that are not valid UTF-8 (for example accented text in a Latin-1
    /// document) are replaced with U+FFFD. Identifiers are ASCII, so they
    /// survive whatever the declared encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be read.
    pub fn read<R: Read>(mut reader: R) -> Result<Self, ScanError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        tracing::debug!("Read {} bytes", bytes.len());
        let text = String::from_utf8_lossy(&bytes);
        Ok(Self::parse(&text))
    }

    /// Returns the elements called `name`, ignoring ASCII case, in document
    /// order.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Element<'a>> + 'a {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.value().name().eq_ignore_ascii_case(name))
            .map(Element)
    }

    /// Converts every matching element to a URN, skipping elements whose text
    /// is not a recognised identifier.
    #[must_use]
    pub fn convert(&self, config: &Config) -> Vec<String> {
        let mut matched = 0usize;
        let urns: Vec<String> = self
            .elements_named(config.node_name())
            .inspect(|_| matched += 1)
            .filter_map(|element| convert_node(&element, config))
            .collect();
        tracing::debug!(
            "Found {matched} <{}> elements, {} converted",
            config.node_name(),
            urns.len()
        );
        urns
    }
}

/// An element of a parsed [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl Element<'_> {
    /// The element's tag name as parsed, in lower case.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.value().name()
    }
}

impl NodeText for Element<'_> {
    /// Concatenates all descendant text nodes.
    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.text().collect())
    }
}

/// Reads a document from `reader` and converts its identifier nodes to URNs,
/// in document order.
///
/// # Errors
///
/// Returns an error if the document cannot be read. Nodes that do not hold a
/// recognised identifier are skipped, not reported.
#[instrument(level = "debug", skip_all, fields(node_name = config.node_name()))]
pub fn scan<R: Read>(reader: R, config: &Config) -> Result<Vec<String>, ScanError> {
    let document = Document::read(reader)?;
    let urns = document.convert(config);
    tracing::info!("Converted {} identifiers", urns.len());
    Ok(urns)
}
