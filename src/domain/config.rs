/// Tag name searched for when none is given.
pub const DEFAULT_NODE_NAME: &str = "cmn:SerialNumber";

/// URN prefix written in front of converted GTINs by default.
pub const DEFAULT_GTIN_PREFIX: &str = "urn:epc:tag:sgtin-198:0.";

/// URN prefix written in front of converted SSCCs by default.
pub const DEFAULT_SSCC_PREFIX: &str = "urn:epc:tag:sscc-96:0.";

/// Settings for a conversion run.
///
/// The node name is matched against tag names case-insensitively, with any
/// namespace prefix treated as part of the name (`cmn:SerialNumber` only
/// matches elements literally called `cmn:serialnumber` in any case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    node_name: String,
    gtin_prefix: String,
    sscc_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_name: DEFAULT_NODE_NAME.to_string(),
            gtin_prefix: DEFAULT_GTIN_PREFIX.to_string(),
            sscc_prefix: DEFAULT_SSCC_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Sets the tag name of the elements holding identifiers.
    #[must_use]
    pub fn with_node_name(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = node_name.into();
        self
    }

    /// Sets the prefix for GTIN URNs.
    #[must_use]
    pub fn with_gtin_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.gtin_prefix = prefix.into();
        self
    }

    /// Sets the prefix for SSCC URNs.
    #[must_use]
    pub fn with_sscc_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.sscc_prefix = prefix.into();
        self
    }

    /// The tag name of the elements holding identifiers.
    #[must_use]
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// The prefix for GTIN URNs.
    #[must_use]
    pub fn gtin_prefix(&self) -> &str {
        &self.gtin_prefix
    }

    /// The prefix for SSCC URNs.
    #[must_use]
    pub fn sscc_prefix(&self) -> &str {
        &self.sscc_prefix
    }
}
