//! EPC URN formatting.
//!
//! Fields are copied as literal digit strings; nothing is padded, parsed as a
//! number, or validated.

use super::identifier::{GtinMatch, SsccMatch};

/// Formats a GTIN as `{prefix}{company_prefix}.{indicator}{product_id}.{serial}`.
///
/// The indicator digit is written directly in front of the item reference.
///
/// # Examples
///
/// ```
/// use gs12urn::domain::{format_gtin_urn, GtinMatch};
///
/// let gtin = GtinMatch::parse("0120339822120127212170080000016").unwrap();
/// assert_eq!(
///     format_gtin_urn(&gtin, "urn:epc:tag:sgtin-198:0."),
///     "urn:epc:tag:sgtin-198:0.0339822.212012.2170080000016"
/// );
/// ```
#[must_use]
pub fn format_gtin_urn(gtin: &GtinMatch<'_>, prefix: &str) -> String {
    format!(
        "{prefix}{}.{}{}.{}",
        gtin.company_prefix(),
        gtin.indicator(),
        gtin.product_id(),
        gtin.serial()
    )
}

/// Formats an SSCC as `{prefix}{company_prefix}.{indicator}{serial}`.
///
/// The check digit is left out, as EPC encodings of an SSCC carry none.
///
/// # Examples
///
/// ```
/// use gs12urn::domain::{format_sscc_urn, SsccMatch};
///
/// let sscc = SsccMatch::parse("00303398220017116004").unwrap();
/// assert_eq!(
///     format_sscc_urn(&sscc, "urn:epc:tag:sscc-96:0."),
///     "urn:epc:tag:sscc-96:0.0339822.3001711600"
/// );
/// ```
#[must_use]
pub fn format_sscc_urn(sscc: &SsccMatch<'_>, prefix: &str) -> String {
    format!(
        "{prefix}{}.{}{}",
        sscc.company_prefix(),
        sscc.indicator(),
        sscc.serial()
    )
}
