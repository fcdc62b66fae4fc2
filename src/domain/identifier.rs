//! GS1 identifier grammars.
//!
//! Two fixed digit layouts are recognised:
//!
//! - GTIN (SGTIN-198): `01` + indicator (1) + company prefix (7) + product id
//!   (5) + check digit (1) + `21` + serial (1 or more)
//! - SSCC (SSCC-96): `00` + extension digit (1) + company prefix (7) + serial
//!   reference (1 or more) + check digit (1)
//!
//! Both patterns are anchored at both ends and accept ASCII digits only.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static GTIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^01(?P<indicator>[0-9])(?P<company_prefix>[0-9]{7})(?P<product_id>[0-9]{5})(?P<check_digit>[0-9])21(?P<serial>[0-9]+)$",
    )
    .expect("GTIN pattern is valid")
});

static SSCC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^00(?P<indicator>[0-9])(?P<company_prefix>[0-9]{7})(?P<serial>[0-9]+)(?P<check_digit>[0-9])$",
    )
    .expect("SSCC pattern is valid")
});

/// Returns the text of a named group.
///
/// Every group in the two patterns is mandatory, so a successful match always
/// has all of them.
fn group<'t>(captures: &Captures<'t>, name: &str) -> &'t str {
    captures.name(name).map_or("", |m| m.as_str())
}

/// A string decomposed according to the GTIN grammar.
///
/// Fields borrow from the matched text and are kept as literal digit strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GtinMatch<'t> {
    indicator: &'t str,
    company_prefix: &'t str,
    product_id: &'t str,
    check_digit: &'t str,
    serial: &'t str,
}

impl<'t> GtinMatch<'t> {
    /// Matches the whole of `text` against the GTIN grammar.
    ///
    /// Returns `None` if any character falls outside the layout.
    #[must_use]
    pub fn parse(text: &'t str) -> Option<Self> {
        let captures = GTIN.captures(text)?;
        Some(Self {
            indicator: group(&captures, "indicator"),
            company_prefix: group(&captures, "company_prefix"),
            product_id: group(&captures, "product_id"),
            check_digit: group(&captures, "check_digit"),
            serial: group(&captures, "serial"),
        })
    }

    /// The single indicator digit.
    #[must_use]
    pub const fn indicator(&self) -> &'t str {
        self.indicator
    }

    /// The seven digit GS1 company prefix.
    #[must_use]
    pub const fn company_prefix(&self) -> &'t str {
        self.company_prefix
    }

    /// The five digit item reference.
    #[must_use]
    pub const fn product_id(&self) -> &'t str {
        self.product_id
    }

    /// The check digit as written. It is not verified.
    #[must_use]
    pub const fn check_digit(&self) -> &'t str {
        self.check_digit
    }

    /// The serial number following the `21` application identifier.
    #[must_use]
    pub const fn serial(&self) -> &'t str {
        self.serial
    }
}

/// A string decomposed according to the SSCC grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SsccMatch<'t> {
    indicator: &'t str,
    company_prefix: &'t str,
    serial: &'t str,
    check_digit: &'t str,
}

impl<'t> SsccMatch<'t> {
    /// Matches the whole of `text` against the SSCC grammar.
    #[must_use]
    pub fn parse(text: &'t str) -> Option<Self> {
        let captures = SSCC.captures(text)?;
        Some(Self {
            indicator: group(&captures, "indicator"),
            company_prefix: group(&captures, "company_prefix"),
            serial: group(&captures, "serial"),
            check_digit: group(&captures, "check_digit"),
        })
    }

    /// The single extension digit.
    #[must_use]
    pub const fn indicator(&self) -> &'t str {
        self.indicator
    }

    /// The seven digit GS1 company prefix.
    #[must_use]
    pub const fn company_prefix(&self) -> &'t str {
        self.company_prefix
    }

    /// The serial reference between the company prefix and the check digit.
    #[must_use]
    pub const fn serial(&self) -> &'t str {
        self.serial
    }

    /// The trailing check digit as written. It is not verified.
    #[must_use]
    pub const fn check_digit(&self) -> &'t str {
        self.check_digit
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn gtin_fields() {
        let gtin = GtinMatch::parse("0120339822120127212170080000016").unwrap();
        assert_eq!(gtin.indicator(), "2");
        assert_eq!(gtin.company_prefix(), "0339822");
        assert_eq!(gtin.product_id(), "12012");
        assert_eq!(gtin.check_digit(), "7");
        assert_eq!(gtin.serial(), "2170080000016");
    }

    #[test]
    fn sscc_fields() {
        let sscc = SsccMatch::parse("00303398220017116004").unwrap();
        assert_eq!(sscc.indicator(), "3");
        assert_eq!(sscc.company_prefix(), "0339822");
        assert_eq!(sscc.serial(), "001711600");
        assert_eq!(sscc.check_digit(), "4");
    }

    #[test]
    fn sscc_check_digit_is_not_verified() {
        // shortest layout: one serial digit and the check digit
        let sscc = SsccMatch::parse("000000000109").unwrap();
        assert_eq!(sscc.company_prefix(), "0000001");
        assert_eq!(sscc.serial(), "0");
        assert_eq!(sscc.check_digit(), "9");
    }

    #[test]
    fn gtin_check_digit_is_not_verified() {
        // 9 is not the correct check digit for this GTIN
        let gtin = GtinMatch::parse("0120339822120129211").unwrap();
        assert_eq!(gtin.check_digit(), "9");
        assert_eq!(gtin.serial(), "1");
    }

    #[test_case(""; "empty")]
    #[test_case("012033982212012721"; "missing serial")]
    #[test_case("0220339822120127212170080000016"; "wrong leading ai")]
    #[test_case("0120339822120127222170080000016"; "wrong serial ai")]
    #[test_case("0120339822120127212170080000016 "; "trailing space")]
    #[test_case(" 0120339822120127212170080000016"; "leading space")]
    #[test_case("0120339822120127212170080000016\n"; "trailing newline")]
    #[test_case("01203398221201272121700800000X6"; "letter in serial")]
    #[test_case("012033982212012721\u{0661}"; "non ascii digit")]
    fn gtin_rejects(text: &str) {
        assert!(GtinMatch::parse(text).is_none());
    }

    #[test_case(""; "empty")]
    #[test_case("003033982"; "short company prefix")]
    #[test_case("0030339822"; "missing serial")]
    #[test_case("00303398224"; "check digit without serial")]
    #[test_case("01303398220017116004"; "gtin ai")]
    #[test_case("00303398220017116004-"; "trailing dash")]
    #[test_case("0030339822001711600\u{0664}"; "non ascii digit")]
    fn sscc_rejects(text: &str) {
        assert!(SsccMatch::parse(text).is_none());
    }

    #[test]
    fn extra_trailing_digit_extends_serial() {
        let gtin = GtinMatch::parse("01203398221201272121700800000160").unwrap();
        assert_eq!(gtin.serial(), "21700800000160");

        let sscc = SsccMatch::parse("003033982200171160045").unwrap();
        assert_eq!(sscc.serial(), "0017116004");
        assert_eq!(sscc.check_digit(), "5");
    }

    #[test]
    fn grammars_are_disjoint() {
        assert!(SsccMatch::parse("0120339822120127212170080000016").is_none());
        assert!(GtinMatch::parse("00303398220017116004").is_none());
    }
}
