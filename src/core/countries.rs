//! IBAN country registry.
//!
//! Expected total IBAN length for every country that issues IBANs, as
//! published in the SWIFT IBAN registry. Update this table when the
//! registry adds or changes a country; nothing else in the crate encodes
//! per-country data.

use serde::Serialize;

/// A country that issues IBANs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IbanCountry {
    /// ISO 3166-1 alpha-2 code (e.g. "DE").
    pub code: &'static str,
    /// Total IBAN length including country code and check digits.
    pub length: usize,
}

const fn c(code: &'static str, length: usize) -> IbanCountry {
    IbanCountry { code, length }
}

/// Look up the registry entry for an uppercase country code.
pub fn lookup_country(code: &str) -> Option<&'static IbanCountry> {
    IBAN_COUNTRIES
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|idx| &IBAN_COUNTRIES[idx])
}

/// Expected IBAN length for `code`, or `None` if the country issues no IBANs.
pub fn country_length(code: &str) -> Option<usize> {
    lookup_country(code).map(|entry| entry.length)
}

/// Check whether `code` is a country with a registered IBAN format.
pub fn is_supported_country(code: &str) -> bool {
    lookup_country(code).is_some()
}

/// Every IBAN country with its total length (89 entries).
/// Sorted by code for binary search.
pub static IBAN_COUNTRIES: &[IbanCountry] = &[
    c("AD", 24), c("AE", 23), c("AL", 28), c("AT", 20), c("AZ", 28), c("BA", 20),
    c("BE", 16), c("BG", 22), c("BH", 22), c("BI", 27), c("BR", 29), c("BY", 28),
    c("CH", 21), c("CR", 22), c("CY", 28), c("CZ", 24), c("DE", 22), c("DJ", 27),
    c("DK", 18), c("DO", 28), c("EE", 20), c("EG", 29), c("ES", 24), c("FI", 18),
    c("FK", 18), c("FO", 18), c("FR", 27), c("GB", 22), c("GE", 22), c("GI", 23),
    c("GL", 18), c("GR", 27), c("GT", 28), c("HN", 28), c("HR", 21), c("HU", 28),
    c("IE", 22), c("IL", 23), c("IQ", 23), c("IS", 26), c("IT", 27), c("JO", 30),
    c("KW", 30), c("KZ", 20), c("LB", 28), c("LC", 32), c("LI", 21), c("LT", 20),
    c("LU", 20), c("LV", 21), c("LY", 25), c("MC", 27), c("MD", 24), c("ME", 22),
    c("MK", 19), c("MN", 20), c("MR", 27), c("MT", 31), c("MU", 30), c("NI", 28),
    c("NL", 18), c("NO", 15), c("OM", 23), c("PK", 24), c("PL", 28), c("PS", 29),
    c("PT", 25), c("QA", 29), c("RO", 24), c("RS", 22), c("RU", 33), c("SA", 24),
    c("SC", 31), c("SD", 18), c("SE", 24), c("SI", 19), c("SK", 24), c("SM", 27),
    c("SO", 23), c("ST", 25), c("SV", 28), c("TL", 23), c("TN", 24), c("TR", 26),
    c("UA", 29), c("VA", 22), c("VG", 24), c("XK", 20), c("YE", 30),
];
