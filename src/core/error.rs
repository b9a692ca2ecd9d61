use thiserror::Error;

/// Reasons an input was rejected as an IBAN.
///
/// [`validate`](crate::core::validate) collapses all of these into `false`;
/// [`check`](crate::core::check) and [`Iban::parse`](crate::core::Iban::parse)
/// surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    /// No input, or nothing left after stripping whitespace.
    #[error("no IBAN given")]
    Missing,

    /// Not two letters, two digits, then one or more letters or digits.
    #[error("malformed IBAN: expected country code, two check digits and an alphanumeric BBAN")]
    InvalidStructure,

    /// Well-formed country code that does not issue IBANs.
    #[error("unsupported IBAN country '{country}'")]
    UnsupportedCountry {
        /// The two-letter prefix that was looked up.
        country: String,
    },

    /// Length differs from the registry entry for the country.
    #[error("invalid length for {country}: expected {expected} characters, got {actual}")]
    InvalidLength {
        /// The two-letter country code.
        country: String,
        /// Length registered for the country.
        expected: usize,
        /// Length of the normalized input.
        actual: usize,
    },

    /// Mod-97 remainder is not 1.
    #[error("IBAN checksum mismatch")]
    Checksum,
}
