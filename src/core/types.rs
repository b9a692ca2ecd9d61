use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::countries::IbanCountry;
use super::error::IbanError;
use super::format::group_by_four;
use super::normalize::normalize;
use super::validation::check_normalized;

/// A validated IBAN, stored in electronic format (no spaces, uppercase).
///
/// Construction runs the same checks as [`validate`](crate::core::validate),
/// so holding an `Iban` means the country, length and checksum are correct.
/// `Display` renders the grouped print format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban {
    electronic: String,
    country: &'static IbanCountry,
}

impl Iban {
    /// Parse and validate an IBAN. Whitespace and case are ignored.
    pub fn parse(input: &str) -> Result<Self, IbanError> {
        let electronic = normalize(input);
        let country = check_normalized(&electronic)?;
        log::trace!("parsed {} IBAN", country.code);
        Ok(Self {
            electronic,
            country,
        })
    }

    /// Electronic format, e.g. "DE89370400440532013000".
    pub fn as_str(&self) -> &str {
        &self.electronic
    }

    /// ISO 3166-1 alpha-2 country code, e.g. "DE".
    pub fn country_code(&self) -> &str {
        &self.electronic[..2]
    }

    /// The two check digits following the country code.
    pub fn check_digits(&self) -> &str {
        &self.electronic[2..4]
    }

    /// Basic Bank Account Number: everything after the check digits.
    pub fn bban(&self) -> &str {
        &self.electronic[4..]
    }

    /// Registry entry for this IBAN's country.
    pub fn country(&self) -> &'static IbanCountry {
        self.country
    }

    /// Consume the IBAN and return its electronic format.
    pub fn into_string(self) -> String {
        self.electronic
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_by_four(&self.electronic))
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iban {
    type Error = IbanError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.into_string()
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_components() {
        let iban = Iban::parse("FR14 2004 1010 0505 0001 3M02 606").unwrap();
        assert_eq!(iban.as_str(), "FR1420041010050500013M02606");
        assert_eq!(iban.country_code(), "FR");
        assert_eq!(iban.check_digits(), "14");
        assert_eq!(iban.bban(), "20041010050500013M02606");
        assert_eq!(iban.country().length, 27);
    }

    #[test]
    fn display_is_print_format() {
        let iban: Iban = "ch9300762011623852957".parse().unwrap();
        assert_eq!(iban.to_string(), "CH93 0076 2011 6238 5295 7");
    }

    #[test]
    fn parse_reports_reason() {
        assert_eq!(Iban::parse(""), Err(IbanError::Missing));
        assert_eq!(
            Iban::parse("DE89370400440532013001"),
            Err(IbanError::Checksum)
        );
        assert!(matches!(
            Iban::parse("XX89370400440532013000"),
            Err(IbanError::UnsupportedCountry { .. })
        ));
    }

    #[test]
    fn equal_regardless_of_input_spacing() {
        let a = Iban::parse("AT611904300234573201").unwrap();
        let b = Iban::try_from("at61 1904 3002 3457 3201").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn converts_into_electronic_string() {
        let iban = Iban::try_from(String::from("NO93 8601 1117 947")).unwrap();
        assert_eq!(String::from(iban), "NO9386011117947");
    }
}
