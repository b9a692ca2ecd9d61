use std::borrow::Cow;

use super::checksum::checksum_valid;
use super::countries::{IbanCountry, lookup_country};
use super::error::IbanError;
use super::normalize::normalize;

/// Caller-supplied IBAN text that may be absent.
///
/// Implemented for string types, references to them and `Option`s of them,
/// so `validate("…")`, `validate(&owned)` and `validate(maybe_field)` all
/// go through the same entry point.
pub trait IbanInput {
    /// The raw text, or `None` if nothing was supplied.
    fn raw_iban(&self) -> Option<&str>;
}

impl IbanInput for str {
    fn raw_iban(&self) -> Option<&str> {
        Some(self)
    }
}

impl IbanInput for String {
    fn raw_iban(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl IbanInput for Cow<'_, str> {
    fn raw_iban(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: IbanInput + ?Sized> IbanInput for &T {
    fn raw_iban(&self) -> Option<&str> {
        (**self).raw_iban()
    }
}

impl<T: IbanInput> IbanInput for Option<T> {
    fn raw_iban(&self) -> Option<&str> {
        self.as_ref().and_then(IbanInput::raw_iban)
    }
}

/// Return the raw text, treating `None` and `""` alike.
pub(crate) fn present(iban: &impl IbanInput) -> Option<&str> {
    iban.raw_iban().filter(|raw| !raw.is_empty())
}

/// Validate an IBAN: shape, registered country length and mod-97 checksum.
///
/// Whitespace and letter case are ignored. Never panics; every rejection
/// is `false`.
pub fn validate(iban: impl IbanInput) -> bool {
    match check(iban) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("IBAN rejected: {err}");
            false
        }
    }
}

/// Alias of [`validate`].
pub fn is_valid(iban: impl IbanInput) -> bool {
    validate(iban)
}

/// Like [`validate`], but reports which check failed.
pub fn check(iban: impl IbanInput) -> Result<(), IbanError> {
    let raw = present(&iban).ok_or(IbanError::Missing)?;
    check_normalized(&normalize(raw)).map(|_| ())
}

/// Run all checks on an already normalized IBAN and return its country.
pub(crate) fn check_normalized(iban: &str) -> Result<&'static IbanCountry, IbanError> {
    if iban.is_empty() {
        return Err(IbanError::Missing);
    }
    if !has_iban_shape(iban) {
        return Err(IbanError::InvalidStructure);
    }

    // ASCII only past the shape check
    let code = &iban[..2];
    let country = lookup_country(code).ok_or_else(|| IbanError::UnsupportedCountry {
        country: code.to_string(),
    })?;

    if iban.len() != country.length {
        return Err(IbanError::InvalidLength {
            country: code.to_string(),
            expected: country.length,
            actual: iban.len(),
        });
    }

    if !checksum_valid(iban) {
        return Err(IbanError::Checksum);
    }

    Ok(country)
}

/// Anchored `[A-Z]{2}[0-9]{2}[A-Z0-9]+`.
fn has_iban_shape(iban: &str) -> bool {
    let bytes = iban.as_bytes();
    bytes.len() > 4
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
