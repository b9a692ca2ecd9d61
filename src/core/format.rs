//! Display formatting and prefix extraction. Neither validates.

use super::normalize::normalize;
use super::validation::{IbanInput, present};

/// Group the normalized input into blocks of four characters separated by
/// single spaces (the IBAN "print format").
///
/// Works on any input, valid or not. Missing input gives an empty string.
pub fn format(iban: impl IbanInput) -> String {
    match present(&iban) {
        Some(raw) => group_by_four(&normalize(raw)),
        None => String::new(),
    }
}

/// Best-effort country prefix: the first two normalized characters.
///
/// Returns `None` for missing input or raw input shorter than two
/// characters. Whitespace counts toward that length, so the prefix of
/// e.g. `" D"` is just `"D"`.
pub fn get_country_code(iban: impl IbanInput) -> Option<String> {
    let raw = present(&iban)?;
    if raw.chars().count() < 2 {
        return None;
    }
    Some(normalize(raw).chars().take(2).collect())
}

pub(crate) fn group_by_four(normalized: &str) -> String {
    let mut out = String::with_capacity(normalized.len() + normalized.len() / 4);
    for (i, c) in normalized.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
