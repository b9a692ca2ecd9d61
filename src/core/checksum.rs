//! ISO 7064 MOD97-10 checksum over a normalized IBAN.

/// Numeric value of an uppercase ASCII letter: A=10 … Z=35.
fn letter_value(c: char) -> u32 {
    c as u32 - 55
}

/// Move the first four characters to the end and expand every letter
/// into its two-digit value.
///
/// Returns `None` if the input is shorter than four characters or contains
/// anything besides ASCII digits and uppercase ASCII letters.
pub(crate) fn numeric_transform(iban: &str) -> Option<String> {
    if iban.len() < 4 || !iban.is_char_boundary(4) {
        return None;
    }
    let (head, tail) = iban.split_at(4);

    let mut digits = String::with_capacity(iban.len() * 2);
    for c in tail.chars().chain(head.chars()) {
        match c {
            '0'..='9' => digits.push(c),
            'A'..='Z' => digits.push_str(&letter_value(c).to_string()),
            _ => return None,
        }
    }
    Some(digits)
}

/// Remainder of a decimal digit string modulo 97, computed one digit at a
/// time so arbitrarily long inputs never overflow.
///
/// Non-digit characters yield `None`.
pub(crate) fn mod97(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |remainder, c| {
        let d = c.to_digit(10)?;
        Some((remainder * 10 + d) % 97)
    })
}

/// `true` iff the mod-97 remainder of the rearranged IBAN is 1.
pub(crate) fn checksum_valid(iban: &str) -> bool {
    numeric_transform(iban)
        .and_then(|digits| mod97(&digits))
        .is_some_and(|remainder| remainder == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_values_cover_alphabet() {
        let values: Vec<u32> = ('A'..='Z').map(letter_value).collect();
        assert_eq!(values.first(), Some(&10));
        assert_eq!(values.last(), Some(&35));
        assert_eq!(values, (10..=35).collect::<Vec<_>>());
    }

    #[test]
    fn transform_rearranges_and_expands() {
        // DE = 13 14, moved behind the BBAN with the check digits
        assert_eq!(
            numeric_transform("DE89370400440532013000").as_deref(),
            Some("370400440532013000131489")
        );
    }

    #[test]
    fn transform_expands_bban_letters() {
        assert_eq!(
            numeric_transform("GB82WEST12345698765432").as_deref(),
            Some("3214282912345698765432161182")
        );
    }

    #[test]
    fn transform_rejects_foreign_characters() {
        assert_eq!(numeric_transform("DE89-3704"), None);
        assert_eq!(numeric_transform("de893704"), None);
        assert_eq!(numeric_transform("DE8"), None);
        assert_eq!(numeric_transform("ÄÖÜ1234"), None);
    }

    #[test]
    fn mod97_matches_big_integer_remainder() {
        assert_eq!(mod97("0"), Some(0));
        assert_eq!(mod97("97"), Some(0));
        assert_eq!(mod97("98"), Some(1));
        assert_eq!(mod97("123456789"), Some((123_456_789u64 % 97) as u32));
        assert_eq!(
            mod97("370400440532013000131489"),
            Some((370_400_440_532_013_000_131_489u128 % 97) as u32)
        );
    }

    #[test]
    fn mod97_rejects_non_digits() {
        assert_eq!(mod97("12a4"), None);
    }

    #[test]
    fn checksum_known_ibans() {
        assert!(checksum_valid("DE89370400440532013000"));
        assert!(checksum_valid("GB82WEST12345698765432"));
        assert!(checksum_valid("TR330006100519786457841326"));
        assert!(!checksum_valid("DE89370400440532013001"));
        assert!(!checksum_valid("DE98370400440532013000"));
    }
}
