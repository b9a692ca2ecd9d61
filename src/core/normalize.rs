/// Strip all whitespace from `iban` and upper-case what remains.
///
/// Whitespace is Unicode White_Space plus U+FEFF (byte order mark /
/// zero-width no-break space), which clipboard text often carries.
///
/// This is the only representation fed into the structural, length and
/// checksum checks. Applying it twice yields the same string.
pub fn normalize(iban: &str) -> String {
    iban.chars()
        .filter(|&c| !is_iban_whitespace(c))
        .collect::<String>()
        .to_uppercase()
}

fn is_iban_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
