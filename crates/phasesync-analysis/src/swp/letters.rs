//! Letter value table: A=1 through Z=26, case-insensitive, everything else 0.

/// Numeric value of a character.
///
/// Characters whose uppercase form is a single ASCII letter score that
/// letter's position; everything else (digits, punctuation, whitespace,
/// other scripts, multi-character uppercase expansions such as `ß`) is 0.
#[inline]
pub fn letter_value(c: char) -> u8 {
    if c.is_ascii() {
        return ascii_value(c);
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u.is_ascii() => ascii_value(u),
        _ => 0,
    }
}

#[inline]
fn ascii_value(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        u @ 'A'..='Z' => u as u8 - b'A' + 1,
        _ => 0,
    }
}

/// Letter values of the alphabetic characters in `text`, in order.
///
/// Non-alphabetic characters are dropped rather than scored as 0, so the
/// result lists one entry per letter.
pub fn letter_values(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .map(letter_value)
        .collect()
}
