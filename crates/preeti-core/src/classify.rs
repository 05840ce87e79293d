//! Character-level classification for Devanagari text.

/// Consonant clusters the tables map as a single glyph key.
pub const CONJUNCTS: [&str; 3] = ["क्ष", "त्र", "ज्ञ"];

/// Devanagari consonants: the main block क..ह (U+0915..U+0939) and the
/// precomposed nukta forms क़..य़ (U+0958..U+095F).
pub fn is_consonant_unicode(c: char) -> bool {
    ('\u{0915}'..='\u{0939}').contains(&c) || ('\u{0958}'..='\u{095F}').contains(&c)
}

pub fn is_conjunct(s: &str) -> bool {
    CONJUNCTS.contains(&s)
}

/// A single consonant or one of the modeled conjuncts.
pub fn is_consonant_unicode_str(s: &str) -> bool {
    match single_scalar(s) {
        Some(c) => is_consonant_unicode(c),
        None => is_conjunct(s),
    }
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// The only scalar value of `s`, or `None` if `s` is empty or longer.
pub(crate) fn single_scalar(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
