//! Strict checks layered on top of the best-effort converters.
//!
//! Conversion echoes unmapped tokens, so Preeti text run through the forward
//! converter can come out with glyph keys still in it. Every glyph key the
//! font draws a letter on is an ASCII letter, so any ASCII letter left in the
//! output is a key the table did not cover.

use serde::Serialize;

use crate::classify::is_latin;

/// A legacy key left in converted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Residual {
    /// Char index in the converted text.
    pub position: usize,
    pub token: char,
}

pub fn residual_legacy(text: &str) -> Vec<Residual> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| is_latin(*c))
        .map(|(position, token)| Residual { position, token })
        .collect()
}

pub fn is_clean(text: &str) -> bool {
    !text.chars().any(is_latin)
}
