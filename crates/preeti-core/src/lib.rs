//! Preeti ⇄ Unicode Devanagari transliteration.
//!
//! Preeti is a keyboard-layout font: Latin keys draw Devanagari glyphs. The
//! converters map one key (or one Unicode scalar) at a time, swapping the
//! pre-base short-i with its consonant, and echo anything they do not know.

pub mod audit;
pub mod classify;
pub mod convert;
pub mod table;

pub use convert::{
    convert_with, preeti_to_unicode, preeti_to_unicode_with, unicode_to_preeti,
    unicode_to_preeti_with, Direction,
};
pub use table::{PreetiTables, TableError};
