//! Preeti ⇄ Unicode conversion.
//!
//! Both directions are one left-to-right pass over a two-token window. A
//! pre-base sign (Preeti `l`, the short-i) is swapped with the consonant
//! next to it; every other token goes through the direction's table and
//! passes through unchanged when unmapped. Conversion never fails.

pub mod explain;

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::classify::is_consonant_unicode;
use crate::table::PreetiTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    PreetiToUnicode,
    UnicodeToPreeti,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::PreetiToUnicode => "preeti-to-unicode",
            Direction::UnicodeToPreeti => "unicode-to-preeti",
        }
    }
}

/// How a step produced its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Looked up in the table.
    Mapped,
    /// Not in the table; echoed as-is.
    Passthrough,
    /// Consonant and pre-base sign swapped.
    Reordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'t> {
    Table(&'t str),
    Raw(char),
}

impl Piece<'_> {
    fn push_to(self, out: &mut String) {
        match self {
            Piece::Table(s) => out.push_str(s),
            Piece::Raw(c) => out.push(c),
        }
    }
}

/// One iteration of the window: consumes `len` tokens starting at
/// `position` (a char index) and emits `head` then `tail`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Step<'t> {
    pub position: usize,
    pub len: usize,
    pub kind: StepKind,
    pub head: Piece<'t>,
    pub tail: Option<Piece<'t>>,
}

impl Step<'_> {
    pub(crate) fn push_to(&self, out: &mut String) {
        self.head.push_to(out);
        if let Some(tail) = self.tail {
            tail.push_to(out);
        }
    }
}

fn piece(entry: Option<&str>, token: char) -> Piece<'_> {
    match entry {
        Some(s) => Piece::Table(s),
        None => Piece::Raw(token),
    }
}

pub(crate) struct Steps<'t, 'c> {
    tables: &'t PreetiTables,
    direction: Direction,
    chars: &'c [char],
    pos: usize,
}

impl<'t, 'c> Steps<'t, 'c> {
    pub(crate) fn new(tables: &'t PreetiTables, direction: Direction, chars: &'c [char]) -> Self {
        Self {
            tables,
            direction,
            chars,
            pos: 0,
        }
    }

    /// Preeti `l` + consonant key → consonant + `ि`.
    fn forward_step(&self, current: char, next: Option<char>) -> Step<'t> {
        let forward = self.tables.forward();
        if let (Some(rule), Some(next)) = (self.tables.rule_for_trigger(current), next) {
            if self.tables.is_consonant_legacy(next) {
                return Step {
                    position: self.pos,
                    len: 2,
                    kind: StepKind::Reordered,
                    head: piece(forward.get(next), next),
                    tail: Some(Piece::Raw(rule.matra)),
                };
            }
        }
        self.single_step(forward.get(current), current)
    }

    /// Consonant + `ि` → Preeti `l` + consonant key.
    fn reverse_step(&self, current: char, next: Option<char>) -> Step<'t> {
        let reverse = self.tables.reverse();
        if is_consonant_unicode(current) {
            if let Some(rule) = next.and_then(|n| self.tables.rule_for_matra(n)) {
                return Step {
                    position: self.pos,
                    len: 2,
                    kind: StepKind::Reordered,
                    head: Piece::Raw(rule.trigger),
                    tail: Some(piece(reverse.get(current), current)),
                };
            }
        }
        self.single_step(reverse.get(current), current)
    }

    fn single_step(&self, entry: Option<&'t str>, current: char) -> Step<'t> {
        let kind = if entry.is_some() {
            StepKind::Mapped
        } else {
            StepKind::Passthrough
        };
        Step {
            position: self.pos,
            len: 1,
            kind,
            head: piece(entry, current),
            tail: None,
        }
    }
}

impl<'t> Iterator for Steps<'t, '_> {
    type Item = Step<'t>;

    fn next(&mut self) -> Option<Step<'t>> {
        let current = *self.chars.get(self.pos)?;
        let next = self.chars.get(self.pos + 1).copied();
        let step = match self.direction {
            Direction::PreetiToUnicode => self.forward_step(current, next),
            Direction::UnicodeToPreeti => self.reverse_step(current, next),
        };
        self.pos += step.len;
        Some(step)
    }
}

/// Convert `text` in `direction` using `tables`.
pub fn convert_with(tables: &PreetiTables, direction: Direction, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let _span =
        debug_span!("convert", direction = direction.label(), chars = chars.len()).entered();

    // Devanagari is 3 bytes per scalar in UTF-8, Preeti keys mostly 1.
    let mut out = String::with_capacity(text.len() * 3);
    let mut reordered = 0usize;
    let mut passthrough = 0usize;
    for step in Steps::new(tables, direction, &chars) {
        match step.kind {
            StepKind::Reordered => reordered += 1,
            StepKind::Passthrough => passthrough += 1,
            StepKind::Mapped => {}
        }
        step.push_to(&mut out);
    }

    debug!(reordered, passthrough, bytes_out = out.len(), "converted");
    out
}

/// Legacy Preeti text → Unicode Devanagari.
pub fn preeti_to_unicode_with(tables: &PreetiTables, text: &str) -> String {
    convert_with(tables, Direction::PreetiToUnicode, text)
}

/// Unicode Devanagari → legacy Preeti text.
pub fn unicode_to_preeti_with(tables: &PreetiTables, text: &str) -> String {
    convert_with(tables, Direction::UnicodeToPreeti, text)
}

/// [`preeti_to_unicode_with`] using the global tables.
pub fn preeti_to_unicode(text: &str) -> String {
    preeti_to_unicode_with(PreetiTables::global(), text)
}

/// [`unicode_to_preeti_with`] using the global tables.
pub fn unicode_to_preeti(text: &str) -> String {
    unicode_to_preeti_with(PreetiTables::global(), text)
}
