use serde::Serialize;
use tracing::debug_span;

use crate::table::PreetiTables;

use super::{Direction, StepKind, Steps};

/// Step-by-step trace of one conversion.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub direction: Direction,
    pub input: String,
    pub output: String,
    pub steps: Vec<ExplainStep>,
}

/// One window iteration: the tokens it consumed and the text it emitted.
#[derive(Debug, Serialize)]
pub struct ExplainStep {
    /// Char index of the first consumed token.
    pub position: usize,
    pub input: String,
    pub output: String,
    pub kind: StepKind,
}

impl ExplainResult {
    pub fn reordered_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind == StepKind::Reordered)
            .count()
    }

    pub fn passthrough_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.kind == StepKind::Passthrough)
            .count()
    }
}

pub fn explain(tables: &PreetiTables, direction: Direction, text: &str) -> ExplainResult {
    let chars: Vec<char> = text.chars().collect();
    let _span =
        debug_span!("explain", direction = direction.label(), chars = chars.len()).entered();

    let mut output = String::new();
    let mut steps = Vec::new();
    for step in Steps::new(tables, direction, &chars) {
        let mut out = String::new();
        step.push_to(&mut out);
        output.push_str(&out);
        steps.push(ExplainStep {
            position: step.position,
            input: chars[step.position..step.position + step.len].iter().collect(),
            output: out,
            kind: step.kind,
        });
    }

    ExplainResult {
        direction,
        input: text.to_string(),
        output,
        steps,
    }
}

pub fn explain_forward(tables: &PreetiTables, text: &str) -> ExplainResult {
    explain(tables, Direction::PreetiToUnicode, text)
}

pub fn explain_reverse(tables: &PreetiTables, text: &str) -> ExplainResult {
    explain(tables, Direction::UnicodeToPreeti, text)
}

fn pad(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} \"{}\" ({} steps, {} reordered, {} passthrough) ===\n",
        result.direction.label(),
        result.input,
        result.steps.len(),
        result.reordered_count(),
        result.passthrough_count(),
    ));

    if result.steps.is_empty() {
        out.push_str("\nEmpty input.\n");
        return out;
    }

    for step in &result.steps {
        let kind = match step.kind {
            StepKind::Mapped => "",
            StepKind::Passthrough => "  (passthrough)",
            StepKind::Reordered => "  (reordered)",
        };
        // Show whitespace and control tokens by their escape form.
        let input = format!("{:?}", step.input);
        let output = format!("{:?}", step.output);
        out.push_str(&format!(
            "  [{:>4}] {} -> {}{}\n",
            step.position,
            pad(&input, 8),
            pad(&output, 10),
            kind,
        ));
    }

    out.push_str(&format!("\n  Output: {}\n", result.output));
    out
}
