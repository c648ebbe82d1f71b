//! Budget calculator tool — sums a comma-separated list of expenses.
//!
//! Each entry is split on whitespace into words and numbers. The first
//! number is the entry's cost; the label is the first token when that token
//! is a word, otherwise a placeholder. A number glued to a word (`机票2500`)
//! is only used when no whole token is a number. Entries without a number
//! are reported as skipped and left out of the total. Every outcome, including failure, is
//! rendered to a string at the tool boundary.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use tripdesk_core::error::ToolError;
use tripdesk_core::tool::{Tool, ToolResult, string_argument};

pub const DEFAULT_PLACEHOLDER: &str = "item";

pub struct BudgetCalculatorTool {
    placeholder_label: String,
}

impl BudgetCalculatorTool {
    pub fn new(placeholder_label: impl Into<String>) -> Self {
        Self {
            placeholder_label: placeholder_label.into(),
        }
    }
}

impl Default for BudgetCalculatorTool {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

#[async_trait]
impl Tool for BudgetCalculatorTool {
    fn name(&self) -> &str {
        "budget_calculator"
    }

    fn description(&self) -> &str {
        "Add up travel expenses. Input is a comma-separated list such as '机票2500, 酒店3000' or 'hotel 300, taxi 45.50'."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "expenses": {
                    "type": "string",
                    "description": "Comma-separated expense entries, each with a name and an amount"
                }
            },
            "required": ["expenses"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let input = string_argument(&arguments, "expenses")?;
        let result = calculate(input, &self.placeholder_label);
        let output = render(&result);

        match result {
            Ok(outcome) => Ok(ToolResult {
                call_id: String::new(),
                success: true,
                output,
                data: serde_json::to_value(&outcome).ok(),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Budget calculation failed");
                Ok(ToolResult {
                    call_id: String::new(),
                    success: false,
                    output,
                    data: None,
                })
            }
        }
    }
}

// ── Tokenizer ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Word(String),
}

/// Split an entry on whitespace and tag each whole token.
///
/// A token is a `Number` when dropping at most one `.` leaves only digits.
/// Full-width digits (`２５００`) count and read as their ASCII values.
pub fn tokenize(entry: &str) -> Vec<Token> {
    entry.split_whitespace().map(classify).collect()
}

fn classify(token: &str) -> Token {
    match parse_decimal(token) {
        Some(value) => Token::Number(value),
        None => Token::Word(token.to_string()),
    }
}

/// Read `text` as a non-negative decimal.
fn parse_decimal(text: &str) -> Option<f64> {
    let mut normalized = String::with_capacity(text.len());
    let mut dots = 0;
    for c in text.chars() {
        if is_decimal_point(c) {
            dots += 1;
            normalized.push('.');
        } else {
            normalized.push(ascii_digit(c)?);
        }
    }
    if dots > 1 || normalized.len() == dots {
        return None;
    }
    normalized.parse().ok()
}

fn is_decimal_point(c: char) -> bool {
    c == '.' || c == '．'
}

/// ASCII equivalent of an ASCII or full-width digit.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let offset = (c as u32).checked_sub('０' as u32).filter(|d| *d < 10)?;
    char::from_digit(offset, 10)
}

/// Find the first number glued inside a word, as in `机票2500`.
///
/// Returns the text before the number and its value. A run right after a
/// minus sign is a negative amount and is never taken.
fn split_glued(word: &str) -> Option<(&str, f64)> {
    let mut start: Option<usize> = None;

    for (i, c) in word.char_indices().chain(std::iter::once((word.len(), ' '))) {
        let numeric = is_decimal_point(c) || ascii_digit(c).is_some();
        match (start, numeric) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                let prefix = &word[..s];
                if !prefix.ends_with(['-', '－']) {
                    if let Some(value) = parse_decimal(&word[s..i]) {
                        return Some((prefix, value));
                    }
                }
                start = None;
            }
            _ => {}
        }
    }

    None
}

/// Pick `(label, cost)` from an entry's tokens.
///
/// The first whole `Number` wins and the label is the first token if it is a
/// word. Only when no whole token is a number are glued numbers considered;
/// the label is then the text before the number when it sits in the first
/// token.
fn select_cost(tokens: &[Token]) -> Option<(Option<&str>, f64)> {
    let first_word = match tokens.first() {
        Some(Token::Word(w)) => Some(w.as_str()),
        _ => None,
    };

    let whole = tokens.iter().find_map(|t| match t {
        Token::Number(n) => Some(*n),
        Token::Word(_) => None,
    });
    if let Some(cost) = whole {
        return Some((first_word, cost));
    }

    tokens.iter().enumerate().find_map(|(i, t)| {
        let Token::Word(w) = t else { return None };
        let (prefix, cost) = split_glued(w)?;
        let label = if i == 0 {
            Some(prefix).filter(|p| !p.is_empty())
        } else {
            first_word
        };
        Some((label, cost))
    })
}

// ── Entries and outcome ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetLine {
    Parsed { label: String, cost: f64 },
    Unparsed { raw: String },
}

impl fmt::Display for BudgetLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetLine::Parsed { label, cost } => write!(f, "{label}: {cost:.2}"),
            BudgetLine::Unparsed { raw } => write!(f, "could not parse '{raw}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetOutcome {
    Summary { total: f64, lines: Vec<BudgetLine> },
    NoValidItems,
}

impl BudgetOutcome {
    pub fn total(&self) -> Option<f64> {
        match self {
            BudgetOutcome::Summary { total, .. } => Some(*total),
            BudgetOutcome::NoValidItems => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BudgetError {
    #[error("total is not a finite number (an amount is too large)")]
    NonFiniteTotal,
}

/// Parse one comma-delimited entry. Blank entries yield `None`.
pub fn parse_entry(raw: &str, placeholder: &str) -> Option<BudgetLine> {
    let entry = raw.trim();
    if entry.is_empty() {
        return None;
    }

    let tokens = tokenize(entry);

    Some(match select_cost(&tokens) {
        Some((label, cost)) => BudgetLine::Parsed {
            label: label.unwrap_or(placeholder).to_string(),
            cost,
        },
        None => BudgetLine::Unparsed {
            raw: entry.to_string(),
        },
    })
}

/// Parse and total every entry in `input`.
pub fn calculate(input: &str, placeholder: &str) -> Result<BudgetOutcome, BudgetError> {
    let lines: Vec<BudgetLine> = input
        .split(',')
        .filter_map(|raw| parse_entry(raw, placeholder))
        .collect();

    let costs: Vec<f64> = lines
        .iter()
        .filter_map(|line| match line {
            BudgetLine::Parsed { cost, .. } => Some(*cost),
            BudgetLine::Unparsed { .. } => None,
        })
        .collect();

    if costs.is_empty() {
        return Ok(BudgetOutcome::NoValidItems);
    }

    let total: f64 = costs.iter().sum();
    if !total.is_finite() {
        return Err(BudgetError::NonFiniteTotal);
    }

    Ok(BudgetOutcome::Summary { total, lines })
}

/// Render a calculation result for the caller.
pub fn render(result: &Result<BudgetOutcome, BudgetError>) -> String {
    match result {
        Ok(BudgetOutcome::Summary { total, lines }) => {
            let mut out: Vec<String> = lines.iter().map(ToString::to_string).collect();
            out.push(format!("Total budget: {total:.2}"));
            out.join("\n")
        }
        Ok(BudgetOutcome::NoValidItems) => "No valid expense items found.".to_string(),
        Err(e) => format!("Error calculating budget: {e}"),
    }
}

/// Calculate and render with the default placeholder label.
pub fn calculate_budget(input: &str) -> String {
    render(&calculate(input, DEFAULT_PLACEHOLDER))
}

// ── Tests ─────────────────────────────────────────────────────────────────
