//! The arithmetic input state machine.
//!
//! One instance per widget, owned by the frontend and mutated through one
//! method per user command. Every method either runs to completion or is a
//! guarded no-op; computation failures never escape as `Err`, they collapse
//! the machine into a terminal error state that only [`Calculator::clear`]
//! leaves.

use serde::Serialize;

use crate::core::format::{format_number, ERROR_DISPLAY};
use crate::core::operator::Operator;

/// Calculator state: accumulated operands, pending operator, and the digit
/// buffer currently being typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Accumulated left-hand operand, once one has been committed.
    first_operand: Option<f64>,
    /// Right-hand operand of the last evaluation, retained so repeated
    /// equals presses replay the same operation.
    second_operand: Option<f64>,
    /// Pending operator.
    operator: Option<Operator>,
    /// The operand being typed. Never empty; `"Error"` only in error state.
    input: String,
    /// Set right after an equals computation, cleared by new entry.
    has_evaluated: bool,
    /// Error flag; holds exactly when `input` is the error literal.
    error: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            first_operand: None,
            second_operand: None,
            operator: None,
            input: "0".to_owned(),
            has_evaluated: false,
            error: false,
        }
    }
}

impl Calculator {
    /// Creates a calculator in its initial state (`input == "0"`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== command surface =====

    /// Appends a digit (0-9) to the operand being typed.
    ///
    /// Entry after an error or a completed evaluation starts a fresh
    /// expression. Digits above 9 are a guarded no-op; the keypad and key
    /// maps can only produce 0-9.
    pub fn press_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        self.reset_if_needed();
        if self.input == "0" {
            self.input = ch.to_string();
        } else if self.input == "-0" {
            self.input = format!("-{ch}");
        } else {
            self.input.push(ch);
        }
    }

    /// Appends the decimal point. At most one per number.
    pub fn press_decimal(&mut self) {
        self.reset_if_needed();
        if !self.input.contains('.') {
            self.input.push('.');
        }
    }

    /// Negates the operand being typed. Zero cannot be negated.
    pub fn toggle_sign(&mut self) {
        if self.is_error() || self.input == "0" || self.input == "0." {
            return;
        }
        if let Some(stripped) = self.input.strip_prefix('-') {
            self.input = stripped.to_owned();
        } else {
            self.input.insert(0, '-');
        }
    }

    /// Drops the last typed character.
    ///
    /// A just-computed result cannot be edited this way. A lone digit, or a
    /// sign with a single digit, collapses back to `"0"`.
    pub fn backspace(&mut self) {
        if self.is_error() || self.has_evaluated {
            return;
        }
        let signed_single = self.input.len() == 2 && self.input.starts_with('-');
        if self.input.len() <= 1 || signed_single {
            self.input = "0".to_owned();
        } else {
            self.input.pop();
            if self.input == "-" {
                self.input = "0".to_owned();
            }
        }
    }

    /// Commits the typed operand against the pending operator, or replaces
    /// the operator when nothing new was typed.
    ///
    /// After an equals press this is the one path that chains: the previous
    /// result becomes the left operand of the next expression.
    pub fn select_operator(&mut self, op: Operator) {
        if self.is_error() {
            return;
        }
        let current = self.current_number();

        if self.has_evaluated {
            self.has_evaluated = false;
            self.second_operand = None;
        }

        let Some(first) = self.first_operand else {
            self.first_operand = Some(current);
            self.operator = Some(op);
            self.input = "0".to_owned();
            return;
        };

        match self.operator {
            // A number was typed after the pending operator: fold it in
            // before accepting the new operator.
            Some(pending) if self.input != "0" => match pending.apply(first, current) {
                Ok(result) => {
                    self.first_operand = Some(result);
                    self.second_operand = None;
                    self.operator = Some(op);
                    self.input = "0".to_owned();
                }
                Err(_) => self.set_error(),
            },
            // Switching operators before typing the next operand.
            _ => self.operator = Some(op),
        }
    }

    /// Evaluates the pending operation (the equals key).
    ///
    /// Pressing equals again replays the retained right-hand operand, so
    /// `5 + 3 =` followed by `=` keeps adding 3.
    pub fn evaluate(&mut self) {
        if self.is_error() {
            return;
        }
        let (Some(op), Some(first)) = (self.operator, self.first_operand) else {
            return;
        };

        let current = self.current_number();
        let right = if self.has_evaluated {
            self.second_operand.unwrap_or(current)
        } else {
            current
        };

        match op.apply(first, right) {
            Ok(result) => {
                self.second_operand = Some(right);
                self.first_operand = Some(result);
                self.input = format_number(result);
                self.has_evaluated = true;
            }
            Err(_) => self.set_error(),
        }
    }

    /// Resets every field to its default, regardless of current state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // ===== internal transitions =====

    /// Entry reset policy: typing after an error or a completed evaluation
    /// begins a fresh expression, discarding the prior result.
    fn reset_if_needed(&mut self) {
        if self.is_error() || self.has_evaluated {
            *self = Self::default();
        }
    }

    /// Enters the terminal-until-clear error state.
    fn set_error(&mut self) {
        self.input = ERROR_DISPLAY.to_owned();
        self.error = true;
        self.first_operand = None;
        self.second_operand = None;
        self.operator = None;
    }

    /// Numeric value of the input buffer. Transient edit states (`"."`,
    /// `"-."`, a bare sign) count as zero.
    fn current_number(&self) -> f64 {
        match self.input.as_str() {
            "." | "-." => 0.0,
            other => other.parse().unwrap_or(0.0),
        }
    }

    // ===== projections =====

    /// The primary result line: the raw input buffer, or the error literal.
    #[must_use]
    pub fn display_result(&self) -> &str {
        &self.input
    }

    /// Expression tokens: committed first operand, operator symbol, and the
    /// pending second operand (only while no evaluation has completed, so
    /// the result line is not duplicated).
    #[must_use]
    pub fn expression_tokens(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(first) = self.first_operand {
            parts.push(format_number(first));
        }
        if let Some(op) = self.operator {
            parts.push(op.symbol().to_owned());
        }
        if !self.has_evaluated {
            if let Some(second) = self.second_operand {
                parts.push(format_number(second));
            }
        }
        parts
    }

    /// Expression tokens joined with single spaces.
    #[must_use]
    pub fn display_expression(&self) -> String {
        self.expression_tokens().join(" ")
    }

    /// Read-only snapshot handed to the presentation layer after each call.
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            expression: self.expression_tokens(),
            result: self.input.clone(),
        }
    }

    // ===== accessors =====

    /// Whether the machine is in the terminal error state.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error || self.input == ERROR_DISPLAY
    }

    /// Whether the displayed value is a completed result.
    #[must_use]
    pub fn has_evaluated(&self) -> bool {
        self.has_evaluated
    }

    /// The committed left-hand operand, if any.
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// The retained right-hand operand, if any.
    #[must_use]
    pub fn second_operand(&self) -> Option<f64> {
        self.second_operand
    }

    /// The pending operator, if any.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Overwrites the input buffer. Test hook for transient edit states that
    /// the public surface cannot reach directly.
    #[cfg(test)]
    fn set_input(&mut self, input: &str) {
        self.input = input.to_owned();
    }
}

/// Read-only display snapshot: expression tokens plus the result line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    /// Ordered expression tokens; the presentation layer picks the joiner.
    pub expression: Vec<String>,
    /// The primary result line (raw input buffer or `"Error"`).
    pub result: String,
}

impl DisplaySnapshot {
    /// Serializes the snapshot for frontend interop.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
