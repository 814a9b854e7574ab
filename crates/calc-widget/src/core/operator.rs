//! Arithmetic operators and the single checked computation step.

use thiserror::Error;

/// Failure of one arithmetic step.
///
/// Division by zero and results outside f64's finite range are the only ways
/// a computation can fail; the state machine collapses either into the same
/// user-visible error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The result overflowed to infinity (or was otherwise non-finite).
    #[error("result is not a finite number")]
    NonFinite,
}

/// The four binary operators the widget supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

impl Operator {
    /// Returns the operator symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parses the symbol characters used by keyboards and button maps.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Returns an explicit error instead of leaking NaN or infinity into the
    /// state; the caller decides how failure is surfaced.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                a / b
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(ArithmeticError::NonFinite)
        }
    }
}
