//! Arithmetic evaluated for a calculation request.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("unsupported operation '{0}', expected one of add, minus, times, divide, sqrt")]
    UnsupportedOperation(String),

    #[error("'{0}' is not a number")]
    InvalidOperand(String),

    #[error("at least one number is required")]
    NoOperands,

    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot take the square root of a negative number")]
    NegativeSquareRoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Minus,
    Times,
    Divide,
    Sqrt,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Minus => "minus",
            Self::Times => "times",
            Self::Divide => "divide",
            Self::Sqrt => "sqrt",
        }
    }

    /// Folds the operands left to right. `sqrt` only looks at the first one.
    pub fn apply(&self, numbers: &[f64]) -> Result<f64, CalculationError> {
        let (&first, rest) = numbers.split_first().ok_or(CalculationError::NoOperands)?;

        match self {
            Self::Add => Ok(rest.iter().fold(first, |acc, n| acc + n)),
            Self::Minus => Ok(rest.iter().fold(first, |acc, n| acc - n)),
            Self::Times => Ok(rest.iter().fold(first, |acc, n| acc * n)),
            Self::Divide => rest.iter().try_fold(first, |acc, &n| {
                if n == 0.0 {
                    Err(CalculationError::DivisionByZero)
                } else {
                    Ok(acc / n)
                }
            }),
            Self::Sqrt if first < 0.0 => Err(CalculationError::NegativeSquareRoot),
            Self::Sqrt => Ok(first.sqrt()),
        }
    }
}

impl FromStr for Operation {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "minus" => Ok(Self::Minus),
            "times" => Ok(Self::Times),
            "divide" => Ok(Self::Divide),
            "sqrt" => Ok(Self::Sqrt),
            _ => Err(CalculationError::UnsupportedOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `"1, 2.5,3"` into its operands.
pub fn parse_numbers(raw: &str) -> Result<Vec<f64>, CalculationError> {
    if raw.trim().is_empty() {
        return Err(CalculationError::NoOperands);
    }

    raw.split(',')
        .map(str::trim)
        .map(|part| {
            part.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| CalculationError::InvalidOperand(part.to_string()))
        })
        .collect()
}

/// Canonical comma-joined form stored next to the result.
pub fn normalise(numbers: &[f64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
