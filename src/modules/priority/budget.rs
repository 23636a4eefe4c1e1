use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Extras above this share of income are flagged even when the total fits.
const EXTRAS_CEILING: f64 = 0.49;
/// A total below this share of income counts as a healthy budget.
const HEALTHY_CEILING: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Danger,
    Unsafe,
    Perfect,
    Okay,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Unsafe => "unsafe",
            Self::Perfect => "perfect",
            Self::Okay => "okay",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "danger" => Ok(Self::Danger),
            "unsafe" => Ok(Self::Unsafe),
            "perfect" => Ok(Self::Perfect),
            "okay" => Ok(Self::Okay),
            other => Err(AppError::Validation(format!(
                "unknown verdict '{}', expected danger, unsafe, perfect or okay",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub verdict: Verdict,
    pub message: String,
    pub detail: String,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Grades a monthly budget against income. Rules apply in order and the
/// first match wins.
pub fn evaluate_budget(essentials: f64, extras: f64, income: f64) -> Assessment {
    let total = essentials + extras;

    if total > income {
        Assessment {
            verdict: Verdict::Danger,
            message: "your budget will put you in debt".to_string(),
            detail: format!("total expenses: {}", total),
        }
    } else if total == income {
        Assessment {
            verdict: Verdict::Unsafe,
            message: "your budget will leave you with no savings".to_string(),
            detail: format!("total expenses: {}", total),
        }
    } else if extras > income * EXTRAS_CEILING {
        Assessment {
            verdict: Verdict::Unsafe,
            message: "prioritize savings, extras should never consume half of your income"
                .to_string(),
            detail: format!("budget of non-essentials: {}", extras),
        }
    } else if total < income * HEALTHY_CEILING {
        Assessment {
            verdict: Verdict::Perfect,
            message: format!(
                "congratulations, you have a budget of {} against an income of {}",
                total, income
            ),
            detail: format!("savings after budget: {}", round2(income - total)),
        }
    } else {
        Assessment {
            verdict: Verdict::Okay,
            message: "your budget is within range, but consider increasing your savings"
                .to_string(),
            detail: format!("total expenses: {}", total),
        }
    }
}
