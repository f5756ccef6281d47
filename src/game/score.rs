use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A non-negative point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Score(pub u64);

impl Score {
    pub const ZERO: Score = Score(0);

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, other: Score) -> Score {
        Score(self.0 + other.0)
    }
}

impl Sub for Score {
    type Output = Score;

    /// Saturates at zero.
    fn sub(self, other: Score) -> Score {
        Score(self.0.saturating_sub(other.0))
    }
}

impl From<u64> for Score {
    fn from(value: u64) -> Self {
        Score(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}

/// Best score seen across sessions, with the time it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub value: Score,
    pub achieved_at: DateTime<Utc>,
}

impl HighScore {
    pub fn create(score: Score) -> Self {
        HighScore {
            value: score,
            achieved_at: Utc::now(),
        }
    }
}
