//! Qualitative ratings and per-category score records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::round_to;

/// Qualitative label for a 0-10 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    Awful,
    Terrible,
    Bad,
    Poor,
    Mediocre,
    Decent,
    Good,
    Great,
    Amazing,
    Godly,
}

impl Rating {
    #[must_use]
    pub fn from_score(score: f64) -> Rating {
        match score {
            s if s >= 9.0 => Rating::Godly,
            s if s >= 8.0 => Rating::Amazing,
            s if s >= 7.0 => Rating::Great,
            s if s >= 6.0 => Rating::Good,
            s if s >= 5.0 => Rating::Decent,
            s if s >= 4.0 => Rating::Mediocre,
            s if s >= 3.0 => Rating::Poor,
            s if s >= 2.0 => Rating::Bad,
            s if s >= 1.0 => Rating::Terrible,
            _ => Rating::Awful,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rating::Awful => "Awful",
            Rating::Terrible => "Terrible",
            Rating::Bad => "Bad",
            Rating::Poor => "Poor",
            Rating::Mediocre => "Mediocre",
            Rating::Decent => "Decent",
            Rating::Good => "Good",
            Rating::Great => "Great",
            Rating::Amazing => "Amazing",
            Rating::Godly => "Godly",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Star count (0-3) for a 0-10 score.
#[must_use]
pub fn stars_for(score: f64) -> u8 {
    match score {
        s if s >= 8.0 => 3,
        s if s >= 5.0 => 2,
        s if s >= 2.0 => 1,
        _ => 0,
    }
}

/// One category's result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Score in [0, 10], one decimal place.
    pub score: f64,
    pub stars: u8,
    pub rating: Rating,
    pub assessment: String,
}

impl CategoryScore {
    /// Clamp to [0, 10] and round to one decimal. NaN becomes 0.
    #[must_use]
    pub fn new(raw: f64, assessment: impl Into<String>) -> Self {
        let score = if raw.is_nan() { 0.0 } else { round_to(raw.clamp(0.0, 10.0), 1) };
        Self {
            score,
            stars: stars_for(score),
            rating: Rating::from_score(score),
            assessment: assessment.into(),
        }
    }
}
