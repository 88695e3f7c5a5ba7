//! Criterion enum representing the five fixed decision criteria.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a lower or a higher raw value is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Lower raw values are better.
    Cost,
    /// Higher raw values are better.
    Benefit,
}

/// The five criteria every alternative is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criterion {
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl Criterion {
    /// Number of criteria.
    pub const COUNT: usize = 5;

    /// Returns all criteria in canonical order.
    pub fn all() -> &'static [Criterion; Criterion::COUNT] {
        &[
            Criterion::C1,
            Criterion::C2,
            Criterion::C3,
            Criterion::C4,
            Criterion::C5,
        ]
    }

    /// Returns the 0-based index of this criterion in the canonical order.
    pub fn index(&self) -> usize {
        match self {
            Criterion::C1 => 0,
            Criterion::C2 => 1,
            Criterion::C3 => 2,
            Criterion::C4 => 3,
            Criterion::C5 => 4,
        }
    }

    /// Returns the short code ("C1".."C5").
    pub fn code(&self) -> &'static str {
        match self {
            Criterion::C1 => "C1",
            Criterion::C2 => "C2",
            Criterion::C3 => "C3",
            Criterion::C4 => "C4",
            Criterion::C5 => "C5",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Criterion::C1 => "MDR Fee",
            Criterion::C2 => "Monthly Fee",
            Criterion::C3 => "Channel Count",
            Criterion::C4 => "Settlement Speed",
            Criterion::C5 => "Integration Ease",
        }
    }

    /// Returns the preference direction of this criterion.
    pub fn direction(&self) -> Direction {
        match self {
            Criterion::C1 | Criterion::C2 => Direction::Cost,
            Criterion::C3 | Criterion::C4 | Criterion::C5 => Direction::Benefit,
        }
    }

    /// Returns the inclusive raw-value bounds, if the criterion is on a bounded scale.
    ///
    /// C1..C3 are unbounded non-negative amounts; C4 and C5 use a 1-4 scale.
    pub fn scale_bounds(&self) -> Option<(u64, u64)> {
        match self {
            Criterion::C4 | Criterion::C5 => Some((1, 4)),
            _ => None,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.display_name())
    }
}
