//! Sweep report - what a mutating sweep did

use serde::Serialize;
use std::fmt;

/// Kind of balance sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepKind {
    FlatAdd,
    Rewards,
}

impl SweepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FlatAdd => "flat_add",
            Self::Rewards => "rewards",
        }
    }
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tally of a completed sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub kind: SweepKind,
    /// Records written (every visited record is written)
    pub visited: u64,
    /// Records whose numeric value changed
    pub changed: u64,
    /// Records held at the balance cap
    pub capped: u64,
}

impl SweepReport {
    /// Start an empty report
    pub fn new(kind: SweepKind) -> Self {
        Self {
            kind,
            visited: 0,
            changed: 0,
            capped: 0,
        }
    }

    /// Account for one written record
    pub fn record(&mut self, before: f64, after: f64, capped: bool) {
        self.visited += 1;
        if before != after {
            self.changed += 1;
        }
        if capped {
            self.capped += 1;
        }
    }
}
