//! End-of-run summary of the interpreter tables

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Counts of true and false results in one table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub true_count: usize,
    pub false_count: usize,
}

impl Tally {
    pub(super) fn of(table: &HashMap<Arc<str>, bool>) -> Self {
        let true_count = table.values().filter(|value| **value).count();
        Tally {
            true_count,
            false_count: table.len() - true_count,
        }
    }

    /// Total number of entries
    pub fn total(&self) -> usize {
        self.true_count + self.false_count
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} true, {} false)",
            self.total(),
            self.true_count,
            self.false_count
        )
    }
}

/// What a run of the interpreter recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Statements executed
    pub statements: usize,
    /// Atomic propositions with an assigned value
    pub values: usize,
    /// Arguments defined
    pub arguments: usize,
    /// Results of `assert`
    pub assertions: Tally,
    /// Results of `validate`
    pub validations: Tally,
    /// Results of `valuate`
    pub valuations: Tally,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "statements:  {}", self.statements)?;
        writeln!(f, "values:      {}", self.values)?;
        writeln!(f, "arguments:   {}", self.arguments)?;
        writeln!(f, "assertions:  {}", self.assertions)?;
        writeln!(f, "validations: {}", self.validations)?;
        write!(f, "valuations:  {}", self.valuations)
    }
}
