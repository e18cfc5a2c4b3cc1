//! Lazy truth-table enumeration

use crate::formula::Assignment;
use std::sync::Arc;

/// Iterator over every assignment of a list of variables
///
/// Row `i` assigns bit `j` of `i`, most significant bit first, to the `j`-th variable. An empty
/// variable list yields no rows at all.
///
/// # Examples
///
/// ```
/// use aris_logic::argument::TruthTable;
/// use std::sync::Arc;
///
/// let rows: Vec<_> = TruthTable::new(vec![Arc::from("P"), Arc::from("Q")])
///     .map(|row| (row["P"], row["Q"]))
///     .collect();
/// assert_eq!(rows, [(false, false), (false, true), (true, false), (true, true)]);
/// ```
#[derive(Debug, Clone)]
pub struct TruthTable {
    variables: Vec<Arc<str>>,
    bits: Vec<bool>,
    exhausted: bool,
}

impl TruthTable {
    /// A table over `variables`, in the given order
    pub fn new(variables: Vec<Arc<str>>) -> Self {
        let exhausted = variables.is_empty();
        TruthTable {
            bits: vec![false; variables.len()],
            variables,
            exhausted,
        }
    }

    /// The variables of the table, most significant first
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Total number of rows, or `None` if it does not fit in a `usize`
    pub fn row_count(&self) -> Option<usize> {
        match self.variables.len() {
            0 => Some(0),
            n => u32::try_from(n).ok().and_then(|n| 1usize.checked_shl(n)),
        }
    }

    /// Advance the bits to the next row, flagging the end after the all-true row
    fn increment(&mut self) {
        for bit in self.bits.iter_mut().rev() {
            *bit = !*bit;
            if *bit {
                return;
            }
        }
        self.exhausted = true;
    }
}

impl Iterator for TruthTable {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let row = self
            .variables
            .iter()
            .cloned()
            .zip(self.bits.iter().copied())
            .collect();
        self.increment();
        Some(row)
    }
}
