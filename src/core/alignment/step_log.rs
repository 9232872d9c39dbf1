//! Per-cell fill log for step-by-step replay of the DP table.
//!
//! Each step stores only the delta written to the table. Full table
//! snapshots are rebuilt on demand from the boundary table plus a prefix of
//! the log.

use super::dp_table::DpTable;
use super::types::{CellPos, EditKind};

/// One interior cell decision, in row-major fill order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStep<T> {
    pub pos: CellPos,
    pub kind: EditKind,
    /// `source[i-1]`
    pub source_elem: T,
    /// `target[j-1]`
    pub target_elem: T,
    /// Value written to `dp[i][j]`
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLog<T> {
    source_len: usize,
    target_len: usize,
    steps: Vec<CellStep<T>>,
}

impl<T> StepLog<T> {
    pub(crate) fn with_capacity(source_len: usize, target_len: usize) -> Self {
        StepLog {
            source_len,
            target_len,
            steps: Vec::with_capacity(source_len * target_len),
        }
    }

    pub(crate) fn push(&mut self, step: CellStep<T>) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[CellStep<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellStep<T>> {
        self.steps.iter()
    }

    /// Table before any interior cell is filled
    pub fn initial_table(&self) -> DpTable {
        DpTable::with_boundaries(self.source_len, self.target_len)
    }

    /// Table as it stood right after step `k` was written, or None when `k`
    /// is past the end of the log. Cells not yet visited read 0.
    pub fn snapshot(&self, k: usize) -> Option<DpTable> {
        if k >= self.steps.len() {
            return None;
        }

        let mut table = self.initial_table();
        for step in &self.steps[..=k] {
            table.set(step.pos.i, step.pos.j, step.value);
        }
        Some(table)
    }
}

impl<'a, T> IntoIterator for &'a StepLog<T> {
    type Item = &'a CellStep<T>;
    type IntoIter = std::slice::Iter<'a, CellStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
