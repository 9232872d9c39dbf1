//! Fault taxonomy for the edit-distance core.
//!
//! None of these are produced by well-formed sequences: every variant marks a
//! broken contract between caller and core, so nothing here is retried.

use crate::core::alignment::types::{CellPos, EditKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Traceback found no predecessor consistent with the recurrence.
    #[error("inconsistent DP table: no valid predecessor at cell ({row},{col})")]
    InconsistentTable { row: usize, col: usize },

    /// Traceback reached the origin but its cost disagrees with `dp[m][n]`.
    #[error("inconsistent DP table: script cost {actual} but terminal cell holds {expected}")]
    CostMismatch { expected: usize, actual: usize },

    /// Table dimensions do not fit the sequences, or rows are ragged.
    #[error(
        "DP table shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}"
    )]
    TableShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Script position does not fit the evolving buffer.
    #[error("{kind} position {index} out of range for buffer of length {len}")]
    PositionOutOfRange {
        kind: EditKind,
        index: isize,
        len: usize,
    },

    /// Replace or insert without a target element, or replace or delete
    /// without a source element.
    #[error("{kind} at {pos} is missing its element")]
    MalformedOperation { kind: EditKind, pos: CellPos },

    /// Caller-side length guard from `ReplayOpt::max_input_len`.
    #[error("input of length {len} exceeds the configured maximum of {max}")]
    InputTooLong { len: usize, max: usize },
}

impl EditError {
    /// True for internal-consistency faults, i.e. a corrupted or foreign DP
    /// table rather than a bad script or an oversized input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            EditError::InconsistentTable { .. }
                | EditError::CostMismatch { .. }
                | EditError::TableShape { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = EditError::InconsistentTable { row: 2, col: 3 };
        assert_eq!(
            e.to_string(),
            "inconsistent DP table: no valid predecessor at cell (2,3)"
        );

        let e = EditError::PositionOutOfRange {
            kind: EditKind::Delete,
            index: 4,
            len: 4,
        };
        assert_eq!(
            e.to_string(),
            "delete position 4 out of range for buffer of length 4"
        );
    }

    #[test]
    fn test_internal_classification() {
        assert!(EditError::InconsistentTable { row: 1, col: 0 }.is_internal());
        assert!(
            EditError::TableShape {
                expected_rows: 2,
                expected_cols: 2,
                rows: 1,
                cols: 2
            }
            .is_internal()
        );
        assert!(!EditError::InputTooLong { len: 5, max: 4 }.is_internal());
    }
}
