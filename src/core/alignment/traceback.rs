//! Backtracking from `dp[m][n]` to the origin to recover one optimal edit
//! script.
//!
//! Predecessors are tried in a fixed order: match, replace, insert, delete.
//! This mirrors the forward classification in `edit_distance.rs` and picks
//! exactly one path when several optimal paths exist.

use super::dp_table::DpTable;
use super::types::{CellPos, EditOperation, EditScript};
use crate::core::error::{EditError, Result};

/// `cur == prev + 1` without overflowing on a tampered table
#[inline(always)]
fn costs_one_more(cur: usize, prev: usize) -> bool {
    prev.checked_add(1) == Some(cur)
}

/// Recover the edit script for `source` -> `target` from a completed table.
///
/// The returned script reads first-applied to last-applied and its cost
/// equals `table.distance()`.
///
/// # Errors
/// * [`EditError::TableShape`] if the table is not `(m+1) x (n+1)`
/// * [`EditError::InconsistentTable`] if some cell has no predecessor that
///   satisfies the recurrence
/// * [`EditError::CostMismatch`] if the walk reaches the origin but the
///   script cost disagrees with the terminal cell
pub fn reconstruct_alignment<T: PartialEq + Clone>(
    source: &[T],
    target: &[T],
    table: &DpTable,
) -> Result<EditScript<T>> {
    let m = source.len();
    let n = target.len();
    table.check_shape(m, n)?;

    let mut ops = Vec::with_capacity(m + n);
    let mut i = m;
    let mut j = n;

    while i > 0 || j > 0 {
        let cur = table.get(i, j);

        if i > 0 && j > 0 && source[i - 1] == target[j - 1] {
            ops.push(EditOperation::matched(
                source[i - 1].clone(),
                target[j - 1].clone(),
                CellPos::new(i - 1, j - 1),
            ));
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && costs_one_more(cur, table.get(i - 1, j - 1)) {
            ops.push(EditOperation::replace(
                source[i - 1].clone(),
                target[j - 1].clone(),
                CellPos::new(i - 1, j - 1),
            ));
            i -= 1;
            j -= 1;
        } else if j > 0 && costs_one_more(cur, table.get(i, j - 1)) {
            ops.push(EditOperation::insert(
                target[j - 1].clone(),
                CellPos::new(i, j - 1),
            ));
            j -= 1;
        } else if i > 0 && costs_one_more(cur, table.get(i - 1, j)) {
            ops.push(EditOperation::delete(
                source[i - 1].clone(),
                CellPos::new(i - 1, j),
            ));
            i -= 1;
        } else {
            log::error!("Traceback stuck at cell ({i},{j}) with value {cur} (table {m}x{n})");
            return Err(EditError::InconsistentTable { row: i, col: j });
        }
    }

    // Emitted end-to-start
    ops.reverse();
    let script = EditScript::new(ops);

    let expected = table.distance();
    let actual = script.cost();
    if actual != expected {
        log::error!("Traceback cost {actual} disagrees with terminal cell {expected}");
        return Err(EditError::CostMismatch { expected, actual });
    }

    log::debug!(
        "Traceback {}x{}: {} ops, cost {}",
        m,
        n,
        script.len(),
        actual
    );
    Ok(script)
}
