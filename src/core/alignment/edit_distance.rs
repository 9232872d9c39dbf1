//! Unit-cost edit distance (Levenshtein) table construction.
//!
//! Fills the full `(m+1) x (n+1)` table in row-major order and classifies
//! every interior cell with the operation that produced it. At equal cost
//! the classification prefers replace, then insert, then delete; the
//! traceback in `traceback.rs` walks with the same preference so fixtures
//! stay reproducible.

use super::dp_table::DpTable;
use super::step_log::{CellStep, StepLog};
use super::types::{CellPos, EditKind};

/// Output of [`compute_distance`]
#[derive(Debug, Clone)]
pub struct DistanceResult<T> {
    pub distance: usize,
    pub table: DpTable,
    /// Present only when tracing was requested
    pub steps: Option<StepLog<T>>,
}

/// Classify one interior cell from its three predecessors.
///
/// * `diag` - `dp[i-1][j-1]`
/// * `up` - `dp[i-1][j]` (delete predecessor)
/// * `left` - `dp[i][j-1]` (insert predecessor)
/// * `equal` - `source[i-1] == target[j-1]`
///
/// Returns the cell value and the operation that produced it.
#[inline(always)]
pub fn classify_cell(diag: usize, up: usize, left: usize, equal: bool) -> (usize, EditKind) {
    if equal {
        return (diag, EditKind::Match);
    }

    let insert_cost = left + 1;
    let delete_cost = up + 1;
    let replace_cost = diag + 1;
    let best = insert_cost.min(delete_cost).min(replace_cost);

    let kind = if best == replace_cost {
        EditKind::Replace
    } else if best == insert_cost {
        EditKind::Insert
    } else {
        EditKind::Delete
    };
    (best, kind)
}

/// Build the edit-distance table for `source` -> `target`.
///
/// With `trace` set, every interior cell decision is also recorded in a
/// [`StepLog`]; tracing never changes the distance or the table.
pub fn compute_distance<T: PartialEq + Clone>(
    source: &[T],
    target: &[T],
    trace: bool,
) -> DistanceResult<T> {
    let m = source.len();
    let n = target.len();

    let mut table = DpTable::with_boundaries(m, n);
    let mut steps = trace.then(|| StepLog::with_capacity(m, n));
    let trace_cells = log::log_enabled!(log::Level::Trace);

    for i in 1..=m {
        let s = &source[i - 1];
        for j in 1..=n {
            let t = &target[j - 1];
            let (value, kind) = classify_cell(
                table.get(i - 1, j - 1),
                table.get(i - 1, j),
                table.get(i, j - 1),
                s == t,
            );
            table.set(i, j, value);

            if trace_cells {
                log::trace!("cell ({i},{j}) = {value} [{kind}]");
            }

            if let Some(step_log) = steps.as_mut() {
                step_log.push(CellStep {
                    pos: CellPos::new(i, j),
                    kind,
                    source_elem: s.clone(),
                    target_elem: t.clone(),
                    value,
                });
            }
        }
    }

    let distance = table.distance();
    log::debug!("edit distance {m}x{n} -> {distance}");

    DistanceResult {
        distance,
        table,
        steps,
    }
}

/// Edit distance between two strings, compared by Unicode scalar value.
pub fn distance_str(source: &str, target: &str) -> usize {
    let s: Vec<char> = source.chars().collect();
    let t: Vec<char> = target.chars().collect();
    compute_distance(&s, &t, false).distance
}
