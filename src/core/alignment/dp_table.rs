//! Dense `(m+1) x (n+1)` edit-distance table.
//!
//! Stored row-major in a single allocation. Row 0 and column 0 carry the
//! pure insertion / deletion costs; traceback needs random access to every
//! cell, so no linear-space variant is offered.

use crate::core::error::{EditError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DpTable {
    /// Table for a source of length `m` and target of length `n` with only
    /// the boundary row and column filled; interior cells read 0.
    pub fn with_boundaries(m: usize, n: usize) -> Self {
        let rows = m + 1;
        let cols = n + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 0..rows {
            cells[i * cols] = i;
        }
        for j in 0..cols {
            cells[j] = j;
        }

        DpTable { rows, cols, cells }
    }

    /// Build from nested rows, e.g. a table produced or edited outside the
    /// engine. Empty or ragged input is a shape fault.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        if n_rows == 0 || n_cols == 0 {
            return Err(EditError::TableShape {
                expected_rows: n_rows.max(1),
                expected_cols: n_cols.max(1),
                rows: n_rows,
                cols: n_cols,
            });
        }

        if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
            return Err(EditError::TableShape {
                expected_rows: n_rows,
                expected_cols: n_cols,
                rows: n_rows,
                cols: bad.len(),
            });
        }

        Ok(DpTable {
            rows: n_rows,
            cols: n_cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at cell `(i, j)`. Panics when out of bounds, like slice indexing.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Terminal cell `dp[m][n]`
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.cells.chunks(self.cols).map(<[usize]>::to_vec).collect()
    }

    /// Check that the table is `(m+1) x (n+1)`.
    pub fn check_shape(&self, m: usize, n: usize) -> Result<()> {
        if self.rows != m + 1 || self.cols != n + 1 {
            log::error!(
                "DP table is {}x{} but sequences need {}x{}",
                self.rows,
                self.cols,
                m + 1,
                n + 1
            );
            return Err(EditError::TableShape {
                expected_rows: m + 1,
                expected_cols: n + 1,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let t = DpTable::with_boundaries(3, 2);
        assert_eq!(t.rows(), 4);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.row(0), &[0, 1, 2]);
        for i in 0..4 {
            assert_eq!(t.get(i, 0), i);
        }
        assert_eq!(t.get(2, 1), 0);
    }

    #[test]
    fn test_single_cell() {
        let t = DpTable::with_boundaries(0, 0);
        assert_eq!(t.rows(), 1);
        assert_eq!(t.cols(), 1);
        assert_eq!(t.distance(), 0);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = vec![vec![0, 1], vec![1, 0]];
        let t = DpTable::from_rows(rows.clone()).unwrap();
        assert_eq!(t.to_rows(), rows);
        assert_eq!(t.distance(), 0);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = DpTable::from_rows(vec![vec![0, 1, 2], vec![1, 1]]).unwrap_err();
        assert_eq!(
            err,
            EditError::TableShape {
                expected_rows: 2,
                expected_cols: 3,
                rows: 2,
                cols: 2
            }
        );
        assert!(DpTable::from_rows(Vec::new()).is_err());
        assert!(DpTable::from_rows(vec![Vec::new()]).is_err());
    }

    #[test]
    fn test_check_shape() {
        let t = DpTable::with_boundaries(2, 3);
        assert!(t.check_shape(2, 3).is_ok());
        assert!(t.check_shape(3, 2).is_err());
    }
}
