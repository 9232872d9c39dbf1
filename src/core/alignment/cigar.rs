//! Run-length (CIGAR) rendering of edit scripts.
//!
//! Uses the SAM extended operations so matches and replacements stay
//! distinguishable: `=` match, `X` replace, `I` insert, `D` delete. The
//! source plays the reference role and the target the query role, so `I`
//! consumes only target elements and `D` only source elements.

use std::fmt;

use super::types::{EditKind, EditScript};

/// CIGAR operation with zero-cost conversion to/from bytes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CigarOp {
    Eq = b'=', // Match
    X = b'X',  // Replace
    I = b'I',  // Insert (target only)
    D = b'D',  // Delete (source only)
}

impl CigarOp {
    #[inline(always)]
    pub const fn from_kind(kind: EditKind) -> Self {
        match kind {
            EditKind::Match => Self::Eq,
            EditKind::Replace => Self::X,
            EditKind::Insert => Self::I,
            EditKind::Delete => Self::D,
        }
    }

    #[inline(always)]
    pub const fn kind(self) -> EditKind {
        match self {
            Self::Eq => EditKind::Match,
            Self::X => EditKind::Replace,
            Self::I => EditKind::Insert,
            Self::D => EditKind::Delete,
        }
    }

    #[inline(always)]
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'=' => Some(Self::Eq),
            b'X' => Some(Self::X),
            b'I' => Some(Self::I),
            b'D' => Some(Self::D),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Returns true if this operation consumes source elements
    #[inline(always)]
    pub const fn consumes_source(self) -> bool {
        matches!(self, Self::Eq | Self::X | Self::D)
    }

    /// Returns true if this operation consumes target elements
    #[inline(always)]
    pub const fn consumes_target(self) -> bool {
        matches!(self, Self::Eq | Self::X | Self::I)
    }
}

/// Normalized run-length encoding of an edit script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cigar {
    runs: Vec<(CigarOp, usize)>,
}

impl Cigar {
    /// Encode `script`, merging adjacent operations of the same kind.
    pub fn from_script<T>(script: &EditScript<T>) -> Self {
        let mut runs: Vec<(CigarOp, usize)> = Vec::new();
        for op in script {
            let cop = CigarOp::from_kind(op.kind);
            if let Some(run) = runs.last_mut().filter(|(last, _)| *last == cop) {
                run.1 += 1;
            } else {
                runs.push((cop, 1));
            }
        }
        Cigar { runs }
    }

    pub fn runs(&self) -> &[(CigarOp, usize)] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Source elements covered (sums `=`, `X`, `D`)
    pub fn source_length(&self) -> usize {
        self.runs
            .iter()
            .filter_map(|&(op, len)| op.consumes_source().then_some(len))
            .sum()
    }

    /// Target elements covered (sums `=`, `X`, `I`)
    pub fn target_length(&self) -> usize {
        self.runs
            .iter()
            .filter_map(|&(op, len)| op.consumes_target().then_some(len))
            .sum()
    }

    /// Edit distance implied by the runs (everything except `=`)
    pub fn edit_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|(op, _)| *op != CigarOp::Eq)
            .map(|&(_, len)| len)
            .sum()
    }
}

impl fmt::Display for Cigar {
    /// `3=1X2I` style; an empty script renders as `*`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.runs.is_empty() {
            return f.write_str("*");
        }
        for &(op, len) in &self.runs {
            write!(f, "{}{}", len, op.to_byte() as char)?;
        }
        Ok(())
    }
}

impl<T> EditScript<T> {
    pub fn to_cigar(&self) -> Cigar {
        Cigar::from_script(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alignment::types::{CellPos, EditOperation};

    fn script(kinds: &[EditKind]) -> EditScript<char> {
        let ops = kinds
            .iter()
            .enumerate()
            .map(|(k, &kind)| {
                let pos = CellPos::new(k, k);
                match kind {
                    EditKind::Match => EditOperation::matched('a', 'a', pos),
                    EditKind::Replace => EditOperation::replace('a', 'b', pos),
                    EditKind::Insert => EditOperation::insert('b', pos),
                    EditKind::Delete => EditOperation::delete('a', pos),
                }
            })
            .collect();
        EditScript::new(ops)
    }

    #[test]
    fn test_cigar_op_from_byte() {
        assert_eq!(CigarOp::from_byte(b'='), Some(CigarOp::Eq));
        assert_eq!(CigarOp::from_byte(b'X'), Some(CigarOp::X));
        assert_eq!(CigarOp::from_byte(b'I'), Some(CigarOp::I));
        assert_eq!(CigarOp::from_byte(b'D'), Some(CigarOp::D));
        assert_eq!(CigarOp::from_byte(b'M'), None);
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in EditKind::ALL {
            assert_eq!(CigarOp::from_kind(kind).kind(), kind);
        }
    }

    #[test]
    fn test_op_consumes() {
        assert!(CigarOp::Eq.consumes_source());
        assert!(CigarOp::Eq.consumes_target());
        assert!(CigarOp::I.consumes_target());
        assert!(!CigarOp::I.consumes_source());
        assert!(CigarOp::D.consumes_source());
        assert!(!CigarOp::D.consumes_target());
    }

    #[test]
    fn test_runs_are_merged() {
        use EditKind::*;
        let cigar = script(&[Replace, Match, Match, Match, Replace, Match, Insert]).to_cigar();
        assert_eq!(cigar.to_string(), "1X3=1X1=1I");
        assert_eq!(cigar.source_length(), 6);
        assert_eq!(cigar.target_length(), 7);
        assert_eq!(cigar.edit_count(), 3);
    }

    #[test]
    fn test_deletions() {
        use EditKind::*;
        let cigar = script(&[Match, Delete, Delete, Match]).to_cigar();
        assert_eq!(
            cigar.runs(),
            &[(CigarOp::Eq, 1), (CigarOp::D, 2), (CigarOp::Eq, 1)]
        );
        assert_eq!(cigar.source_length(), 4);
        assert_eq!(cigar.target_length(), 2);
    }

    #[test]
    fn test_empty() {
        let cigar = script(&[]).to_cigar();
        assert!(cigar.is_empty());
        assert_eq!(cigar.to_string(), "*");
    }
}
