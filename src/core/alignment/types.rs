//! Value types shared by the distance engine, the traceback and the applier.

use std::fmt;

/// Operation that produced a DP cell or a step of an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Elements are equal, no cost
    Match,
    /// Source element overwritten by the target element
    Replace,
    /// Target element inserted into the source
    Insert,
    /// Source element removed
    Delete,
}

impl EditKind {
    /// All kinds in tie-break order (match first, delete last)
    pub const ALL: [EditKind; 4] = [
        EditKind::Match,
        EditKind::Replace,
        EditKind::Insert,
        EditKind::Delete,
    ];

    /// Cost contributed to the edit distance
    #[inline(always)]
    pub const fn cost(self) -> usize {
        match self {
            EditKind::Match => 0,
            _ => 1,
        }
    }

    #[inline(always)]
    pub const fn is_edit(self) -> bool {
        !matches!(self, EditKind::Match)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EditKind::Match => "match",
            EditKind::Replace => "replace",
            EditKind::Insert => "insert",
            EditKind::Delete => "delete",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(i, j)` coordinates of a DP cell: `i` indexes the source, `j` the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub i: usize,
    pub j: usize,
}

impl CellPos {
    #[inline(always)]
    pub const fn new(i: usize, j: usize) -> Self {
        CellPos { i, j }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}

/// A single step of an edit script.
///
/// `source_elem` is the consumed source element (None for inserts) and
/// `target_elem` the consumed target element (None for deletes). `pos` is
/// recorded against the unmodified source, so replaying a script has to
/// correct it for earlier inserts and deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation<T> {
    pub kind: EditKind,
    pub source_elem: Option<T>,
    pub target_elem: Option<T>,
    pub pos: CellPos,
}

impl<T> EditOperation<T> {
    pub fn matched(source_elem: T, target_elem: T, pos: CellPos) -> Self {
        EditOperation {
            kind: EditKind::Match,
            source_elem: Some(source_elem),
            target_elem: Some(target_elem),
            pos,
        }
    }

    pub fn replace(source_elem: T, target_elem: T, pos: CellPos) -> Self {
        EditOperation {
            kind: EditKind::Replace,
            source_elem: Some(source_elem),
            target_elem: Some(target_elem),
            pos,
        }
    }

    pub fn insert(target_elem: T, pos: CellPos) -> Self {
        EditOperation {
            kind: EditKind::Insert,
            source_elem: None,
            target_elem: Some(target_elem),
            pos,
        }
    }

    pub fn delete(source_elem: T, pos: CellPos) -> Self {
        EditOperation {
            kind: EditKind::Delete,
            source_elem: Some(source_elem),
            target_elem: None,
            pos,
        }
    }
}

impl<T: fmt::Display> fmt::Display for EditOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source_elem, &self.target_elem) {
            (Some(s), Some(t)) => write!(f, "{} {}->{} at {}", self.kind, s, t, self.pos),
            (None, Some(t)) => write!(f, "{} {} at {}", self.kind, t, self.pos),
            (Some(s), None) => write!(f, "{} {} at {}", self.kind, s, self.pos),
            (None, None) => write!(f, "{} at {}", self.kind, self.pos),
        }
    }
}

/// Per-kind tally of an edit script.
///
/// These are occurrence counts, not costs: `matches` counts matched
/// elements even though a match costs nothing. Use [`OperationCounts::cost`]
/// for the costed total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationCounts {
    pub matches: usize,
    pub replaces: usize,
    pub inserts: usize,
    pub deletes: usize,
}

impl OperationCounts {
    pub fn record(&mut self, kind: EditKind) {
        match kind {
            EditKind::Match => self.matches += 1,
            EditKind::Replace => self.replaces += 1,
            EditKind::Insert => self.inserts += 1,
            EditKind::Delete => self.deletes += 1,
        }
    }

    pub fn get(&self, kind: EditKind) -> usize {
        match kind {
            EditKind::Match => self.matches,
            EditKind::Replace => self.replaces,
            EditKind::Insert => self.inserts,
            EditKind::Delete => self.deletes,
        }
    }

    /// Sum of the costed kinds, equal to the edit distance for an optimal script
    pub fn cost(&self) -> usize {
        self.replaces + self.inserts + self.deletes
    }
}

/// Ordered, first-applied-first list of edit operations.
///
/// Immutable once built. The traceback produces these; `new` exists for
/// scripts assembled elsewhere, which the applier validates as it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    ops: Vec<EditOperation<T>>,
}

impl<T> EditScript<T> {
    pub fn new(ops: Vec<EditOperation<T>>) -> Self {
        EditScript { ops }
    }

    #[inline]
    pub fn ops(&self) -> &[EditOperation<T>] {
        &self.ops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOperation<T>> {
        self.ops.iter()
    }

    /// Number of non-match operations
    pub fn cost(&self) -> usize {
        self.ops.iter().map(|op| op.kind.cost()).sum()
    }

    pub fn counts(&self) -> OperationCounts {
        let mut counts = OperationCounts::default();
        for op in &self.ops {
            counts.record(op.kind);
        }
        counts
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditOperation<T>;
    type IntoIter = std::slice::Iter<'a, EditOperation<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
