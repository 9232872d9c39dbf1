//! Replays an edit script against its source, one intermediate state per
//! costed operation.
//!
//! Script positions are recorded against the unmodified source. Each insert
//! shifts later positions right by one and each delete shifts them left, so
//! the applier carries a running offset that is added to every recorded
//! position.

use super::types::{EditKind, EditOperation, EditScript};
use crate::core::error::{EditError, Result};

/// Ordered states from `source` to the final buffer.
///
/// The first state is the source verbatim; every replace, insert and delete
/// appends one more. Matches append nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTrace<T> {
    states: Vec<Vec<T>>,
}

impl<T> TransformTrace<T> {
    pub fn states(&self) -> &[Vec<T>] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true: the source state is always present
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn first(&self) -> &[T] {
        &self.states[0]
    }

    /// Final state; equals the target for a script produced by the traceback
    pub fn last(&self) -> &[T] {
        &self.states[self.states.len() - 1]
    }

    pub fn into_states(self) -> Vec<Vec<T>> {
        self.states
    }
}

impl TransformTrace<char> {
    /// States joined back into strings
    pub fn to_strings(&self) -> Vec<String> {
        self.states.iter().map(|s| s.iter().collect()).collect()
    }
}

/// Buffer index of `op` under the running offset. Inserts may land at
/// `len` (append); replace and delete must land inside the buffer.
#[inline]
fn resolve_index<T>(op: &EditOperation<T>, offset: isize, len: usize) -> Result<usize> {
    let index = op.pos.i as isize + offset;
    let in_range = match op.kind {
        EditKind::Insert => index >= 0 && index as usize <= len,
        _ => index >= 0 && (index as usize) < len,
    };

    if !in_range {
        log::error!(
            "{} at {} resolves to index {} (offset {}) but buffer holds {} elements",
            op.kind,
            op.pos,
            index,
            offset,
            len
        );
        return Err(EditError::PositionOutOfRange {
            kind: op.kind,
            index,
            len,
        });
    }
    Ok(index as usize)
}

fn target_elem<T: Clone>(op: &EditOperation<T>) -> Result<T> {
    op.target_elem.clone().ok_or(EditError::MalformedOperation {
        kind: op.kind,
        pos: op.pos,
    })
}

/// Replace and delete must name the source element they consume
fn require_source<T>(op: &EditOperation<T>) -> Result<()> {
    match op.source_elem {
        Some(_) => Ok(()),
        None => {
            log::error!("{} at {} carries no source element", op.kind, op.pos);
            Err(EditError::MalformedOperation {
                kind: op.kind,
                pos: op.pos,
            })
        }
    }
}

/// Apply `script` to `source` and collect every intermediate state.
///
/// # Errors
/// * [`EditError::PositionOutOfRange`] if a corrected position falls outside
///   the working buffer, i.e. the script was not built for this source
/// * [`EditError::MalformedOperation`] if a replace or insert carries no
///   target element, or a replace or delete carries no source element
pub fn apply_script<T: Clone>(source: &[T], script: &EditScript<T>) -> Result<TransformTrace<T>> {
    let mut buffer: Vec<T> = source.to_vec();
    let mut states = Vec::with_capacity(script.cost() + 1);
    states.push(buffer.clone());

    let mut offset: isize = 0;
    for op in script {
        match op.kind {
            EditKind::Match => continue,
            EditKind::Replace => {
                require_source(op)?;
                let idx = resolve_index(op, offset, buffer.len())?;
                buffer[idx] = target_elem(op)?;
            }
            EditKind::Insert => {
                let idx = resolve_index(op, offset, buffer.len())?;
                buffer.insert(idx, target_elem(op)?);
                offset += 1;
            }
            EditKind::Delete => {
                require_source(op)?;
                let idx = resolve_index(op, offset, buffer.len())?;
                buffer.remove(idx);
                offset -= 1;
            }
        }
        states.push(buffer.clone());
    }

    log::debug!(
        "Applied {} ops to source of length {}: {} states",
        script.len(),
        source.len(),
        states.len()
    );
    Ok(TransformTrace { states })
}

/// Apply a `char` script to a string and return the states as strings.
pub fn apply_script_str(source: &str, script: &EditScript<char>) -> Result<Vec<String>> {
    let chars: Vec<char> = source.chars().collect();
    Ok(apply_script(&chars, script)?.to_strings())
}
