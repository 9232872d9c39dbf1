//! End-to-end replay: distance table, traceback and transform trace for one
//! pair, or for a batch of independent pairs in parallel.

use rayon::prelude::*;

use crate::core::alignment::cigar::Cigar;
use crate::core::alignment::{
    DpTable, EditScript, StepLog, TransformTrace, apply_script, compute_distance,
    reconstruct_alignment,
};
use crate::core::error::{EditError, Result};
use crate::replay_opt::ReplayOpt;

/// Everything the presentation layer needs to replay one pair.
#[derive(Debug, Clone)]
pub struct Replay<T> {
    pub distance: usize,
    pub table: DpTable,
    pub steps: Option<StepLog<T>>,
    pub script: EditScript<T>,
    pub trace: TransformTrace<T>,
}

impl<T: PartialEq + Clone> Replay<T> {
    /// Run all three stages for `source` -> `target`.
    pub fn compute(source: &[T], target: &[T], trace_steps: bool) -> Result<Self> {
        let result = compute_distance(source, target, trace_steps);
        let script = reconstruct_alignment(source, target, &result.table)?;
        let trace = apply_script(source, &script)?;
        debug_assert!(trace.last() == target);

        Ok(Replay {
            distance: result.distance,
            table: result.table,
            steps: result.steps,
            script,
            trace,
        })
    }

    pub fn cigar(&self) -> Cigar {
        self.script.to_cigar()
    }
}

impl Replay<char> {
    /// Replay two strings by Unicode scalar value, honoring the length guard
    /// and step tracing from `opt`.
    pub fn from_strs(source: &str, target: &str, opt: &ReplayOpt) -> Result<Self> {
        let s: Vec<char> = source.chars().collect();
        let t: Vec<char> = target.chars().collect();
        check_input_len(s.len(), opt)?;
        check_input_len(t.len(), opt)?;
        Self::compute(&s, &t, opt.trace_steps)
    }

    pub fn trace_strings(&self) -> Vec<String> {
        self.trace.to_strings()
    }
}

/// Enforce `opt.max_input_len`, if set
pub fn check_input_len(len: usize, opt: &ReplayOpt) -> Result<()> {
    match opt.max_input_len {
        Some(max) if len > max => {
            log::warn!("Input of length {} exceeds limit {}", len, max);
            Err(EditError::InputTooLong { len, max })
        }
        _ => Ok(()),
    }
}

/// Replay every pair in parallel. Results keep input order and each pair
/// succeeds or fails on its own.
pub fn replay_batch(pairs: &[(String, String)], opt: &ReplayOpt) -> Vec<Result<Replay<char>>> {
    log::debug!(
        "Replaying {} pairs on {} threads",
        pairs.len(),
        rayon::current_num_threads()
    );

    pairs
        .par_iter()
        .map(|(source, target)| Replay::from_strs(source, target, opt))
        .collect()
}
