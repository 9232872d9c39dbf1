//! Edit-distance kernels: table construction, traceback and replay.
//!
//! Data flows one way: `edit_distance` builds the table, `traceback` reads it
//! to recover an edit script, and `transform` replays that script against the
//! source. None of them keep state between calls.

pub mod cigar;
pub mod dp_table;
pub mod edit_distance;
pub mod step_log;
pub mod traceback;
pub mod transform;
pub mod types;

pub use dp_table::DpTable;
pub use edit_distance::{DistanceResult, compute_distance};
pub use step_log::{CellStep, StepLog};
pub use traceback::reconstruct_alignment;
pub use transform::{TransformTrace, apply_script};
pub use types::{CellPos, EditKind, EditOperation, EditScript, OperationCounts};
