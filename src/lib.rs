pub mod core; // Distance engine, traceback and transform replay
pub mod defaults;
pub mod replay; // End-to-end and batch replay
pub mod replay_opt;

pub use crate::core::alignment::{
    CellPos, DpTable, EditKind, EditOperation, EditScript, StepLog, TransformTrace,
    apply_script, compute_distance, reconstruct_alignment,
};
pub use crate::core::error::EditError;
pub use crate::replay::Replay;
pub use crate::replay_opt::ReplayOpt;
