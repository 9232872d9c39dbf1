// src/defaults.rs

// Input guard (0 = unlimited)
pub const MAX_INPUT_LEN: usize = 10_000;

// Output
pub const VERBOSITY: i32 = 3;
pub const TRACE_STEPS: bool = false;

// Batch mode
pub const PAIR_SEPARATOR: char = '\t';
