//! Core edit-distance components.
//!
//! Everything here is a pure function of its inputs and safe to call from
//! several threads on independent pairs.

pub mod alignment;
pub mod error;
