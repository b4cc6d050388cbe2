//! Evaluation helpers split out of the interpreter's dispatch loop.
//!
//! - `control`: if/else, while, do-while
//! - `expr`: identifier lookup

pub mod control;
pub mod expr;
