//! Assigners, one per interaction kind.
//!
//! Each task reads the shared [`AssignmentContext`](super::context::AssignmentContext) and
//! produces an independent interaction list; no task depends on another's output, so
//! they may run in any order or be called individually.

pub mod angle_bends;
pub mod bonded_pairs;
pub mod cmap;
pub mod improper_torsions;
pub mod non_bonded;
pub mod torsions;
