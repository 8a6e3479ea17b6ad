//! # Workflows Module
//!
//! High-level entry points that run the engine end to end.
//!
//! - **Assignment Workflow** ([`assign`]) - Runs every assigner over one molecular system
//!   and collects the six interaction lists together with torsion gap diagnostics.

pub mod assign;
