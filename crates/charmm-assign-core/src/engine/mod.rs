//! # Engine Module
//!
//! This module implements parameter assignment: matching the topology of a
//! [`MolecularSystem`](crate::core::models::system::MolecularSystem) against the flat,
//! ordered tables of a [`Forcefield`](crate::core::forcefield::params::Forcefield).
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Assignment options and their builder
//! - **Context** ([`context`]) - Read-only inputs shared by every task, plus role
//!   resolution and error labelling helpers
//! - **Error Handling** ([`error`]) - Structured fatal errors that identify the offending
//!   atoms, residues and type tuples
//! - **Tasks** ([`tasks`]) - One assigner per interaction kind
//!
//! ## Key Capabilities
//!
//! - **First-match-wins lookup** in file order, with either-orientation and wildcard tiers
//! - **Canonical enumeration** so that no interaction is emitted twice
//! - **Parallel non-bonded sweep** behind the `parallel` feature
//! - **Fail-fast reporting** of every structurally mandatory parameter that is missing

pub mod config;
pub mod context;
pub mod error;
pub mod tasks;
