//! # CHARMM Assign Core Library
//!
//! Topology matching and parameter assignment for the CHARMM36/EEF1-SB protein force
//! field. Given a protein structure whose atoms already carry force-field types, charges
//! and masses, the library enumerates every bonded and non-bonded interaction and
//! resolves its physical constants against GROMACS-formatted parameter tables.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MolecularSystem`), parameter
//!   tables and interaction records (`forcefield`), the raw `.itp` record reader (`io`),
//!   and structural knowledge such as improper templates, CMAP classes and topological
//!   distances (`topology`).
//!
//! - **[`engine`]: The Logic Core.** One assigner per interaction kind, sharing a
//!   read-only `AssignmentContext` and a structured error taxonomy.
//!
//! - **[`workflows`]: The Public API.** A single call that runs every assigner and
//!   returns a complete `AssignedTopology`.

pub mod core;
pub mod engine;
pub mod workflows;
