//! # Core Module
//!
//! This module provides the stateless building blocks of the parameter-assignment
//! engine: the structure it reads, the force-field tables it consults, and the
//! structural knowledge it applies.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, chains, and the covalent bond graph
//! - **Force Field** ([`forcefield`]) - Parameter tables, ordered lookup, solvation tables, and interaction records
//! - **File I/O** ([`io`]) - Tokenizing `.itp` parameter files into ordered records
//! - **Structural Knowledge** ([`topology`]) - Topological distance, improper templates, and CMAP classes

pub mod forcefield;
pub mod io;
pub mod models;
pub mod topology;
