//! # Core Models Module
//!
//! This module contains the data structures used to represent the molecular structure
//! that parameters are assigned to.
//!
//! ## Overview
//!
//! The models describe atoms, residues, chains and the covalent bond graph. They are
//! read-only inputs of the assignment engine: the engine consults force-field type
//! labels, charges and masses, walks the bond graph, and refers back to atoms by their
//! stable [`ids::AtomId`] in every interaction record it produces.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with coordinates and force-field identity
//! - [`residue`] - Amino acid residue, residue type and terminal status
//! - [`chain`] - Ordered residue sequence of a polypeptide chain
//! - [`system`] - Complete molecular system with bond adjacency and canonical ordering
//! - [`topology`] - Covalent bond records
//! - [`ids`] - Stable identifiers and the canonical [`ids::SequencePosition`]
//!
//! ## Usage
//!
//! ```ignore
//! use charmm_assign::core::models::{atom::Atom, system::MolecularSystem};
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain('A');
//! let residue_id = system.add_residue(chain_id, 1, "ALA").unwrap();
//!
//! let atom = Atom::new("CA", residue_id, Point3::origin()).with_force_field("CT1", 0.07, 12.011);
//! system.add_atom_to_residue(residue_id, atom);
//! ```

pub mod atom;
pub mod chain;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod residue;
pub mod system;
pub mod topology;
