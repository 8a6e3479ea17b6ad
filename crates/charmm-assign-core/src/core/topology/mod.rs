//! # Topology Module
//!
//! Hand-curated structural knowledge and graph queries over the covalent bond graph.
//!
//! ## Overview
//!
//! - **Topological distance** - shortest bond-path lengths, used to split non-bonded
//!   pairs into excluded, 1-4 and full pairs
//! - **Improper templates** - residue-keyed side-chain quadruples, the histidine
//!   tautomer branch, and backbone amide-planarity templates
//! - **CMAP classes** - the five-atom backbone span and its six type patterns
//!
//! ## Key Components
//!
//! - [`distance`] - Breadth-first distance oracle and [`distance::Separation`]
//! - [`impropers`] - Improper-torsion knowledge base
//! - [`cmap`] - Backbone torsion-map classifier
//! - [`roles`] - Atom role references that may cross into neighboring residues

pub mod cmap;
pub mod distance;
pub mod impropers;
pub mod roles;
