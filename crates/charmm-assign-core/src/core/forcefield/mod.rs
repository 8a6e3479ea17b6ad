//! # Force Field Module
//!
//! This module holds the CHARMM36/EEF1-SB parameter tables and the records the
//! assignment engine produces from them.
//!
//! ## Overview
//!
//! Parameter tables are flat, ordered sequences decoded from GROMACS-style `.itp`
//! records. Lookups scan them linearly and the first match in file order wins, with
//! explicit fallback chains (forward, reversed, wildcard) expressed through
//! [`lookup::MatchStrategy`]. Wildcard positions are a dedicated
//! [`types::TypePattern::Any`] variant rather than a sentinel string.
//!
//! ## Key Components
//!
//! - [`params`] - Parameter records, the [`params::Forcefield`] container and its TOML manifest
//! - [`solvation`] - EEF1 implicit-solvent tables
//! - [`lookup`] - Ordered first-match-wins table lookup
//! - [`interactions`] - Interaction records handed to the energy layer
//! - [`constants`] - Physical constants shared by the assigners
//!
//! ## Usage
//!
//! ```ignore
//! use charmm_assign::core::forcefield::params::Forcefield;
//!
//! let forcefield = Forcefield::load(Path::new("charmm36-eef1-sb/forcefield.toml"))?;
//! ```

pub mod constants;
pub mod interactions;
pub mod lookup;
pub mod params;
pub mod solvation;
pub mod types;
