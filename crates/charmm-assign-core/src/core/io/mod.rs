//! Provides input functionality for force-field parameter files.
//!
//! Parameter tables are distributed as GROMACS-style `.itp` text files. This module
//! turns such files into ordered, whitespace-tokenized records; interpreting the
//! fields of each record is left to [`crate::core::forcefield::params`].

pub mod itp;
