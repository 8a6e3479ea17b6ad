use crate::core::forcefield::interactions::InteractionKind;
use std::fmt;
use thiserror::Error;

/// Identifies an atom as `chain:residue_number:atom_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomLabel {
    pub chain: char,
    pub residue_number: isize,
    pub atom_name: String,
}

impl fmt::Display for AtomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.chain, self.residue_number, self.atom_name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AtomLabels(pub Vec<AtomLabel>);

impl fmt::Display for AtomLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

/// The force-field types of the atoms of an interaction, in interaction order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypeTuple(pub Vec<String>);

impl fmt::Display for TypeTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Identifies a residue as `chain:residue_number(name)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueLabel {
    pub chain: char,
    pub residue_number: isize,
    pub name: String,
}

impl fmt::Display for ResidueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}({})", self.chain, self.residue_number, self.name)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignmentError {
    #[error("No {kind} parameter for atoms [{atoms}] with types ({types})")]
    MissingParameter {
        kind: InteractionKind,
        atoms: AtomLabels,
        types: TypeTuple,
    },

    #[error("Atom type '{atom_type}' of {atom} has no solvation entry")]
    MissingSolvationType { atom: AtomLabel, atom_type: String },

    #[error("Backbone of residue {residue} has types ({types}), which match no CMAP class")]
    UnknownCmapClass {
        residue: ResidueLabel,
        types: TypeTuple,
    },

    #[error("Residue {residue} has no improper-torsion template for its residue type")]
    UnknownResidueType { residue: ResidueLabel },

    #[error("Histidine {residue} has an unrecognized protonation state (neither HD1 nor HE2)")]
    UnknownProtonationState { residue: ResidueLabel },

    #[error("Residue {residue} has no atom named '{atom_name}'")]
    MissingAtom {
        residue: ResidueLabel,
        atom_name: String,
    },

    #[error("Residue {residue} has no sequence neighbor at offset {offset}")]
    MissingNeighbor {
        residue: ResidueLabel,
        offset: isize,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
