//! Interaction records produced by the assignment engine.
//!
//! Each record refers to its atoms by [`AtomId`] and carries every constant the
//! energy layer needs, so no further table lookups are required downstream.

use crate::core::models::ids::{AtomId, ResidueId};
use std::fmt;

/// The interaction kinds the engine assigns parameters for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    BondedPair,
    AngleBend,
    Torsion,
    ImproperTorsion,
    NonBonded,
    Cmap,
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InteractionKind::BondedPair => "bonded pair",
            InteractionKind::AngleBend => "angle bend",
            InteractionKind::Torsion => "torsion",
            InteractionKind::ImproperTorsion => "improper torsion",
            InteractionKind::NonBonded => "non-bonded",
            InteractionKind::Cmap => "CMAP",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondedPairInteraction {
    pub atoms: [AtomId; 2],
    /// Equilibrium bond length (nm).
    pub r0: f64,
    /// Force constant (kJ·mol⁻¹·nm⁻²).
    pub kb: f64,
}

/// A Urey-Bradley angle term: harmonic angle plus a 1-3 distance spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleBendInteraction {
    /// `atoms[1]` is the vertex.
    pub atoms: [AtomId; 3],
    /// Equilibrium angle (degrees).
    pub theta0: f64,
    pub k0: f64,
    /// Equilibrium 1-3 distance (nm).
    pub r13: f64,
    pub kub: f64,
}

/// One Fourier term of a proper dihedral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorsionInteraction {
    pub atoms: [AtomId; 4],
    /// Phase (degrees).
    pub phi0: f64,
    pub cp: f64,
    pub multiplicity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImproperTorsionInteraction {
    pub atoms: [AtomId; 4],
    pub phi0: f64,
    pub cp: f64,
}

/// Implicit-solvent constants attached to a heavy-atom pair beyond the 1-4 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvationFactors {
    /// Desolvation of atom 1 by atom 2.
    pub fac_12: f64,
    /// Desolvation of atom 2 by atom 1.
    pub fac_21: f64,
    pub r_vdw_1: f64,
    pub r_vdw_2: f64,
    pub lambda_1: f64,
    pub lambda_2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonBondedInteraction {
    pub atoms: [AtomId; 2],
    /// Electrostatic prefactor `q1·q2·k_e`.
    pub qq: f64,
    /// Effective sigma after combination or 1-4 override.
    pub sigma: f64,
    pub epsilon: f64,
    pub c6: f64,
    pub c12: f64,
    /// `true` for pairs exactly three bonds apart.
    pub is_14: bool,
    /// `None` for solvation-exempt pairs.
    pub solvation: Option<SolvationFactors>,
}

impl NonBondedInteraction {
    pub fn is_solvation_exempt(&self) -> bool {
        self.solvation.is_none()
    }
}

/// The six backbone torsion-map classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CmapClass {
    /// `C NH1 CT1 C NH1`
    Standard,
    /// `C NH1 CT1 C N`
    StandardBeforeProline,
    /// `C N CP1 C NH1`
    Proline,
    /// `C N CP1 C N`
    ProlineBeforeProline,
    /// `C NH1 CT2 C NH1`
    Glycine,
    /// `C NH1 CT2 C N`
    GlycineBeforeProline,
}

impl CmapClass {
    pub const ALL: [CmapClass; 6] = [
        CmapClass::Standard,
        CmapClass::StandardBeforeProline,
        CmapClass::Proline,
        CmapClass::ProlineBeforeProline,
        CmapClass::Glycine,
        CmapClass::GlycineBeforeProline,
    ];

    /// Index of the class in the CMAP grid table.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmapInteraction {
    pub residue_id: ResidueId,
    /// Position of the residue in the flattened residue enumeration.
    pub residue_index: usize,
    /// `[C(i-1), N(i), CA(i), C(i), N(i+1)]`
    pub atoms: [AtomId; 5],
    pub class: CmapClass,
}
