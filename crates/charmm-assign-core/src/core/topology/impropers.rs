use super::roles::{
    AMIDE_HYDROGEN, BACKBONE_C, BACKBONE_CA, BACKBONE_N, BACKBONE_O, PROLINE_RING_CARBON,
    RoleRef, TERMINAL_OXYGEN,
};
use crate::core::models::residue::{Residue, ResidueType};
use phf::{Map, phf_map};
use thiserror::Error;

/// Four atom role names within one residue.
pub type RoleQuadruple = [&'static str; 4];

/// Four atom roles, possibly spanning sequence neighbors.
pub type ImproperTemplate = [RoleRef; 4];

const NO_IMPROPERS: &[RoleQuadruple] = &[];

const ARG_IMPROPERS: &[RoleQuadruple] = &[["CZ", "NH1", "NH2", "NE"]];

const ASN_IMPROPERS: &[RoleQuadruple] = &[
    ["CG", "ND2", "CB", "OD1"],
    ["CG", "CB", "ND2", "OD1"],
    ["ND2", "CG", "HD21", "HD22"],
    ["ND2", "CG", "HD22", "HD21"],
];

const ASP_IMPROPERS: &[RoleQuadruple] = &[["CG", "CB", "OD2", "OD1"]];

const GLN_IMPROPERS: &[RoleQuadruple] = &[
    ["CD", "NE2", "CG", "OE1"],
    ["CD", "CG", "NE2", "OE1"],
    ["NE2", "CD", "HE21", "HE22"],
    ["NE2", "CD", "HE22", "HE21"],
];

const GLU_IMPROPERS: &[RoleQuadruple] = &[["CD", "CG", "OE2", "OE1"]];

const HIS_DOUBLY_PROTONATED: &[RoleQuadruple] = &[
    ["ND1", "CG", "CE1", "HD1"],
    ["ND1", "CE1", "CG", "HD1"],
    ["NE2", "CD2", "CE1", "HE2"],
    ["NE2", "CE1", "CD2", "HE2"],
];

const HIS_EPSILON_PROTONATED: &[RoleQuadruple] = &[
    ["NE2", "CD2", "CE1", "HE2"],
    ["CD2", "CG", "NE2", "HD2"],
    ["CE1", "ND1", "NE2", "HE1"],
    ["NE2", "CE1", "CD2", "HE2"],
    ["CD2", "NE2", "CG", "HD2"],
    ["CE1", "NE2", "ND1", "HE1"],
];

const HIS_DELTA_PROTONATED: &[RoleQuadruple] = &[
    ["ND1", "CG", "CE1", "HD1"],
    ["CD2", "CG", "NE2", "HD2"],
    ["CE1", "ND1", "NE2", "HE1"],
    ["ND1", "CE1", "CG", "HD1"],
    ["CD2", "NE2", "CG", "HD2"],
    ["CE1", "NE2", "ND1", "HE1"],
];

/// Side-chain improper quadruples of every residue type except histidine, which
/// branches on its tautomer (see [`HistidineTautomer`]).
static SIDE_CHAIN_IMPROPERS: Map<&'static str, &'static [RoleQuadruple]> = phf_map! {
    "ALA" => NO_IMPROPERS,
    "ARG" => ARG_IMPROPERS,
    "ASN" => ASN_IMPROPERS,
    "ASP" => ASP_IMPROPERS,
    "CYS" => NO_IMPROPERS,
    "GLN" => GLN_IMPROPERS,
    "GLU" => GLU_IMPROPERS,
    "GLY" => NO_IMPROPERS,
    "ILE" => NO_IMPROPERS,
    "LEU" => NO_IMPROPERS,
    "LYS" => NO_IMPROPERS,
    "MET" => NO_IMPROPERS,
    "PHE" => NO_IMPROPERS,
    "PRO" => NO_IMPROPERS,
    "SER" => NO_IMPROPERS,
    "THR" => NO_IMPROPERS,
    "TRP" => NO_IMPROPERS,
    "TYR" => NO_IMPROPERS,
    "VAL" => NO_IMPROPERS,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unrecognized residue type '{0}'")]
    UnknownResidueType(String),
    #[error("histidine carries neither HD1 nor HE2")]
    UnknownProtonationState,
}

/// Protonation state of a histidine ring, detected from its HD1/HE2 atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistidineTautomer {
    /// HD1 and HE2 present (HSP).
    DoublyProtonated,
    /// Only HD1 present (HSD).
    DeltaProtonated,
    /// Only HE2 present (HSE).
    EpsilonProtonated,
}

impl HistidineTautomer {
    pub fn detect(residue: &Residue) -> Option<Self> {
        match (residue.has_atom("HD1"), residue.has_atom("HE2")) {
            (true, true) => Some(Self::DoublyProtonated),
            (true, false) => Some(Self::DeltaProtonated),
            (false, true) => Some(Self::EpsilonProtonated),
            (false, false) => None,
        }
    }

    pub fn quadruples(&self) -> &'static [RoleQuadruple] {
        match self {
            Self::DoublyProtonated => HIS_DOUBLY_PROTONATED,
            Self::DeltaProtonated => HIS_DELTA_PROTONATED,
            Self::EpsilonProtonated => HIS_EPSILON_PROTONATED,
        }
    }
}

/// Side-chain improper quadruples for a residue.
pub fn side_chain_quadruples(residue: &Residue) -> Result<&'static [RoleQuadruple], TemplateError> {
    let residue_type = residue
        .residue_type
        .ok_or_else(|| TemplateError::UnknownResidueType(residue.name.clone()))?;
    if residue_type == ResidueType::Histidine {
        return HistidineTautomer::detect(residue)
            .map(|tautomer| tautomer.quadruples())
            .ok_or(TemplateError::UnknownProtonationState);
    }
    SIDE_CHAIN_IMPROPERS
        .get(residue_type.to_three_letter())
        .copied()
        .ok_or_else(|| TemplateError::UnknownResidueType(residue.name.clone()))
}

/// Backbone improper templates: amide planarity `(N, -C, CA, HN)` unless N-terminal
/// (proline substitutes its ring CD), then `(C, CA, +N, O)`, or `(C, CA, OXT, O)` for a
/// C-terminal residue. The lone residue of a one-residue chain gets only the latter.
pub fn backbone_templates(residue: &Residue) -> Vec<ImproperTemplate> {
    let mut templates = Vec::with_capacity(2);
    if !residue.is_n_terminal() {
        let amide = if residue.residue_type == Some(ResidueType::Proline) {
            PROLINE_RING_CARBON
        } else {
            AMIDE_HYDROGEN
        };
        templates.push([
            RoleRef::here(BACKBONE_N),
            RoleRef::previous(BACKBONE_C),
            RoleRef::here(BACKBONE_CA),
            RoleRef::here(amide),
        ]);
    }
    let carbonyl_partner = if residue.is_c_terminal() {
        RoleRef::here(TERMINAL_OXYGEN)
    } else {
        RoleRef::next(BACKBONE_N)
    };
    templates.push([
        RoleRef::here(BACKBONE_C),
        RoleRef::here(BACKBONE_CA),
        carbonyl_partner,
        RoleRef::here(BACKBONE_O),
    ]);
    templates
}

/// All improper templates of a residue: side chain first, then backbone.
pub fn improper_templates(residue: &Residue) -> Result<Vec<ImproperTemplate>, TemplateError> {
    let mut templates: Vec<ImproperTemplate> = side_chain_quadruples(residue)?
        .iter()
        .map(|quadruple| quadruple.map(RoleRef::here))
        .collect();
    templates.extend(backbone_templates(residue));
    Ok(templates)
}
