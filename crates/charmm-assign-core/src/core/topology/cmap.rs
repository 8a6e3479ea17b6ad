use super::roles::{BACKBONE_C, BACKBONE_CA, BACKBONE_N, RoleRef};
use crate::core::forcefield::interactions::CmapClass;

/// The five backbone atoms spanning the φ/ψ pair of a residue.
pub const CMAP_SPAN: [RoleRef; 5] = [
    RoleRef::previous(BACKBONE_C),
    RoleRef::here(BACKBONE_N),
    RoleRef::here(BACKBONE_CA),
    RoleRef::here(BACKBONE_C),
    RoleRef::next(BACKBONE_N),
];

static CMAP_PATTERNS: [([&str; 5], CmapClass); 6] = [
    (["C", "NH1", "CT1", "C", "NH1"], CmapClass::Standard),
    (
        ["C", "NH1", "CT1", "C", "N"],
        CmapClass::StandardBeforeProline,
    ),
    (["C", "N", "CP1", "C", "NH1"], CmapClass::Proline),
    (["C", "N", "CP1", "C", "N"], CmapClass::ProlineBeforeProline),
    (["C", "NH1", "CT2", "C", "NH1"], CmapClass::Glycine),
    (
        ["C", "NH1", "CT2", "C", "N"],
        CmapClass::GlycineBeforeProline,
    ),
];

/// Classifies a backbone type tuple by exact match; no wildcards apply.
pub fn classify(types: [&str; 5]) -> Option<CmapClass> {
    CMAP_PATTERNS
        .iter()
        .find(|(pattern, _)| *pattern == types)
        .map(|&(_, class)| class)
}
