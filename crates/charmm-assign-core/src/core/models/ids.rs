use slotmap::new_key_type;
use std::cmp::Ordering;

new_key_type! {
    pub struct AtomId;
    pub struct ResidueId;
    pub struct ChainId;
}

/// Position of an atom in the flattened chain → residue → atom enumeration.
///
/// Ordering is lexicographic on `(residue, atom)`, which is the canonical order used
/// to emit each bonded pair, angle, and torsion exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SequencePosition {
    /// Index of the residue in the flattened residue enumeration of the system.
    pub residue: usize,
    /// Index of the atom within its residue.
    pub atom: usize,
}

impl SequencePosition {
    pub fn new(residue: usize, atom: usize) -> Self {
        Self { residue, atom }
    }
}

impl PartialOrd for SequencePosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SequencePosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.residue
            .cmp(&other.residue)
            .then(self.atom.cmp(&other.atom))
    }
}
