use super::ids::ResidueId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: char,                        // Chain identifier (e.g., 'A', 'B')
    pub(crate) residues: Vec<ResidueId>, // Residues in sequence order
}

impl Chain {
    pub(crate) fn new(id: char) -> Self {
        Self {
            id,
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }

    /// Returns the residue `offset` positions away from `residue_id` along the chain.
    pub fn neighbor_of(&self, residue_id: ResidueId, offset: isize) -> Option<ResidueId> {
        let position = self.residues.iter().position(|&id| id == residue_id)?;
        let target = position.checked_add_signed(offset)?;
        self.residues.get(target).copied()
    }
}
