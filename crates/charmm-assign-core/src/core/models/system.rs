use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId, SequencePosition};
use super::residue::{Residue, TerminalStatus};
use super::topology::Bond;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;

/// Represents a complete molecular structure with atoms, residues, chains, and bonds.
///
/// This is the structure container the assignment engine reads from. Chains and
/// residues keep their insertion order, which defines the canonical flattened atom
/// enumeration used by every assigner. The covalent bond relation is stored as an
/// explicit list plus a cached adjacency list.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Chains in insertion order.
    chain_order: Vec<ChainId>,
    /// List of all bonds in the system.
    bonds: Vec<Bond>,
    /// Lookup map for finding residues by chain ID and residue number.
    residue_id_map: HashMap<(ChainId, isize), ResidueId>,
    /// Lookup map for finding chains by their single-character identifier.
    chain_id_map: HashMap<char, ChainId>,
    /// Cached adjacency list for bond connectivity, indexed by atom ID.
    bond_adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
}

impl MolecularSystem {
    /// Creates a new, empty molecular system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves a mutable reference to an atom by its ID.
    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Returns the number of atoms in the system.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The residue ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Residue)` if the residue exists, otherwise `None`.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Retrieves a mutable reference to a residue by its ID.
    pub fn residue_mut(&mut self, id: ResidueId) -> Option<&mut Residue> {
        self.residues.get_mut(id)
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in insertion order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(ChainId, &Chain)` pairs.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order
            .iter()
            .filter_map(|&id| self.chains.get(id).map(|chain| (id, chain)))
    }

    /// Returns a slice of all bonds in the system.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Finds a chain ID by its single-character identifier.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    /// Finds a residue ID by its chain ID and residue number.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain containing the residue.
    /// * `residue_number` - The sequence number of the residue.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if the residue exists, otherwise `None`.
    pub fn find_residue_by_number(
        &self,
        chain_id: ChainId,
        residue_number: isize,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number))
            .copied()
    }

    /// Adds a new chain to the system or returns the existing one.
    ///
    /// This method is idempotent; if a chain with the given ID already exists,
    /// it returns the existing chain ID without creating a duplicate.
    pub fn add_chain(&mut self, id: char) -> ChainId {
        if let Some(&existing) = self.chain_id_map.get(&id) {
            return existing;
        }
        let chain_id = self.chains.insert(Chain::new(id));
        self.chain_id_map.insert(id, chain_id);
        self.chain_order.push(chain_id);
        chain_id
    }

    /// Appends a residue to a chain or returns the existing one.
    ///
    /// The residue type is recognized from `name`; names outside the twenty
    /// standard amino acids leave it unset.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain to add the residue to.
    /// * `residue_number` - The sequence number of the residue.
    /// * `name` - The residue name (e.g., "ALA", "HSD").
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (e.g., if chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` (e.g., if residue doesn't exist).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        let name = atom.name.clone();
        let residue = self.residues.get_mut(residue_id)?;

        let atom_id = self.atoms.insert(atom);
        self.bond_adjacency.insert(atom_id, Vec::new());
        residue.add_atom(&name, atom_id);

        Some(atom_id)
    }

    /// Adds a covalent bond between two atoms.
    ///
    /// This method is idempotent; adding an existing bond succeeds without
    /// creating duplicates. Self-bonds are rejected.
    ///
    /// # Return
    ///
    /// Returns `Some(())` if successful, otherwise `None` (e.g., if atoms don't exist).
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> Option<()> {
        if atom1_id == atom2_id
            || !self.atoms.contains_key(atom1_id)
            || !self.atoms.contains_key(atom2_id)
        {
            return None;
        }

        if self.bond_adjacency[atom1_id].contains(&atom2_id) {
            return Some(());
        }

        self.bonds.push(Bond::new(atom1_id, atom2_id));
        self.bond_adjacency[atom1_id].push(atom2_id);
        self.bond_adjacency[atom2_id].push(atom1_id);
        Some(())
    }

    /// Adds a bond between two atoms of (possibly different) residues, addressed by role name.
    pub fn add_bond_by_name(
        &mut self,
        residue1_id: ResidueId,
        atom1_name: &str,
        residue2_id: ResidueId,
        atom2_name: &str,
    ) -> Option<()> {
        let atom1_id = self.residue(residue1_id)?.get_atom_id_by_name(atom1_name)?;
        let atom2_id = self.residue(residue2_id)?.get_atom_id_by_name(atom2_name)?;
        self.add_bond(atom1_id, atom2_id)
    }

    /// Retrieves the bonded neighbors of an atom, in bond insertion order.
    ///
    /// # Return
    ///
    /// Returns `Some(&[AtomId])` if the atom exists, otherwise `None`.
    pub fn get_bonded_neighbors(&self, atom_id: AtomId) -> Option<&[AtomId]> {
        self.bond_adjacency.get(atom_id).map(|v| v.as_slice())
    }

    /// Returns all residue IDs in canonical order (chains in insertion order, residues in sequence).
    pub fn ordered_residue_ids(&self) -> Vec<ResidueId> {
        self.chains_iter()
            .flat_map(|(_, chain)| chain.residues().iter().copied())
            .collect()
    }

    /// Returns every atom with its position in the flattened chain → residue → atom enumeration.
    pub fn ordered_atoms(&self) -> Vec<(AtomId, SequencePosition)> {
        self.ordered_residue_ids()
            .iter()
            .enumerate()
            .filter_map(|(residue_index, &residue_id)| {
                self.residues
                    .get(residue_id)
                    .map(|residue| (residue_index, residue))
            })
            .flat_map(|(residue_index, residue)| {
                residue
                    .atoms()
                    .iter()
                    .enumerate()
                    .map(move |(atom_index, &atom_id)| {
                        (atom_id, SequencePosition::new(residue_index, atom_index))
                    })
            })
            .collect()
    }

    /// Returns the canonical sequence position of every atom, keyed by atom ID.
    pub fn sequence_positions(&self) -> SecondaryMap<AtomId, SequencePosition> {
        self.ordered_atoms().into_iter().collect()
    }

    /// Returns the residue `offset` positions away along the same chain.
    ///
    /// # Arguments
    ///
    /// * `residue_id` - The residue to start from.
    /// * `offset` - `-1` for the previous residue, `+1` for the next one.
    pub fn residue_neighbor(&self, residue_id: ResidueId, offset: isize) -> Option<ResidueId> {
        let residue = self.residues.get(residue_id)?;
        self.chains
            .get(residue.chain_id)?
            .neighbor_of(residue_id, offset)
    }

    /// Marks the first residue of a chain as N-terminal and the last one as C-terminal.
    ///
    /// The residue of a single-residue chain is marked [`TerminalStatus::Both`].
    pub fn mark_termini(&mut self, chain_id: ChainId) -> Option<()> {
        let residues = self.chains.get(chain_id)?.residues.clone();
        let (&first, &last) = (residues.first()?, residues.last()?);
        if first == last {
            self.residues.get_mut(first)?.terminal = TerminalStatus::Both;
            return Some(());
        }
        if let Some(residue) = self.residues.get_mut(last) {
            residue.terminal = TerminalStatus::CTerminal;
        }
        if let Some(residue) = self.residues.get_mut(first) {
            residue.terminal = TerminalStatus::NTerminal;
        }
        Some(())
    }
}
