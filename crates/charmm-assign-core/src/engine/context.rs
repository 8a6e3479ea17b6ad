use super::config::AssignmentConfig;
use super::error::{AssignmentError, AtomLabel, AtomLabels, ResidueLabel, TypeTuple};
use crate::core::forcefield::interactions::InteractionKind;
use crate::core::forcefield::params::Forcefield;
use crate::core::models::atom::Atom;
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::residue::Residue;
use crate::core::models::system::MolecularSystem;
use crate::core::topology::roles::RoleRef;

/// Read-only inputs shared by every assignment task.
#[derive(Clone, Copy)]
pub struct AssignmentContext<'a> {
    pub system: &'a MolecularSystem,
    pub forcefield: &'a Forcefield,
    pub config: &'a AssignmentConfig,
}

impl<'a> AssignmentContext<'a> {
    pub fn new(
        system: &'a MolecularSystem,
        forcefield: &'a Forcefield,
        config: &'a AssignmentConfig,
    ) -> Self {
        Self {
            system,
            forcefield,
            config,
        }
    }

    pub fn atom(&self, atom_id: AtomId) -> Result<&'a Atom, AssignmentError> {
        self.system
            .atom(atom_id)
            .ok_or_else(|| AssignmentError::Internal(format!("Atom {atom_id:?} not found")))
    }

    pub fn residue(&self, residue_id: ResidueId) -> Result<&'a Residue, AssignmentError> {
        self.system.residue(residue_id).ok_or_else(|| {
            AssignmentError::Internal(format!("Residue {residue_id:?} not found"))
        })
    }

    pub fn atom_type(&self, atom_id: AtomId) -> Result<&'a str, AssignmentError> {
        self.atom(atom_id)
            .map(|atom| atom.force_field_type.as_str())
    }

    pub fn bonded_neighbors(&self, atom_id: AtomId) -> &'a [AtomId] {
        self.system.get_bonded_neighbors(atom_id).unwrap_or(&[])
    }

    pub fn residue_label(&self, residue_id: ResidueId) -> ResidueLabel {
        let residue = self.system.residue(residue_id);
        ResidueLabel {
            chain: residue
                .and_then(|r| self.system.chain(r.chain_id))
                .map_or('?', |chain| chain.id),
            residue_number: residue.map_or(0, |r| r.residue_number),
            name: residue.map_or_else(|| "?".to_string(), |r| r.name.clone()),
        }
    }

    pub fn atom_label(&self, atom_id: AtomId) -> AtomLabel {
        match self.system.atom(atom_id) {
            Some(atom) => {
                let residue = self.residue_label(atom.residue_id);
                AtomLabel {
                    chain: residue.chain,
                    residue_number: residue.residue_number,
                    atom_name: atom.name.clone(),
                }
            }
            None => AtomLabel {
                chain: '?',
                residue_number: 0,
                atom_name: format!("{atom_id:?}"),
            },
        }
    }

    /// Builds the fatal missing-parameter error for an interaction.
    pub fn missing_parameter(&self, kind: InteractionKind, atoms: &[AtomId]) -> AssignmentError {
        AssignmentError::MissingParameter {
            kind,
            atoms: self.labels(atoms),
            types: self.type_tuple(atoms),
        }
    }

    pub fn labels(&self, atoms: &[AtomId]) -> AtomLabels {
        AtomLabels(atoms.iter().map(|&id| self.atom_label(id)).collect())
    }

    pub fn type_tuple(&self, atoms: &[AtomId]) -> TypeTuple {
        TypeTuple(
            atoms
                .iter()
                .map(|&id| {
                    self.system
                        .atom(id)
                        .map_or_else(|| "?".to_string(), |atom| atom.force_field_type.clone())
                })
                .collect(),
        )
    }

    /// Resolves a role reference relative to `residue_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::MissingNeighbor`] if the referenced sequence neighbor
    /// does not exist, or [`AssignmentError::MissingAtom`] if it lacks the named atom.
    pub fn resolve_role(
        &self,
        residue_id: ResidueId,
        role: RoleRef,
    ) -> Result<AtomId, AssignmentError> {
        let target = if role.offset == 0 {
            residue_id
        } else {
            self.system
                .residue_neighbor(residue_id, role.offset)
                .ok_or_else(|| AssignmentError::MissingNeighbor {
                    residue: self.residue_label(residue_id),
                    offset: role.offset,
                })?
        };
        self.residue(target)?
            .get_atom_id_by_name(role.name)
            .ok_or_else(|| AssignmentError::MissingAtom {
                residue: self.residue_label(target),
                atom_name: role.name.to_string(),
            })
    }

    pub fn resolve_roles<const N: usize>(
        &self,
        residue_id: ResidueId,
        roles: &[RoleRef; N],
    ) -> Result<[AtomId; N], AssignmentError> {
        let mut atoms = [AtomId::default(); N];
        for (slot, &role) in atoms.iter_mut().zip(roles) {
            *slot = self.resolve_role(residue_id, role)?;
        }
        Ok(atoms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::fixtures;

    #[test]
    fn resolve_role_follows_sequence_neighbors() {
        let peptide = fixtures::tripeptide();
        let forcefield = fixtures::forcefield();
        let config = AssignmentConfig::default();
        let context = AssignmentContext::new(&peptide.system, &forcefield, &config);

        let previous_c = context
            .resolve_role(peptide.residues[1], RoleRef::previous("C"))
            .unwrap();
        assert_eq!(context.atom_label(previous_c).to_string(), "A:1:C");
    }

    #[test]
    fn resolve_role_reports_missing_neighbor_and_atom() {
        let peptide = fixtures::tripeptide();
        let forcefield = fixtures::forcefield();
        let config = AssignmentConfig::default();
        let context = AssignmentContext::new(&peptide.system, &forcefield, &config);

        let missing_neighbor = context.resolve_role(peptide.residues[0], RoleRef::previous("C"));
        assert!(matches!(
            missing_neighbor,
            Err(AssignmentError::MissingNeighbor { offset: -1, .. })
        ));

        let missing_atom = context.resolve_role(peptide.residues[1], RoleRef::here("CB"));
        match missing_atom {
            Err(AssignmentError::MissingAtom { residue, atom_name }) => {
                assert_eq!(residue.to_string(), "A:2(GLY)");
                assert_eq!(atom_name, "CB");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_parameter_carries_labels_and_types() {
        let peptide = fixtures::tripeptide();
        let forcefield = fixtures::forcefield();
        let config = AssignmentConfig::default();
        let context = AssignmentContext::new(&peptide.system, &forcefield, &config);

        let n = peptide.atom(0, "N");
        let ca = peptide.atom(0, "CA");
        let error = context.missing_parameter(InteractionKind::BondedPair, &[n, ca]);
        assert_eq!(
            error,
            AssignmentError::MissingParameter {
                kind: InteractionKind::BondedPair,
                atoms: AtomLabels(vec![
                    AtomLabel {
                        chain: 'A',
                        residue_number: 1,
                        atom_name: "N".into()
                    },
                    AtomLabel {
                        chain: 'A',
                        residue_number: 1,
                        atom_name: "CA".into()
                    },
                ]),
                types: TypeTuple(vec!["NH3".into(), "CT1".into()]),
            }
        );
    }
}
