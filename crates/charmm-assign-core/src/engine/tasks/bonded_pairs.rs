use crate::core::forcefield::interactions::{BondedPairInteraction, InteractionKind};
use crate::core::forcefield::lookup::{EITHER_ORIENTATION, resolve_first_by_row};
use crate::engine::context::AssignmentContext;
use crate::engine::error::AssignmentError;
use tracing::{info, instrument};

/// Emits one record per covalent bond, in canonical atom order.
///
/// # Errors
///
/// Returns [`AssignmentError::MissingParameter`] for the first bond whose type pair
/// has no entry in either orientation.
#[instrument(skip_all, name = "bonded_pair_task")]
pub fn run(context: &AssignmentContext) -> Result<Vec<BondedPairInteraction>, AssignmentError> {
    let system = context.system;
    let table = &context.forcefield.tables.bonded_pairs;
    let positions = system.sequence_positions();

    let mut interactions = Vec::with_capacity(system.bonds().len());
    for (atom1, position1) in system.ordered_atoms() {
        for &atom2 in context.bonded_neighbors(atom1) {
            let position2 = positions
                .get(atom2)
                .ok_or_else(|| AssignmentError::Internal(format!("Atom {atom2:?} not ordered")))?;
            if *position2 <= position1 {
                continue;
            }

            let types = [context.atom_type(atom1)?, context.atom_type(atom2)?];
            let parameter = resolve_first_by_row(table, &types, EITHER_ORIENTATION)
                .ok_or_else(|| {
                    context.missing_parameter(InteractionKind::BondedPair, &[atom1, atom2])
                })?
                .entry;

            interactions.push(BondedPairInteraction {
                atoms: [atom1, atom2],
                r0: parameter.r0,
                kb: parameter.kb,
            });
        }
    }

    info!(
        count = interactions.len(),
        "Bonded-pair assignment complete."
    );
    Ok(interactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::params::{Forcefield, ParameterTables};
    use crate::core::models::fixtures;
    use crate::engine::config::AssignmentConfig;
    use std::collections::HashSet;

    #[test]
    fn every_bond_is_emitted_once_in_canonical_order() {
        let peptide = fixtures::tripeptide();
        let forcefield = fixtures::forcefield();
        let config = AssignmentConfig::default();
        let context = AssignmentContext::new(&peptide.system, &forcefield, &config);

        let pairs = run(&context).unwrap();
        assert_eq!(pairs.len(), 29);

        let positions = peptide.system.sequence_positions();
        let mut seen = HashSet::new();
        for pair in &pairs {
            assert!(positions[pair.atoms[0]] < positions[pair.atoms[1]]);
            assert!(seen.insert(pair.atoms));
        }
    }

    #[test]
    fn reversed_table_entry_resolves_bond() {
        let peptide = fixtures::tripeptide();
        let forcefield = fixtures::forcefield();
        let config = AssignmentConfig::default();
        let context = AssignmentContext::new(&peptide.system, &forcefield, &config);

        let ca = peptide.atom(0, "CA");
        let c = peptide.atom(0, "C");
        let pairs = run(&context).unwrap();
        let pair = pairs.iter().find(|p| p.atoms == [ca, c]).unwrap();
        assert_eq!(pair.r0, 0.149);
        assert_eq!(pair.kb, 209200.0);
    }

    #[test]
    fn peptide_bond_links_residues() {
        let peptide = fixtures::tripeptide();
        let forcefield = fixtures::forcefield();
        let config = AssignmentConfig::default();
        let context = AssignmentContext::new(&peptide.system, &forcefield, &config);

        let c1 = peptide.atom(0, "C");
        let n2 = peptide.atom(1, "N");
        let pairs = run(&context).unwrap();
        let pair = pairs.iter().find(|p| p.atoms == [c1, n2]).unwrap();
        assert_eq!(pair.r0, 0.1345);
    }

    #[test]
    fn missing_bond_type_is_fatal() {
        let peptide = fixtures::tripeptide();
        let mut tables: ParameterTables = fixtures::tables();
        tables
            .bonded_pairs
            .retain(|p| p.types.iter().all(|t| t.to_string() != "OC"));
        let forcefield = Forcefield::new(tables, None);
        let config = AssignmentConfig::default();
        let context = AssignmentContext::new(&peptide.system, &forcefield, &config);

        match run(&context) {
            Err(AssignmentError::MissingParameter { kind, atoms, types }) => {
                assert_eq!(kind, InteractionKind::BondedPair);
                assert_eq!(atoms.to_string(), "A:3:C, A:3:O");
                assert_eq!(types.to_string(), "CC OC");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
