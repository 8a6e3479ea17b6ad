use crate::core::forcefield::interactions::{InteractionKind, TorsionInteraction};
use crate::core::forcefield::lookup::{
    EITHER_ORIENTATION, Resolved, TORSION_WILDCARDS, resolve_all, resolve_first,
};
use crate::core::forcefield::params::TorsionParameter;
use crate::core::models::ids::AtomId;
use crate::engine::context::AssignmentContext;
use crate::engine::error::{AssignmentError, AtomLabels, TypeTuple};
use tracing::{info, instrument, warn};

/// A proper dihedral for which no table entry, exact or wildcard, exists.
#[derive(Debug, Clone, PartialEq)]
pub struct TorsionGap {
    pub atoms: [AtomId; 4],
    pub labels: AtomLabels,
    pub types: TypeTuple,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TorsionAssignment {
    pub interactions: Vec<TorsionInteraction>,
    pub gaps: Vec<TorsionGap>,
}

fn to_interaction(
    atoms: [AtomId; 4],
    resolved: &Resolved<'_, TorsionParameter>,
) -> TorsionInteraction {
    let [a1, a2, a3, a4] = atoms;
    let atoms = if resolved.strategy.is_reversed() {
        [a4, a3, a2, a1]
    } else {
        atoms
    };
    TorsionInteraction {
        atoms,
        phi0: resolved.entry.phi0,
        cp: resolved.entry.cp,
        multiplicity: resolved.entry.multiplicity,
    }
}

/// Enumerates proper dihedrals around every central bond and resolves each one.
///
/// Every exact entry (either orientation) contributes one Fourier term; the wildcard
/// tier is consulted only when no exact entry exists and yields at most one term.
/// Records matched in reverse list their atoms in table orientation.
///
/// An unresolved dihedral is recorded as a [`TorsionGap`] and logged, unless
/// `strict_torsions` is set, in which case it is fatal.
#[instrument(skip_all, name = "torsion_task")]
pub fn run(context: &AssignmentContext) -> Result<TorsionAssignment, AssignmentError> {
    let system = context.system;
    let table = &context.forcefield.tables.torsions;
    let positions = system.sequence_positions();

    let mut assignment = TorsionAssignment::default();
    for (atom2, position2) in system.ordered_atoms() {
        for &atom3 in context.bonded_neighbors(atom2) {
            let position3 = positions
                .get(atom3)
                .ok_or_else(|| AssignmentError::Internal(format!("Atom {atom3:?} not ordered")))?;
            if *position3 <= position2 {
                continue;
            }

            for &atom1 in context.bonded_neighbors(atom2) {
                if atom1 == atom3 {
                    continue;
                }
                for &atom4 in context.bonded_neighbors(atom3) {
                    if atom4 == atom2 {
                        continue;
                    }
                    let atoms = [atom1, atom2, atom3, atom4];
                    let types = [
                        context.atom_type(atom1)?,
                        context.atom_type(atom2)?,
                        context.atom_type(atom3)?,
                        context.atom_type(atom4)?,
                    ];

                    let exact = resolve_all(table, &types, EITHER_ORIENTATION);
                    if !exact.is_empty() {
                        assignment
                            .interactions
                            .extend(exact.iter().map(|resolved| to_interaction(atoms, resolved)));
                    } else if let Some(resolved) = resolve_first(table, &types, TORSION_WILDCARDS) {
                        assignment
                            .interactions
                            .push(to_interaction(atoms, &resolved));
                    } else if context.config.strict_torsions {
                        return Err(context.missing_parameter(InteractionKind::Torsion, &atoms));
                    } else {
                        let gap = TorsionGap {
                            atoms,
                            labels: context.labels(&atoms),
                            types: context.type_tuple(&atoms),
                        };
                        warn!(
                            atoms = %gap.labels,
                            types = %gap.types,
                            "No torsion parameter found."
                        );
                        assignment.gaps.push(gap);
                    }
                }
            }
        }
    }

    info!(
        count = assignment.interactions.len(),
        gaps = assignment.gaps.len(),
        "Torsion assignment complete."
    );
    Ok(assignment)
}
