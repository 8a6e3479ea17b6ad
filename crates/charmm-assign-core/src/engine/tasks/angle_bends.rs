use crate::core::forcefield::interactions::{AngleBendInteraction, InteractionKind};
use crate::core::forcefield::lookup::{EITHER_ORIENTATION, resolve_first_by_row};
use crate::engine::context::AssignmentContext;
use crate::engine::error::AssignmentError;
use tracing::{info, instrument};

/// Emits one record per vertex atom and unordered pair of its neighbors.
///
/// The outer atoms are ordered canonically, so `atoms[0]` precedes `atoms[2]`.
#[instrument(skip_all, name = "angle_bend_task")]
pub fn run(context: &AssignmentContext) -> Result<Vec<AngleBendInteraction>, AssignmentError> {
    let system = context.system;
    let table = &context.forcefield.tables.angle_bends;
    let positions = system.sequence_positions();

    let mut interactions = Vec::new();
    for (vertex, _) in system.ordered_atoms() {
        let mut neighbors = context.bonded_neighbors(vertex).to_vec();
        if neighbors.len() < 2 {
            continue;
        }
        if neighbors.iter().any(|&n| !positions.contains_key(n)) {
            return Err(AssignmentError::Internal(format!(
                "Neighbor of atom {vertex:?} not ordered"
            )));
        }
        neighbors.sort_by_key(|&n| positions[n]);

        for (i, &atom1) in neighbors.iter().enumerate() {
            for &atom3 in &neighbors[i + 1..] {
                let atoms = [atom1, vertex, atom3];
                let types = [
                    context.atom_type(atom1)?,
                    context.atom_type(vertex)?,
                    context.atom_type(atom3)?,
                ];
                let parameter = resolve_first_by_row(table, &types, EITHER_ORIENTATION)
                    .ok_or_else(|| context.missing_parameter(InteractionKind::AngleBend, &atoms))?
                    .entry;

                interactions.push(AngleBendInteraction {
                    atoms,
                    theta0: parameter.theta0,
                    k0: parameter.k0,
                    r13: parameter.r13,
                    kub: parameter.kub,
                });
            }
        }
    }

    info!(
        count = interactions.len(),
        "Angle-bend assignment complete."
    );
    Ok(interactions)
}
