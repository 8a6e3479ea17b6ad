use crate::core::forcefield::interactions::CmapInteraction;
use crate::core::topology::cmap::{CMAP_SPAN, classify};
use crate::engine::context::AssignmentContext;
use crate::engine::error::AssignmentError;
use tracing::{info, instrument};

/// Classifies the backbone of every residue that is neither N- nor C-terminal.
///
/// # Errors
///
/// Returns [`AssignmentError::UnknownCmapClass`] for a backbone type tuple outside
/// the six known classes, or a role-resolution error if a spanning atom is absent.
#[instrument(skip_all, name = "cmap_task")]
pub fn run(context: &AssignmentContext) -> Result<Vec<CmapInteraction>, AssignmentError> {
    let mut interactions = Vec::new();
    let residue_ids = context.system.ordered_residue_ids();
    for (residue_index, residue_id) in residue_ids.into_iter().enumerate() {
        let residue = context.residue(residue_id)?;
        if residue.is_n_terminal() || residue.is_c_terminal() {
            continue;
        }

        let atoms = context.resolve_roles(residue_id, &CMAP_SPAN)?;
        let types = [
            context.atom_type(atoms[0])?,
            context.atom_type(atoms[1])?,
            context.atom_type(atoms[2])?,
            context.atom_type(atoms[3])?,
            context.atom_type(atoms[4])?,
        ];
        let class = classify(types).ok_or_else(|| AssignmentError::UnknownCmapClass {
            residue: context.residue_label(residue_id),
            types: context.type_tuple(&atoms),
        })?;

        interactions.push(CmapInteraction {
            residue_id,
            residue_index,
            atoms,
            class,
        });
    }

    info!(count = interactions.len(), "CMAP classification complete.");
    Ok(interactions)
}
