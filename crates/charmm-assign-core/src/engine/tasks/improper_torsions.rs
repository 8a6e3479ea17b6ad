use crate::core::forcefield::interactions::{ImproperTorsionInteraction, InteractionKind};
use crate::core::forcefield::lookup::{IMPROPER_ORDER, resolve_first};
use crate::core::topology::impropers::{TemplateError, improper_templates};
use crate::engine::context::AssignmentContext;
use crate::engine::error::AssignmentError;
use tracing::{info, instrument, trace};

/// Instantiates the improper templates of every residue and resolves each quadruple.
///
/// Records keep the atoms in template order, whichever orientation matched.
///
/// # Errors
///
/// Fails on the first residue whose type has no template set, a histidine with no
/// detectable tautomer, a template atom that cannot be located, or a quadruple
/// with no table entry.
#[instrument(skip_all, name = "improper_torsion_task")]
pub fn run(
    context: &AssignmentContext,
) -> Result<Vec<ImproperTorsionInteraction>, AssignmentError> {
    let table = &context.forcefield.tables.impropers;

    let mut interactions = Vec::new();
    for residue_id in context.system.ordered_residue_ids() {
        let residue = context.residue(residue_id)?;
        let templates = improper_templates(residue).map_err(|e| match e {
            TemplateError::UnknownResidueType(_) => AssignmentError::UnknownResidueType {
                residue: context.residue_label(residue_id),
            },
            TemplateError::UnknownProtonationState => AssignmentError::UnknownProtonationState {
                residue: context.residue_label(residue_id),
            },
        })?;
        trace!(
            residue = %context.residue_label(residue_id),
            templates = templates.len(),
            "Instantiated improper templates."
        );

        for template in &templates {
            let atoms = context.resolve_roles(residue_id, template)?;
            let types = [
                context.atom_type(atoms[0])?,
                context.atom_type(atoms[1])?,
                context.atom_type(atoms[2])?,
                context.atom_type(atoms[3])?,
            ];
            let parameter = resolve_first(table, &types, IMPROPER_ORDER)
                .ok_or_else(|| context.missing_parameter(InteractionKind::ImproperTorsion, &atoms))?
                .entry;

            interactions.push(ImproperTorsionInteraction {
                atoms,
                phi0: parameter.phi0,
                cp: parameter.cp,
            });
        }
    }

    info!(
        count = interactions.len(),
        "Improper-torsion assignment complete."
    );
    Ok(interactions)
}
