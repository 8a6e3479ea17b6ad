use crate::core::forcefield::constants::{COULOMB_CONSTANT, is_hydrogen_mass};
use crate::core::forcefield::interactions::{
    InteractionKind, NonBondedInteraction, SolvationFactors,
};
use crate::core::forcefield::lookup::{EITHER_ORIENTATION, resolve_first_by_row};
use crate::core::forcefield::params::{NonBonded14Parameter, NonBondedParameter};
use crate::core::forcefield::solvation::SolvationTables;
use crate::core::models::ids::AtomId;
use crate::core::topology::distance::{Separation, distances_from};
use crate::engine::context::AssignmentContext;
use crate::engine::error::AssignmentError;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Farthest topological distance that changes how a pair is treated.
const SEPARATION_HORIZON: usize = 3;

/// Per-atom inputs to the pair sweep, resolved once up front.
struct PairSite<'a> {
    id: AtomId,
    atom_type: &'a str,
    charge: f64,
    base: &'a NonBondedParameter,
    /// Solvation table index; `None` for hydrogens or when solvation is off.
    solvation_index: Option<usize>,
}

/// Arithmetic-mean sigma, geometric-mean epsilon.
#[inline]
fn combine(a: &NonBondedParameter, b: &NonBondedParameter) -> (f64, f64) {
    ((a.sigma + b.sigma) / 2.0, (a.epsilon * b.epsilon).sqrt())
}

fn resolve_sites<'a>(
    context: &AssignmentContext<'a>,
    solvation: Option<&SolvationTables>,
) -> Result<Vec<PairSite<'a>>, AssignmentError> {
    let tables = &context.forcefield.tables;
    context
        .system
        .ordered_atoms()
        .into_iter()
        .map(|(id, _)| -> Result<PairSite<'a>, AssignmentError> {
            let atom = context.atom(id)?;
            let atom_type = atom.force_field_type.as_str();
            let base = tables
                .non_bonded_for(atom_type)
                .ok_or_else(|| context.missing_parameter(InteractionKind::NonBonded, &[id]))?;

            let solvation_index = match solvation {
                Some(solvation) if !is_hydrogen_mass(atom.mass) => {
                    let index = solvation.index_of(atom_type).ok_or_else(|| {
                        AssignmentError::MissingSolvationType {
                            atom: context.atom_label(id),
                            atom_type: atom_type.to_string(),
                        }
                    })?;
                    Some(index)
                }
                _ => None,
            };

            Ok(PairSite {
                id,
                atom_type,
                charge: atom.partial_charge,
                base,
                solvation_index,
            })
        })
        .collect()
}

fn assign_row(
    context: &AssignmentContext,
    sites: &[PairSite],
    i: usize,
    pairs_14: &[NonBonded14Parameter],
    solvation: Option<&SolvationTables>,
) -> Vec<NonBondedInteraction> {
    let first = &sites[i];
    let distances = distances_from(context.system, first.id, Some(SEPARATION_HORIZON));

    let mut row = Vec::new();
    for second in &sites[i + 1..] {
        let separation = Separation::from_distance(distances.get(second.id).copied());
        let (sigma, epsilon, is_14) = match separation {
            Separation::Excluded => continue,
            Separation::OneFour => {
                let types = [first.atom_type, second.atom_type];
                match resolve_first_by_row(pairs_14, &types, EITHER_ORIENTATION) {
                    Some(resolved) => (resolved.entry.sigma, resolved.entry.epsilon, true),
                    None => {
                        let (sigma, epsilon) = combine(first.base, second.base);
                        (sigma, epsilon, true)
                    }
                }
            }
            Separation::Full => {
                let (sigma, epsilon) = combine(first.base, second.base);
                (sigma, epsilon, false)
            }
        };

        let factors = match (solvation, first.solvation_index, second.solvation_index) {
            (Some(tables), Some(a), Some(b)) if !is_14 => Some(SolvationFactors {
                fac_12: tables.factor(a, b),
                fac_21: tables.factor(b, a),
                r_vdw_1: tables.radius(a),
                r_vdw_2: tables.radius(b),
                lambda_1: tables.lambda(a),
                lambda_2: tables.lambda(b),
            }),
            _ => None,
        };

        let sigma6 = sigma.powi(6);
        row.push(NonBondedInteraction {
            atoms: [first.id, second.id],
            qq: first.charge * second.charge * COULOMB_CONSTANT,
            sigma,
            epsilon,
            c6: 4.0 * epsilon * sigma6,
            c12: 4.0 * epsilon * sigma6 * sigma6,
            is_14,
            solvation: factors,
        });
    }
    row
}

/// Sweeps every unordered atom pair beyond the 1-3 range and resolves its
/// Lennard-Jones, electrostatic and optional EEF1 constants.
///
/// Pairs three bonds apart take an explicit 1-4 entry when one exists and fall back
/// to the mixing rule otherwise. Solvation factors are attached only to heavy-atom
/// pairs more than three bonds apart, and only when the force field carries
/// solvation tables and `solvation` is enabled in the configuration.
///
/// # Errors
///
/// Returns [`AssignmentError::MissingParameter`] if an atom type has no base
/// non-bonded entry, or [`AssignmentError::MissingSolvationType`] if a heavy atom's
/// type is absent from the solvation tables.
#[instrument(skip_all, name = "non_bonded_task")]
pub fn run(context: &AssignmentContext) -> Result<Vec<NonBondedInteraction>, AssignmentError> {
    let solvation = if context.config.solvation {
        context.forcefield.solvation.as_ref()
    } else {
        None
    };
    if context.config.solvation && solvation.is_none() {
        debug!("Force field carries no solvation tables; all pairs are solvation-exempt.");
    }

    let sites = resolve_sites(context, solvation)?;
    let pairs_14 = &context.forcefield.tables.non_bonded_14;

    #[cfg(not(feature = "parallel"))]
    let iterator = 0..sites.len();

    #[cfg(feature = "parallel")]
    let iterator = (0..sites.len()).into_par_iter();

    let rows: Vec<Vec<NonBondedInteraction>> = iterator
        .map(|i| assign_row(context, &sites, i, pairs_14, solvation))
        .collect();
    let interactions: Vec<_> = rows.into_iter().flatten().collect();

    info!(
        count = interactions.len(),
        one_four = interactions.iter().filter(|p| p.is_14).count(),
        solvated = interactions.iter().filter_map(|p| p.solvation).count(),
        "Non-bonded assignment complete."
    );
    Ok(interactions)
}
