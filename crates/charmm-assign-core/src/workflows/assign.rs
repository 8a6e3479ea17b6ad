use crate::core::forcefield::interactions::{
    AngleBendInteraction, BondedPairInteraction, CmapInteraction, ImproperTorsionInteraction,
    NonBondedInteraction, TorsionInteraction,
};
use crate::core::forcefield::params::Forcefield;
use crate::core::models::system::MolecularSystem;
use crate::engine::config::AssignmentConfig;
use crate::engine::context::AssignmentContext;
use crate::engine::error::AssignmentError;
use crate::engine::tasks;
use crate::engine::tasks::torsions::TorsionGap;
use tracing::{info, instrument, warn};

/// Every interaction list of one molecular system, with the torsions that could not be
/// parameterized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignedTopology {
    pub bonded_pairs: Vec<BondedPairInteraction>,
    pub angle_bends: Vec<AngleBendInteraction>,
    pub torsions: Vec<TorsionInteraction>,
    pub torsion_gaps: Vec<TorsionGap>,
    pub improper_torsions: Vec<ImproperTorsionInteraction>,
    pub non_bonded: Vec<NonBondedInteraction>,
    pub cmap: Vec<CmapInteraction>,
}

impl AssignedTopology {
    /// `false` when at least one torsion was left without parameters.
    pub fn is_complete(&self) -> bool {
        self.torsion_gaps.is_empty()
    }
}

/// Runs every assigner over `system`.
///
/// # Errors
///
/// Stops at the first fatal [`AssignmentError`]; torsion gaps are fatal only when
/// `config.strict_torsions` is set.
#[instrument(skip_all, name = "assignment_workflow")]
pub fn run(
    system: &MolecularSystem,
    forcefield: &Forcefield,
    config: &AssignmentConfig,
) -> Result<AssignedTopology, AssignmentError> {
    info!(
        atoms = system.atom_count(),
        "Starting parameter assignment."
    );
    let context = AssignmentContext::new(system, forcefield, config);

    let bonded_pairs = tasks::bonded_pairs::run(&context)?;
    let angle_bends = tasks::angle_bends::run(&context)?;
    let torsion_assignment = tasks::torsions::run(&context)?;
    let improper_torsions = tasks::improper_torsions::run(&context)?;
    let non_bonded = tasks::non_bonded::run(&context)?;
    let cmap = tasks::cmap::run(&context)?;

    let topology = AssignedTopology {
        bonded_pairs,
        angle_bends,
        torsions: torsion_assignment.interactions,
        torsion_gaps: torsion_assignment.gaps,
        improper_torsions,
        non_bonded,
        cmap,
    };

    if !topology.is_complete() {
        warn!(
            gaps = topology.torsion_gaps.len(),
            "Assignment is incomplete: some torsions have no parameters."
        );
    }
    info!(
        bonded_pairs = topology.bonded_pairs.len(),
        angle_bends = topology.angle_bends.len(),
        torsions = topology.torsions.len(),
        improper_torsions = topology.improper_torsions.len(),
        non_bonded = topology.non_bonded.len(),
        cmap = topology.cmap.len(),
        "Parameter assignment complete."
    );
    Ok(topology)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::interactions::{CmapClass, InteractionKind};
    use crate::core::models::fixtures;
    use crate::engine::config::AssignmentConfigBuilder;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn assigns_every_interaction_of_the_tripeptide() {
        let peptide = fixtures::tripeptide();
        let forcefield = fixtures::forcefield();
        let topology = run(&peptide.system, &forcefield, &AssignmentConfig::default()).unwrap();

        assert!(topology.is_complete());
        assert_eq!(topology.bonded_pairs.len(), 29);
        assert_eq!(topology.angle_bends.len(), 51);
        assert_eq!(topology.torsions.len(), 66);
        assert_eq!(topology.improper_torsions.len(), 5);
        assert_eq!(topology.non_bonded.len(), 355);
        assert_eq!(topology.cmap.len(), 1);
        assert_eq!(topology.cmap[0].class, CmapClass::Glycine);
    }

    #[test]
    fn forcefield_loaded_from_disk_gives_the_same_result() {
        let dir = tempdir().unwrap();
        let files = [
            ("bonds.itp", fixtures::BONDS),
            ("angles.itp", fixtures::ANGLES),
            ("dihedrals.itp", fixtures::DIHEDRALS),
            ("impropers.itp", fixtures::IMPROPERS),
            ("atomtypes.itp", fixtures::ATOMTYPES),
            ("pairtypes.itp", fixtures::PAIRTYPES),
            ("eef1.csv", fixtures::SOLVATION_CSV),
        ];
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        fs::write(
            dir.path().join("forcefield.toml"),
            r#"
            [parameters]
            bonds = "bonds.itp"
            angles = "angles.itp"
            dihedrals = "dihedrals.itp"
            impropers = "impropers.itp"
            atomtypes = "atomtypes.itp"
            pairtypes = "pairtypes.itp"

            [solvation]
            table = "eef1.csv"
            "#,
        )
        .unwrap();

        let peptide = fixtures::tripeptide();
        let config = AssignmentConfig::default();
        let loaded = Forcefield::load(&dir.path().join("forcefield.toml")).unwrap();
        let from_disk = run(&peptide.system, &loaded, &config).unwrap();
        let in_memory = run(&peptide.system, &fixtures::forcefield(), &config).unwrap();
        assert_eq!(from_disk, in_memory);
    }

    #[test]
    fn torsion_gaps_mark_the_result_incomplete() {
        let peptide = fixtures::tripeptide();
        let mut tables = fixtures::tables();
        tables.torsions.retain(|p| {
            let labels: Vec<_> = p.types.iter().map(ToString::to_string).collect();
            labels != ["X", "NH3", "CT1", "X"]
        });
        let forcefield = Forcefield::new(tables, Some(fixtures::solvation()));

        let topology = run(&peptide.system, &forcefield, &AssignmentConfig::default()).unwrap();
        assert!(!topology.is_complete());
        assert_eq!(topology.torsion_gaps.len(), 9);

        let strict = AssignmentConfigBuilder::new().strict_torsions(true).build();
        assert!(matches!(
            run(&peptide.system, &forcefield, &strict),
            Err(AssignmentError::MissingParameter {
                kind: InteractionKind::Torsion,
                ..
            })
        ));
    }

    #[test]
    fn fatal_errors_abort_the_run() {
        let peptide = fixtures::tripeptide();
        let mut tables = fixtures::tables();
        tables.bonded_pairs.clear();
        let forcefield = Forcefield::new(tables, None);

        let error = run(&peptide.system, &forcefield, &AssignmentConfig::default()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "No bonded pair parameter for atoms [A:1:N, A:1:HT1] with types (NH3 HC)"
        );
    }
}
