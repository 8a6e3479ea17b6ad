//! Shared test fixtures: an N-Ala-Gly-Ala-C tripeptide with CHARMM36 atom types and a
//! parameter set that covers every interaction it contains.

use super::atom::Atom;
use super::ids::{AtomId, ResidueId};
use super::system::MolecularSystem;
use crate::core::forcefield::params::{Forcefield, ParameterSources, ParameterTables};
use crate::core::forcefield::solvation::{SolvationEntry, SolvationTables};
use nalgebra::Point3;

const ELEMENT_MASSES: [(&str, f64); 4] =
    [("C", 12.011), ("N", 14.007), ("O", 15.999), ("H", 1.008)];

/// Mass by the first letter of the atom name, which is the element for every atom here.
fn mass_of(atom_name: &str) -> f64 {
    let element = &atom_name[..1];
    ELEMENT_MASSES
        .iter()
        .find(|(symbol, _)| *symbol == element)
        .map(|&(_, mass)| mass)
        .unwrap()
}

/// `(name, type, charge)` per residue, in insertion order.
const ALA_N_TERMINAL: &[(&str, &str, f64)] = &[
    ("N", "NH3", -0.30),
    ("HT1", "HC", 0.33),
    ("HT2", "HC", 0.33),
    ("HT3", "HC", 0.33),
    ("CA", "CT1", 0.21),
    ("HA", "HB1", 0.10),
    ("CB", "CT3", -0.27),
    ("HB1", "HA3", 0.09),
    ("HB2", "HA3", 0.09),
    ("HB3", "HA3", 0.09),
    ("C", "C", 0.51),
    ("O", "O", -0.51),
];

const GLY_INTERNAL: &[(&str, &str, f64)] = &[
    ("N", "NH1", -0.47),
    ("HN", "H", 0.31),
    ("CA", "CT2", -0.02),
    ("HA1", "HB2", 0.09),
    ("HA2", "HB2", 0.09),
    ("C", "C", 0.51),
    ("O", "O", -0.51),
];

const ALA_C_TERMINAL: &[(&str, &str, f64)] = &[
    ("N", "NH1", -0.47),
    ("HN", "H", 0.31),
    ("CA", "CT1", 0.07),
    ("HA", "HB1", 0.09),
    ("CB", "CT3", -0.27),
    ("HB1", "HA3", 0.09),
    ("HB2", "HA3", 0.09),
    ("HB3", "HA3", 0.09),
    ("C", "CC", 0.34),
    ("O", "OC", -0.67),
    ("OXT", "OC", -0.67),
];

/// A free amino acid: charged amine and carboxylate on the same residue.
const ALA_ZWITTERION: &[(&str, &str, f64)] = &[
    ("N", "NH3", -0.30),
    ("HT1", "HC", 0.33),
    ("HT2", "HC", 0.33),
    ("HT3", "HC", 0.33),
    ("CA", "CT1", 0.21),
    ("HA", "HB1", 0.10),
    ("CB", "CT3", -0.27),
    ("HB1", "HA3", 0.09),
    ("HB2", "HA3", 0.09),
    ("HB3", "HA3", 0.09),
    ("C", "CC", 0.34),
    ("O", "OC", -0.67),
    ("OXT", "OC", -0.67),
];

const ALA_BONDS: &[(&str, &str)] = &[
    ("N", "CA"),
    ("CA", "HA"),
    ("CA", "CB"),
    ("CB", "HB1"),
    ("CB", "HB2"),
    ("CB", "HB3"),
    ("CA", "C"),
    ("C", "O"),
];

const GLY_BONDS: &[(&str, &str)] = &[
    ("N", "HN"),
    ("N", "CA"),
    ("CA", "HA1"),
    ("CA", "HA2"),
    ("CA", "C"),
    ("C", "O"),
];

pub(crate) struct Tripeptide {
    pub system: MolecularSystem,
    pub residues: [ResidueId; 3],
}

impl Tripeptide {
    pub fn atom(&self, residue_index: usize, name: &str) -> AtomId {
        self.system
            .residue(self.residues[residue_index])
            .and_then(|residue| residue.get_atom_id_by_name(name))
            .unwrap()
    }
}

fn add_residue(
    system: &mut MolecularSystem,
    number: isize,
    name: &str,
    atoms: &[(&str, &str, f64)],
) -> ResidueId {
    let chain_id = system.add_chain('A');
    let residue_id = system.add_residue(chain_id, number, name).unwrap();
    for (i, &(atom_name, atom_type, charge)) in atoms.iter().enumerate() {
        let position = Point3::new(number as f64 * 3.8, i as f64 * 0.5, 0.0);
        let atom = Atom::new(atom_name, residue_id, position).with_force_field(
            atom_type,
            charge,
            mass_of(atom_name),
        );
        system.add_atom_to_residue(residue_id, atom).unwrap();
    }
    residue_id
}

fn add_bonds(system: &mut MolecularSystem, residue_id: ResidueId, bonds: &[(&str, &str)]) {
    for &(a, b) in bonds {
        system
            .add_bond_by_name(residue_id, a, residue_id, b)
            .unwrap();
    }
}

/// Builds the tripeptide with termini marked and all 29 covalent bonds.
pub(crate) fn tripeptide() -> Tripeptide {
    let mut system = MolecularSystem::new();
    let ala1 = add_residue(&mut system, 1, "ALA", ALA_N_TERMINAL);
    let gly2 = add_residue(&mut system, 2, "GLY", GLY_INTERNAL);
    let ala3 = add_residue(&mut system, 3, "ALA", ALA_C_TERMINAL);

    add_bonds(
        &mut system,
        ala1,
        &[("N", "HT1"), ("N", "HT2"), ("N", "HT3")],
    );
    add_bonds(&mut system, ala1, ALA_BONDS);
    add_bonds(&mut system, gly2, GLY_BONDS);
    add_bonds(&mut system, ala3, &[("N", "HN")]);
    add_bonds(&mut system, ala3, ALA_BONDS);
    add_bonds(&mut system, ala3, &[("C", "OXT")]);
    system.add_bond_by_name(ala1, "C", gly2, "N").unwrap();
    system.add_bond_by_name(gly2, "C", ala3, "N").unwrap();

    let chain_id = system.find_chain_by_id('A').unwrap();
    system.mark_termini(chain_id).unwrap();

    Tripeptide {
        system,
        residues: [ala1, gly2, ala3],
    }
}

/// Builds a single-residue chain holding one zwitterionic alanine.
pub(crate) fn free_alanine() -> (MolecularSystem, ResidueId) {
    let mut system = MolecularSystem::new();
    let ala = add_residue(&mut system, 1, "ALA", ALA_ZWITTERION);
    add_bonds(
        &mut system,
        ala,
        &[("N", "HT1"), ("N", "HT2"), ("N", "HT3")],
    );
    add_bonds(&mut system, ala, ALA_BONDS);
    add_bonds(&mut system, ala, &[("C", "OXT")]);

    let chain_id = system.find_chain_by_id('A').unwrap();
    system.mark_termini(chain_id).unwrap();
    (system, ala)
}

pub(crate) const BONDS: &str = "\
[ bondtypes ]
; i     j   func    b0          kb
NH3   HC    1   0.10400000  337230.40
NH3   CT1   1   0.14800000  167360.00
CT1   HB1   1   0.10800000  276144.00
CT1   CT3   1   0.15380000  186188.00
CT3   HA3   1   0.11110000  269449.60
C     CT1   1   0.14900000  209200.00 ; listed in reverse
C     O     1   0.12300000  518816.00
C     NH1   1   0.13450000  309616.00
NH1   H     1   0.09970000  365681.60
NH1   CT2   1   0.14300000  267776.00
CT2   HB2   1   0.10800000  276144.00
CT2   C     1   0.14900000  209200.00
NH1   CT1   1   0.14300000  267776.00
CT1   CC    1   0.15220000  166944.00
CC    OC    1   0.12600000  439320.00
";

pub(crate) const ANGLES: &str = "\
[ angletypes ]
; i   j     k   func  theta0    k0       r13        kub
HC    NH3   HC    5   109.50  334.72   0.00000000   0.00
HC    NH3   CT1   5   109.50  251.04   0.00000000   0.00
NH3   CT1   HB1   5   107.50  430.96   0.00000000   0.00
NH3   CT1   CT3   5   109.50  564.84   0.00000000   0.00
NH3   CT1   C     5   110.00  359.82   0.00000000   0.00
HB1   CT1   CT3   5   111.00  292.88   0.21790000   18853.10
HB1   CT1   C     5   109.50  418.40   0.00000000   0.00
CT3   CT1   C     5   108.00  435.14   0.00000000   0.00
CT1   CT3   HA3   5   110.10  283.68   0.21790000   18853.10
HA3   CT3   HA3   5   108.40  297.06   0.18020000   4518.72
CT1   C     O     5   121.00  665.71   0.00000000   0.00
CT1   C     NH1   5   116.50  401.66   0.00000000   0.00
O     C     NH1   5   122.50  669.44   0.00000000   0.00
C     NH1   H     5   123.00  284.51   0.00000000   0.00
C     NH1   CT2   5   120.00  418.40   0.00000000   0.00
H     NH1   CT2   5   117.00  284.51   0.00000000   0.00
NH1   CT2   HB2   5   108.00  403.75   0.00000000   0.00
NH1   CT2   C     5   107.00  418.40   0.00000000   0.00
HB2   CT2   HB2   5   109.50  301.25   0.00000000   0.00
HB2   CT2   C     5   109.50  418.40   0.00000000   0.00
CT2   C     O     5   121.00  502.08   0.00000000   0.00
CT2   C     NH1   5   116.50  401.66   0.00000000   0.00
C     NH1   CT1   5   120.00  418.40   0.00000000   0.00
H     NH1   CT1   5   117.00  284.51   0.00000000   0.00
HB1   CT1   NH1   5   108.00  405.85   0.00000000   0.00 ; listed in reverse
NH1   CT1   CT3   5   113.50  585.76   0.00000000   0.00
NH1   CT1   CC    5   107.00  418.40   0.00000000   0.00
HB1   CT1   CC    5   109.50  418.40   0.00000000   0.00
CT3   CT1   CC    5   108.00  435.14   0.00000000   0.00
CT1   CC    OC    5   118.00  334.72   0.00000000   0.00
OC    CC    OC    5   124.00  836.80   0.22250000   58576.00
";

/// One two-term exact dihedral (`CT2 NH1 C CT1`, matched reversed), one single-term
/// exact dihedral (`HB1 CT1 C O`), and a wildcard entry for every central bond.
pub(crate) const DIHEDRALS: &str = "\
[ dihedraltypes ]
; i   j     k     l   func  phi0     cp       mult
CT2   NH1   C     CT1   9   180.00   6.27600   1
CT2   NH1   C     CT1   9     0.00   1.67360   2
HB1   CT1   C     O     9     0.00   0.00000   1
X     NH3   CT1   X     9     0.00   0.41840   3
X     CT1   CT3   X     9     0.00   0.83680   3
X     C     CT1   X     9     0.00   0.00000   1 ; listed in reverse
X     C     NH1   X     9   180.00  10.46000   2
X     NH1   CT2   X     9     0.00   0.00000   1
X     CT2   C     X     9     0.00   0.00000   1
X     NH1   CT1   X     9     0.00   0.00000   1
X     CT1   CC    X     9     0.00   0.20920   6
";

pub(crate) const IMPROPERS: &str = "\
[ dihedraltypes ]
; i   j     k     l   func  q0       cq
NH1   X     X     H     2     0.00   167.36000
O     X     X     C     2     0.00   1004.16000
OC    X     X     CC    2     0.00   803.32800
";

pub(crate) const ATOMTYPES: &str = "\
[ atomtypes ]
; name  at.num  mass     charge  ptype  sigma            epsilon
NH3     7      14.007    -0.30   A      0.329632525712   0.8368
HC      1       1.008     0.33   A      0.0400013524445  0.192464
CT1     6      12.011     0.00   A      0.356359487256   0.08368
HB1     1       1.008     0.00   A      0.235197261589   0.092048
CT3     6      12.011     0.00   A      0.365268474438   0.326352
HA3     1       1.008     0.00   A      0.238760856462   0.100416
C       6      12.011     0.51   A      0.356359487256   0.46024
O       8      15.999    -0.51   A      0.302905564168   0.50208
NH1     7      14.007    -0.47   A      0.329632525712   0.8368
H       1       1.008     0.31   A      0.0400013524445  0.192464
CT2     6      12.011     0.00   A      0.358141284692   0.234304
HB2     1       1.008     0.00   A      0.235197261589   0.092048
CC      6      12.011     0.00   A      0.356359487256   0.29288
OC      8      15.999     0.00   A      0.302905564168   0.50208
";

pub(crate) const PAIRTYPES: &str = "\
[ pairtypes ]
; i   j   func  sigma14        epsilon14
O     CT3   1   0.33408732     0.1673600 ; listed in reverse
CT2   CT2   1   0.33854384     0.0418400
";

pub(crate) const SOLVATION_CSV: &str = "\
atom_type,volume,dg_ref,dg_free,lambda,radius
NH3,11.2,-20.0,-20.0,6.0,1.65
CT1,11.507,-0.187,-0.187,3.5,2.365
CT3,33.5,1.089,1.089,3.5,2.165
C,14.72,0.0,0.0,3.5,2.09
O,10.8,-5.33,-5.33,3.5,1.7
NH1,4.4,-5.95,-5.95,3.5,1.65
CT2,18.85,0.372,0.372,3.5,2.235
CC,14.72,0.0,0.0,3.5,2.0
OC,10.8,-10.0,-10.0,6.0,1.7
";

pub(crate) fn sources() -> ParameterSources<'static> {
    ParameterSources {
        bonds: BONDS,
        angles: ANGLES,
        dihedrals: DIHEDRALS,
        impropers: IMPROPERS,
        atomtypes: ATOMTYPES,
        pairtypes: PAIRTYPES,
    }
}

pub(crate) fn tables() -> ParameterTables {
    ParameterTables::parse(&sources()).unwrap()
}

pub(crate) fn solvation() -> SolvationTables {
    let mut reader = csv::Reader::from_reader(SOLVATION_CSV.as_bytes());
    let entries: Vec<SolvationEntry> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    SolvationTables::from_entries(&entries).unwrap()
}

pub(crate) fn forcefield() -> Forcefield {
    Forcefield::new(tables(), Some(solvation()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tripeptide_has_expected_size_and_termini() {
        let peptide = tripeptide();
        assert_eq!(peptide.system.atom_count(), 30);
        assert_eq!(peptide.system.bonds().len(), 29);

        let residues: Vec<_> = peptide
            .residues
            .iter()
            .map(|&id| peptide.system.residue(id).unwrap())
            .collect();
        assert!(residues[0].is_n_terminal());
        assert!(!residues[1].is_n_terminal() && !residues[1].is_c_terminal());
        assert!(residues[2].is_c_terminal());
    }

    #[test]
    fn free_alanine_is_both_termini() {
        let (system, ala) = free_alanine();
        assert_eq!(system.atom_count(), 13);
        assert_eq!(system.bonds().len(), 12);
        let residue = system.residue(ala).unwrap();
        assert!(residue.is_n_terminal() && residue.is_c_terminal());
    }

    #[test]
    fn fixture_tables_parse_completely() {
        let tables = tables();
        assert_eq!(tables.bonded_pairs.len(), 15);
        assert_eq!(tables.angle_bends.len(), 31);
        assert_eq!(tables.torsions.len(), 11);
        assert_eq!(tables.impropers.len(), 3);
        assert_eq!(tables.non_bonded.len(), 14);
        assert_eq!(tables.non_bonded_14.len(), 2);
        assert_eq!(solvation().len(), 9);
    }
}
