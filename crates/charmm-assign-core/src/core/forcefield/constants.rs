/// Electrostatic conversion factor 1/(4πε₀) in kJ·mol⁻¹·nm·e⁻², matching the nm/kJ units
/// of the GROMACS-formatted CHARMM36 tables.
pub const COULOMB_CONSTANT: f64 = 138.935485;

/// Reference mass of hydrogen in atomic mass units.
pub const HYDROGEN_MASS: f64 = 1.008;

/// Tolerance used when comparing an atom mass against [`HYDROGEN_MASS`].
pub const MASS_TOLERANCE: f64 = 1e-6;

#[inline]
pub fn is_hydrogen_mass(mass: f64) -> bool {
    (mass - HYDROGEN_MASS).abs() < MASS_TOLERANCE
}
