use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom of a molecular structure together with its force-field identity.
///
/// The assignment engine never mutates atoms; it reads the force-field type label,
/// partial charge and mass, and refers to the atom by its [`AtomId`](super::ids::AtomId)
/// in every interaction record it emits.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The role name of the atom inside its residue (e.g., "CA", "HN", "OXT").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The CHARMM atom type label (e.g., "CT1", "NH1").
    pub force_field_type: String,
    /// The partial atomic charge in elementary charge units.
    pub partial_charge: f64,
    /// The atomic mass in atomic mass units.
    pub mass: f64,
    /// The 3D coordinates of the atom.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with an empty type label, zero charge and zero mass.
    ///
    /// # Arguments
    ///
    /// * `name` - The role name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            residue_id,
            force_field_type: String::new(),
            partial_charge: 0.0,
            mass: 0.0,
            position,
        }
    }

    /// Sets the force-field identity of the atom, consuming and returning it.
    ///
    /// # Arguments
    ///
    /// * `force_field_type` - The CHARMM atom type label.
    /// * `partial_charge` - The partial charge in elementary charge units.
    /// * `mass` - The atomic mass in atomic mass units.
    pub fn with_force_field(
        mut self,
        force_field_type: &str,
        partial_charge: f64,
        mass: f64,
    ) -> Self {
        self.force_field_type = force_field_type.to_string();
        self.partial_charge = partial_charge;
        self.mass = mass;
        self
    }
}
