/// Options of an assignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentConfig {
    /// Treat a torsion with no matching parameter as fatal instead of recording a gap.
    pub strict_torsions: bool,
    /// Attach EEF1 factors to eligible non-bonded pairs when the force field carries
    /// solvation tables.
    pub solvation: bool,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            strict_torsions: false,
            solvation: true,
        }
    }
}

#[derive(Default)]
pub struct AssignmentConfigBuilder {
    strict_torsions: Option<bool>,
    solvation: Option<bool>,
}

impl AssignmentConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_torsions(mut self, strict: bool) -> Self {
        self.strict_torsions = Some(strict);
        self
    }
    pub fn solvation(mut self, enabled: bool) -> Self {
        self.solvation = Some(enabled);
        self
    }

    pub fn build(self) -> AssignmentConfig {
        let defaults = AssignmentConfig::default();
        AssignmentConfig {
            strict_torsions: self.strict_torsions.unwrap_or(defaults.strict_torsions),
            solvation: self.solvation.unwrap_or(defaults.solvation),
        }
    }
}
