use super::params::ParamLoadError;
use serde::Deserialize;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::path::Path;
use tracing::debug;

/// One row of an EEF1 solvation parameter file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SolvationEntry {
    pub atom_type: String,
    pub volume: f64,
    pub dg_ref: f64,
    pub dg_free: f64,
    pub lambda: f64,
    pub radius: f64,
}

/// Per-type EEF1 implicit-solvent constants and the asymmetric pairwise
/// desolvation factor matrix, keyed by a dense solvation index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolvationTables {
    type_index: HashMap<String, usize>,
    dg_ref: Vec<f64>,
    radius: Vec<f64>,
    lambda: Vec<f64>,
    factors: Vec<Vec<f64>>,
}

impl SolvationTables {
    /// Builds the tables from pre-computed vectors.
    ///
    /// # Errors
    ///
    /// Returns [`ParamLoadError::InconsistentSolvation`] if the vectors disagree in
    /// length, the factor matrix is not square, or a type maps outside the tables.
    pub fn new(
        type_index: HashMap<String, usize>,
        dg_ref: Vec<f64>,
        radius: Vec<f64>,
        lambda: Vec<f64>,
        factors: Vec<Vec<f64>>,
    ) -> Result<Self, ParamLoadError> {
        let n = radius.len();
        if dg_ref.len() != n || lambda.len() != n || factors.len() != n {
            return Err(ParamLoadError::InconsistentSolvation(format!(
                "expected {n} rows in every table (dg_ref: {}, lambda: {}, factors: {})",
                dg_ref.len(),
                lambda.len(),
                factors.len()
            )));
        }
        if let Some((row, len)) = factors
            .iter()
            .enumerate()
            .map(|(row, values)| (row, values.len()))
            .find(|&(_, len)| len != n)
        {
            return Err(ParamLoadError::InconsistentSolvation(format!(
                "factor row {row} has {len} columns, expected {n}"
            )));
        }
        if let Some((atom_type, &index)) = type_index.iter().find(|&(_, &index)| index >= n) {
            return Err(ParamLoadError::InconsistentSolvation(format!(
                "atom type '{atom_type}' maps to index {index}, but only {n} entries exist"
            )));
        }
        Ok(Self {
            type_index,
            dg_ref,
            radius,
            lambda,
            factors,
        })
    }

    /// Derives the tables from per-type EEF1 entries, indexed in entry order.
    ///
    /// The factor of `i` desolvated by `j` is `2·ΔG_free(i)·V(j) / (4·π^{3/2}·λ(i))`.
    pub fn from_entries(entries: &[SolvationEntry]) -> Result<Self, ParamLoadError> {
        let mut type_index = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.lambda <= 0.0 {
                return Err(ParamLoadError::InconsistentSolvation(format!(
                    "atom type '{}' has non-positive lambda {}",
                    entry.atom_type, entry.lambda
                )));
            }
            if type_index.insert(entry.atom_type.clone(), index).is_some() {
                return Err(ParamLoadError::InconsistentSolvation(format!(
                    "atom type '{}' is listed more than once",
                    entry.atom_type
                )));
            }
        }

        let norm = 4.0 * PI.powf(1.5);
        let factors = entries
            .iter()
            .map(|ei| {
                entries
                    .iter()
                    .map(|ej| 2.0 * ei.dg_free * ej.volume / (norm * ei.lambda))
                    .collect()
            })
            .collect();

        Self::new(
            type_index,
            entries.iter().map(|e| e.dg_ref).collect(),
            entries.iter().map(|e| e.radius).collect(),
            entries.iter().map(|e| e.lambda).collect(),
            factors,
        )
    }

    /// Loads EEF1 entries from a CSV file with the columns
    /// `atom_type,volume,dg_ref,dg_free,lambda,radius`.
    pub fn load_csv(path: &Path) -> Result<Self, ParamLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_path(path)
            .map_err(|e| ParamLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let entries = reader
            .deserialize::<SolvationEntry>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParamLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        debug!(path = %path.display(), entries = entries.len(), "Loaded solvation table.");

        Self::from_entries(&entries)
    }

    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }

    pub fn index_of(&self, atom_type: &str) -> Option<usize> {
        self.type_index.get(atom_type).copied()
    }

    pub fn dg_ref(&self, index: usize) -> f64 {
        self.dg_ref[index]
    }

    pub fn radius(&self, index: usize) -> f64 {
        self.radius[index]
    }

    pub fn lambda(&self, index: usize) -> f64 {
        self.lambda[index]
    }

    /// Desolvation factor of `i` by `j`; not symmetric.
    pub fn factor(&self, i: usize, j: usize) -> f64 {
        self.factors[i][j]
    }
}
