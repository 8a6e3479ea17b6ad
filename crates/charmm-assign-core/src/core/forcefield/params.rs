use super::lookup::TypedEntry;
use super::solvation::SolvationTables;
use super::types::TypePattern;
use crate::core::io::itp::{self, RawRecord};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum RecordErrorKind {
    #[error("a {record} record needs at least {expected} fields, found {found}")]
    TooFewFields {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid float in field '{field}' (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("invalid integer in field '{field}' (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Malformed record in '{source_name}' on line {line}: {kind}")]
    Record {
        source_name: String,
        line: usize,
        kind: RecordErrorKind,
    },
    #[error("Inconsistent solvation tables: {0}")]
    InconsistentSolvation(String),
}

fn parse_f64(fields: &[&str], index: usize, field: &'static str) -> Result<f64, RecordErrorKind> {
    fields[index]
        .parse()
        .map_err(|_| RecordErrorKind::InvalidFloat {
            field,
            value: fields[index].to_string(),
        })
}

fn parse_u32(fields: &[&str], index: usize, field: &'static str) -> Result<u32, RecordErrorKind> {
    fields[index]
        .parse()
        .map_err(|_| RecordErrorKind::InvalidInt {
            field,
            value: fields[index].to_string(),
        })
}

fn patterns<const N: usize>(fields: &[&str]) -> [TypePattern; N] {
    std::array::from_fn(|i| TypePattern::parse(fields[i]))
}

/// A parameter-table entry decoded from one tokenized `.itp` record.
pub trait ParameterRecord: Sized {
    /// Name of the `.itp` section the record belongs to.
    const RECORD: &'static str;
    const MIN_FIELDS: usize;

    /// Decodes the record. Callers guarantee `fields.len() >= MIN_FIELDS`.
    fn from_fields(fields: &[&str]) -> Result<Self, RecordErrorKind>;
}

/// Bond stretch parameters: `t1 t2 func r0 kb`.
#[derive(Debug, Clone, PartialEq)]
pub struct BondedPairParameter {
    pub types: [TypePattern; 2],
    pub r0: f64,
    pub kb: f64,
}

impl ParameterRecord for BondedPairParameter {
    const RECORD: &'static str = "bondtypes";
    const MIN_FIELDS: usize = 5;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordErrorKind> {
        Ok(Self {
            types: patterns(fields),
            r0: parse_f64(fields, 3, "r0")?,
            kb: parse_f64(fields, 4, "kb")?,
        })
    }
}

/// Urey-Bradley angle parameters: `t1 t2 t3 func theta0 k0 r13 kub`.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleBendParameter {
    pub types: [TypePattern; 3],
    pub theta0: f64,
    pub k0: f64,
    pub r13: f64,
    pub kub: f64,
}

impl ParameterRecord for AngleBendParameter {
    const RECORD: &'static str = "angletypes";
    const MIN_FIELDS: usize = 8;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordErrorKind> {
        Ok(Self {
            types: patterns(fields),
            theta0: parse_f64(fields, 4, "theta0")?,
            k0: parse_f64(fields, 5, "k0")?,
            r13: parse_f64(fields, 6, "r13")?,
            kub: parse_f64(fields, 7, "kub")?,
        })
    }
}

/// Proper dihedral parameters: `t1 t2 t3 t4 func phi0 cp mult`.
#[derive(Debug, Clone, PartialEq)]
pub struct TorsionParameter {
    pub types: [TypePattern; 4],
    pub phi0: f64,
    pub cp: f64,
    pub multiplicity: u32,
}

impl ParameterRecord for TorsionParameter {
    const RECORD: &'static str = "dihedraltypes";
    const MIN_FIELDS: usize = 8;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordErrorKind> {
        Ok(Self {
            types: patterns(fields),
            phi0: parse_f64(fields, 5, "phi0")?,
            cp: parse_f64(fields, 6, "cp")?,
            multiplicity: parse_u32(fields, 7, "mult")?,
        })
    }
}

/// Improper dihedral parameters: `t1 t2 t3 t4 func phi0 cp`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImproperTorsionParameter {
    pub types: [TypePattern; 4],
    pub phi0: f64,
    pub cp: f64,
}

impl ParameterRecord for ImproperTorsionParameter {
    const RECORD: &'static str = "impropers";
    const MIN_FIELDS: usize = 7;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordErrorKind> {
        Ok(Self {
            types: patterns(fields),
            phi0: parse_f64(fields, 5, "phi0")?,
            cp: parse_f64(fields, 6, "cp")?,
        })
    }
}

/// Per-type Lennard-Jones parameters: `type atnum mass charge ptype sigma epsilon`.
#[derive(Debug, Clone, PartialEq)]
pub struct NonBondedParameter {
    pub atom_type: String,
    pub atomic_number: u32,
    pub mass: f64,
    pub charge: f64,
    pub particle_type: String,
    pub sigma: f64,
    pub epsilon: f64,
}

impl ParameterRecord for NonBondedParameter {
    const RECORD: &'static str = "atomtypes";
    const MIN_FIELDS: usize = 7;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordErrorKind> {
        Ok(Self {
            atom_type: fields[0].to_string(),
            atomic_number: parse_u32(fields, 1, "atnum")?,
            mass: parse_f64(fields, 2, "mass")?,
            charge: parse_f64(fields, 3, "charge")?,
            particle_type: fields[4].to_string(),
            sigma: parse_f64(fields, 5, "sigma")?,
            epsilon: parse_f64(fields, 6, "epsilon")?,
        })
    }
}

/// Explicit 1-4 Lennard-Jones parameters: `t1 t2 func sigma epsilon`.
#[derive(Debug, Clone, PartialEq)]
pub struct NonBonded14Parameter {
    pub types: [TypePattern; 2],
    pub pair_function: u32,
    pub sigma: f64,
    pub epsilon: f64,
}

impl ParameterRecord for NonBonded14Parameter {
    const RECORD: &'static str = "pairtypes";
    const MIN_FIELDS: usize = 5;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordErrorKind> {
        Ok(Self {
            types: patterns(fields),
            pair_function: parse_u32(fields, 2, "func")?,
            sigma: parse_f64(fields, 3, "sigma")?,
            epsilon: parse_f64(fields, 4, "epsilon")?,
        })
    }
}

macro_rules! impl_typed_entry {
    ($($record:ty),* $(,)?) => {
        $(
            impl TypedEntry for $record {
                fn types(&self) -> &[TypePattern] {
                    &self.types
                }
            }
        )*
    };
}

impl_typed_entry!(
    BondedPairParameter,
    AngleBendParameter,
    TorsionParameter,
    ImproperTorsionParameter,
    NonBonded14Parameter,
);

/// Decodes tokenized records into an ordered table, preserving file order.
pub fn parse_table<R: ParameterRecord>(
    records: &[RawRecord],
    source_name: &str,
) -> Result<Vec<R>, ParamLoadError> {
    records
        .iter()
        .map(|record| {
            let fields = record.fields();
            let decoded = if fields.len() < R::MIN_FIELDS {
                Err(RecordErrorKind::TooFewFields {
                    record: R::RECORD,
                    expected: R::MIN_FIELDS,
                    found: fields.len(),
                })
            } else {
                R::from_fields(&fields)
            };
            decoded.map_err(|kind| ParamLoadError::Record {
                source_name: source_name.to_string(),
                line: record.line,
                kind,
            })
        })
        .collect()
}

fn load_table<R: ParameterRecord>(path: &Path) -> Result<Vec<R>, ParamLoadError> {
    let records = itp::read_records_from_path(path).map_err(|e| ParamLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    let table = parse_table(&records, &path.to_string_lossy())?;
    debug!(
        path = %path.display(),
        record = R::RECORD,
        entries = table.len(),
        "Loaded parameter table."
    );
    Ok(table)
}

/// In-memory `.itp` text for each parameter table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterSources<'a> {
    pub bonds: &'a str,
    pub angles: &'a str,
    pub dihedrals: &'a str,
    pub impropers: &'a str,
    pub atomtypes: &'a str,
    pub pairtypes: &'a str,
}

/// The six ordered parameter tables of a force field. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTables {
    pub bonded_pairs: Vec<BondedPairParameter>,
    pub angle_bends: Vec<AngleBendParameter>,
    pub torsions: Vec<TorsionParameter>,
    pub impropers: Vec<ImproperTorsionParameter>,
    pub non_bonded: Vec<NonBondedParameter>,
    pub non_bonded_14: Vec<NonBonded14Parameter>,
}

impl ParameterTables {
    pub fn parse(sources: &ParameterSources<'_>) -> Result<Self, ParamLoadError> {
        Ok(Self {
            bonded_pairs: parse_table(&itp::parse_records(sources.bonds), "bonds")?,
            angle_bends: parse_table(&itp::parse_records(sources.angles), "angles")?,
            torsions: parse_table(&itp::parse_records(sources.dihedrals), "dihedrals")?,
            impropers: parse_table(&itp::parse_records(sources.impropers), "impropers")?,
            non_bonded: parse_table(&itp::parse_records(sources.atomtypes), "atomtypes")?,
            non_bonded_14: parse_table(&itp::parse_records(sources.pairtypes), "pairtypes")?,
        })
    }

    pub fn load(files: &ParameterFiles) -> Result<Self, ParamLoadError> {
        Ok(Self {
            bonded_pairs: load_table(&files.bonds)?,
            angle_bends: load_table(&files.angles)?,
            torsions: load_table(&files.dihedrals)?,
            impropers: load_table(&files.impropers)?,
            non_bonded: load_table(&files.atomtypes)?,
            non_bonded_14: load_table(&files.pairtypes)?,
        })
    }

    /// Returns the first per-type non-bonded entry for `atom_type`.
    pub fn non_bonded_for(&self, atom_type: &str) -> Option<&NonBondedParameter> {
        self.non_bonded.iter().find(|p| p.atom_type == atom_type)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParameterFiles {
    pub bonds: PathBuf,
    pub angles: PathBuf,
    pub dihedrals: PathBuf,
    pub impropers: PathBuf,
    pub atomtypes: PathBuf,
    pub pairtypes: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SolvationFiles {
    pub table: PathBuf,
}

/// TOML manifest naming the files that make up a force field.
///
/// ```toml
/// [parameters]
/// bonds = "ffbonded_bonds.itp"
/// angles = "ffbonded_angles.itp"
/// dihedrals = "ffbonded_dihedrals.itp"
/// impropers = "ffbonded_impropers.itp"
/// atomtypes = "ffnonbonded_atomtypes.itp"
/// pairtypes = "ffnonbonded_pairtypes.itp"
///
/// [solvation]
/// table = "eef1_sb.csv"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ForcefieldManifest {
    pub parameters: ParameterFiles,
    pub solvation: Option<SolvationFiles>,
}

impl ForcefieldManifest {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Rewrites relative paths so they are relative to `base_dir`.
    pub fn resolve_paths(mut self, base_dir: &Path) -> Self {
        let files = &mut self.parameters;
        for path in [
            &mut files.bonds,
            &mut files.angles,
            &mut files.dihedrals,
            &mut files.impropers,
            &mut files.atomtypes,
            &mut files.pairtypes,
        ] {
            *path = base_dir.join(&*path);
        }
        if let Some(solvation) = self.solvation.as_mut() {
            solvation.table = base_dir.join(&solvation.table);
        }
        self
    }
}

/// A complete force field: parameter tables plus optional implicit-solvent tables.
///
/// Built once and shared read-only by any number of assignment runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Forcefield {
    pub tables: ParameterTables,
    pub solvation: Option<SolvationTables>,
}

impl Forcefield {
    pub fn new(tables: ParameterTables, solvation: Option<SolvationTables>) -> Self {
        Self { tables, solvation }
    }

    /// Loads every table named by a TOML manifest; relative paths resolve against
    /// the manifest's directory.
    pub fn load(manifest_path: &Path) -> Result<Self, ParamLoadError> {
        let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new(""));
        let manifest = ForcefieldManifest::load(manifest_path)?.resolve_paths(base_dir);
        Self::from_manifest(&manifest)
    }

    pub fn from_manifest(manifest: &ForcefieldManifest) -> Result<Self, ParamLoadError> {
        let tables = ParameterTables::load(&manifest.parameters)?;
        let solvation = manifest
            .solvation
            .as_ref()
            .map(|files| SolvationTables::load_csv(&files.table))
            .transpose()?;
        Ok(Self { tables, solvation })
    }
}
