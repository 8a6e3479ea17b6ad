use super::ids::{AtomId, ChainId};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueType {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // Alanine (ALA)
    Glycine,    // Glycine (GLY)
    Isoleucine, // Isoleucine (ILE)
    Leucine,    // Leucine (LEU)
    Proline,    // Proline (PRO)
    Valine,     // Valine (VAL)

    // --- Aromatic ---
    Phenylalanine, // Phenylalanine (PHE)
    Tryptophan,    // Tryptophan (TRP)
    Tyrosine,      // Tyrosine (TYR)

    // --- Polar, Uncharged ---
    Asparagine, // Asparagine (ASN)
    Cysteine,   // Cysteine (CYS)
    Glutamine,  // Glutamine (GLN)
    Serine,     // Serine (SER)
    Threonine,  // Threonine (THR)
    Methionine, // Methionine (MET)

    // --- Positively Charged (Basic) ---
    Arginine,  // Arginine (ARG)
    Lysine,    // Lysine (LYS)
    Histidine, // Histidine (HIS); the tautomer is read from the protons present

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // Aspartic Acid (ASP)
    GlutamicAcid, // Glutamic Acid (GLU)
}

impl ResidueType {
    pub fn to_three_letter(&self) -> &'static str {
        match self {
            ResidueType::Alanine => "ALA",
            ResidueType::Glycine => "GLY",
            ResidueType::Isoleucine => "ILE",
            ResidueType::Leucine => "LEU",
            ResidueType::Proline => "PRO",
            ResidueType::Valine => "VAL",
            ResidueType::Phenylalanine => "PHE",
            ResidueType::Tryptophan => "TRP",
            ResidueType::Tyrosine => "TYR",
            ResidueType::Asparagine => "ASN",
            ResidueType::Cysteine => "CYS",
            ResidueType::Glutamine => "GLN",
            ResidueType::Serine => "SER",
            ResidueType::Threonine => "THR",
            ResidueType::Methionine => "MET",
            ResidueType::Arginine => "ARG",
            ResidueType::Lysine => "LYS",
            ResidueType::Histidine => "HIS",
            ResidueType::AsparticAcid => "ASP",
            ResidueType::GlutamicAcid => "GLU",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown residue name: '{0}'")]
pub struct ParseResidueTypeError(pub String);

impl FromStr for ResidueType {
    type Err = ParseResidueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALA" => Ok(ResidueType::Alanine),
            "GLY" => Ok(ResidueType::Glycine),
            "ILE" => Ok(ResidueType::Isoleucine),
            "LEU" => Ok(ResidueType::Leucine),
            "PRO" => Ok(ResidueType::Proline),
            "VAL" => Ok(ResidueType::Valine),
            "PHE" => Ok(ResidueType::Phenylalanine),
            "TRP" => Ok(ResidueType::Tryptophan),
            "TYR" => Ok(ResidueType::Tyrosine),
            "ASN" => Ok(ResidueType::Asparagine),
            "CYS" => Ok(ResidueType::Cysteine),
            "GLN" => Ok(ResidueType::Glutamine),
            "SER" => Ok(ResidueType::Serine),
            "THR" => Ok(ResidueType::Threonine),
            "MET" => Ok(ResidueType::Methionine),
            "ARG" => Ok(ResidueType::Arginine),
            "LYS" => Ok(ResidueType::Lysine),
            "HIS" | "HSD" | "HSE" | "HSP" | "HID" | "HIE" | "HIP" => Ok(ResidueType::Histidine),
            "ASP" => Ok(ResidueType::AsparticAcid),
            "GLU" => Ok(ResidueType::GlutamicAcid),
            _ => Err(ParseResidueTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for ResidueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_three_letter())
    }
}

/// Position of a residue relative to the ends of its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminalStatus {
    #[default]
    None,
    NTerminal,
    CTerminal,
    /// The only residue of its chain: both ends at once.
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub residue_number: isize,              // Residue sequence number from source file
    pub name: String,                       // Name of the residue (e.g., "ALA", "GLY")
    pub residue_type: Option<ResidueType>,  // Standard amino acid type, if recognized
    pub terminal: TerminalStatus,           // N-/C-terminal flag
    pub chain_id: ChainId,                  // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,          // Atoms in insertion order
    atom_name_map: HashMap<String, AtomId>, // Map from role name to its stable ID
}

impl Residue {
    pub(crate) fn new(residue_number: isize, name: &str, chain_id: ChainId) -> Self {
        Self {
            residue_number,
            name: name.to_string(),
            residue_type: name.parse().ok(),
            terminal: TerminalStatus::None,
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }

    pub fn has_atom(&self, name: &str) -> bool {
        self.atom_name_map.contains_key(name)
    }

    pub fn is_n_terminal(&self) -> bool {
        matches!(
            self.terminal,
            TerminalStatus::NTerminal | TerminalStatus::Both
        )
    }

    pub fn is_c_terminal(&self) -> bool {
        matches!(
            self.terminal,
            TerminalStatus::CTerminal | TerminalStatus::Both
        )
    }
}
