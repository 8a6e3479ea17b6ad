use std::fmt;

/// Label used by parameter files for a position that matches any atom type.
pub const WILDCARD_LABEL: &str = "X";

/// An atom-type position of a parameter-table entry.
///
/// Wildcards are a distinct variant, so a real atom type can never be mistaken
/// for one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypePattern {
    /// Matches any atom type.
    Any,
    /// Matches exactly one atom type label.
    Exact(String),
}

impl TypePattern {
    /// Parses a type label from a parameter record; `X` becomes [`TypePattern::Any`].
    pub fn parse(label: &str) -> Self {
        if label == WILDCARD_LABEL {
            TypePattern::Any
        } else {
            TypePattern::Exact(label.to_string())
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, TypePattern::Any)
    }

    /// Returns `true` only for an exact entry naming `atom_type`. Wildcards never match here.
    pub fn is_exactly(&self, atom_type: &str) -> bool {
        matches!(self, TypePattern::Exact(label) if label == atom_type)
    }
}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePattern::Any => f.write_str(WILDCARD_LABEL),
            TypePattern::Exact(label) => f.write_str(label),
        }
    }
}
