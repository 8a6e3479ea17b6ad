/// An atom addressed by role name, in this residue or a sequence neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleRef {
    /// `-1` for the previous residue, `0` for this one, `+1` for the next one.
    pub offset: isize,
    pub name: &'static str,
}

impl RoleRef {
    pub const fn here(name: &'static str) -> Self {
        Self { offset: 0, name }
    }

    pub const fn previous(name: &'static str) -> Self {
        Self { offset: -1, name }
    }

    pub const fn next(name: &'static str) -> Self {
        Self { offset: 1, name }
    }
}

pub const BACKBONE_N: &str = "N";
pub const BACKBONE_CA: &str = "CA";
pub const BACKBONE_C: &str = "C";
pub const BACKBONE_O: &str = "O";
pub const TERMINAL_OXYGEN: &str = "OXT";
pub const AMIDE_HYDROGEN: &str = "HN";
pub const PROLINE_RING_CARBON: &str = "CD";
