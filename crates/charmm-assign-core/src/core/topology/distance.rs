use crate::core::models::ids::AtomId;
use crate::core::models::system::MolecularSystem;
use slotmap::SecondaryMap;
use std::collections::VecDeque;

/// How a non-bonded pair is treated, by topological distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separation {
    /// Bonded or sharing a neighbor (distance ≤ 2). No record is emitted.
    Excluded,
    /// Exactly three bonds apart.
    OneFour,
    /// More than three bonds apart, or not connected at all.
    Full,
}

impl Separation {
    /// Classifies a shortest-path length; `None` means the atoms are disconnected.
    pub fn from_distance(distance: Option<usize>) -> Self {
        match distance {
            Some(d) if d <= 2 => Separation::Excluded,
            Some(3) => Separation::OneFour,
            _ => Separation::Full,
        }
    }
}

/// Breadth-first search from `origin`, visiting atoms up to `max_depth` bonds away.
///
/// Returns the shortest bond-path length of every visited atom, `origin` included at 0.
/// `None` for `max_depth` explores the whole connected component.
pub fn distances_from(
    system: &MolecularSystem,
    origin: AtomId,
    max_depth: Option<usize>,
) -> SecondaryMap<AtomId, usize> {
    let mut distances = SecondaryMap::new();
    if system.atom(origin).is_none() {
        return distances;
    }
    distances.insert(origin, 0);

    let mut queue = VecDeque::from([origin]);
    while let Some(current) = queue.pop_front() {
        let depth = distances[current];
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        for &neighbor in system.get_bonded_neighbors(current).unwrap_or(&[]) {
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor, depth + 1);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

/// Shortest bond-path length between two atoms.
///
/// Returns `Some(0)` for the same atom and `None` when the atoms are not connected.
/// The result is symmetric and uncapped.
pub fn topological_distance(system: &MolecularSystem, a: AtomId, b: AtomId) -> Option<usize> {
    distances_from(system, a, None).get(b).copied()
}
