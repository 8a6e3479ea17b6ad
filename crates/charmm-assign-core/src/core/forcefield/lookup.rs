//! Ordered, first-match-wins lookup over flat parameter tables.
//!
//! Tables are scanned linearly so that file order decides between entries that could
//! both match a type tuple. A lookup is driven by a sequence of [`MatchStrategy`]
//! values: [`resolve_first`] tries each strategy over the whole table before moving to
//! the next one, while [`resolve_first_by_row`] accepts the first row that satisfies
//! any strategy.

use super::types::TypePattern;

/// Implemented by every table entry that is keyed by a tuple of type patterns.
pub trait TypedEntry {
    fn types(&self) -> &[TypePattern];
}

/// How a table entry's type tuple is compared against a concrete atom-type tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStrategy {
    /// `(t1, ..., tn)` with every position exact.
    Forward,
    /// `(tn, ..., t1)` with every position exact.
    Reverse,
    /// `(X, t2, t3, X)`: wildcard outer positions, exact central bond.
    WildcardEnds,
    /// `(X, t3, t2, X)`.
    WildcardEndsReverse,
    /// `(t1, X, X, t4)`: exact outer positions, wildcard center.
    WildcardCenter,
    /// `(t4, X, X, t1)`.
    WildcardCenterReverse,
}

impl MatchStrategy {
    /// Returns `true` when a match under this strategy lists the atoms in reverse order.
    pub fn is_reversed(&self) -> bool {
        matches!(
            self,
            MatchStrategy::Reverse
                | MatchStrategy::WildcardEndsReverse
                | MatchStrategy::WildcardCenterReverse
        )
    }

    pub fn matches(&self, pattern: &[TypePattern], types: &[&str]) -> bool {
        if pattern.len() != types.len() {
            return false;
        }
        let n = types.len();
        match self {
            MatchStrategy::Forward => pattern.iter().zip(types).all(|(p, t)| p.is_exactly(t)),
            MatchStrategy::Reverse => pattern
                .iter()
                .zip(types.iter().rev())
                .all(|(p, t)| p.is_exactly(t)),
            MatchStrategy::WildcardEnds => {
                n == 4
                    && pattern[0].is_wildcard()
                    && pattern[3].is_wildcard()
                    && pattern[1].is_exactly(types[1])
                    && pattern[2].is_exactly(types[2])
            }
            MatchStrategy::WildcardEndsReverse => {
                n == 4
                    && pattern[0].is_wildcard()
                    && pattern[3].is_wildcard()
                    && pattern[1].is_exactly(types[2])
                    && pattern[2].is_exactly(types[1])
            }
            MatchStrategy::WildcardCenter => {
                n == 4
                    && pattern[1].is_wildcard()
                    && pattern[2].is_wildcard()
                    && pattern[0].is_exactly(types[0])
                    && pattern[3].is_exactly(types[3])
            }
            MatchStrategy::WildcardCenterReverse => {
                n == 4
                    && pattern[1].is_wildcard()
                    && pattern[2].is_wildcard()
                    && pattern[0].is_exactly(types[3])
                    && pattern[3].is_exactly(types[0])
            }
        }
    }
}

pub const EITHER_ORIENTATION: &[MatchStrategy] = &[MatchStrategy::Forward, MatchStrategy::Reverse];

pub const TORSION_WILDCARDS: &[MatchStrategy] = &[
    MatchStrategy::WildcardEnds,
    MatchStrategy::WildcardEndsReverse,
];

pub const IMPROPER_ORDER: &[MatchStrategy] = &[
    MatchStrategy::Forward,
    MatchStrategy::Reverse,
    MatchStrategy::WildcardCenter,
    MatchStrategy::WildcardCenterReverse,
];

/// A table entry selected by a lookup, with the strategy that selected it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'t, E> {
    pub entry: &'t E,
    pub strategy: MatchStrategy,
    /// Position of the entry in the table (file order).
    pub index: usize,
}

/// Tries each strategy in turn over the whole table; the first entry matching the
/// earliest successful strategy wins.
pub fn resolve_first<'t, E: TypedEntry>(
    table: &'t [E],
    types: &[&str],
    strategies: &[MatchStrategy],
) -> Option<Resolved<'t, E>> {
    strategies.iter().find_map(|&strategy| {
        table
            .iter()
            .enumerate()
            .find(|(_, entry)| strategy.matches(entry.types(), types))
            .map(|(index, entry)| Resolved {
                entry,
                strategy,
                index,
            })
    })
}

/// Returns the first entry, in file order, that satisfies any of the strategies.
pub fn resolve_first_by_row<'t, E: TypedEntry>(
    table: &'t [E],
    types: &[&str],
    strategies: &[MatchStrategy],
) -> Option<Resolved<'t, E>> {
    table
        .iter()
        .enumerate()
        .find_map(|(index, entry)| match_row(index, entry, types, strategies))
}

/// Returns every entry, in file order, that satisfies any of the strategies.
pub fn resolve_all<'t, E: TypedEntry>(
    table: &'t [E],
    types: &[&str],
    strategies: &[MatchStrategy],
) -> Vec<Resolved<'t, E>> {
    table
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match_row(index, entry, types, strategies))
        .collect()
}

fn match_row<'t, E: TypedEntry>(
    index: usize,
    entry: &'t E,
    types: &[&str],
    strategies: &[MatchStrategy],
) -> Option<Resolved<'t, E>> {
    strategies
        .iter()
        .find(|strategy| strategy.matches(entry.types(), types))
        .map(|&strategy| Resolved {
            entry,
            strategy,
            index,
        })
}
