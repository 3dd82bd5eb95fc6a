//! # List Projection
//!
//! The filtered, sorted view of the catalog shown in the list. [`project`] is a pure
//! function of `(items, query, mode)`: it keeps no state, and equal inputs always give
//! the same ordering.

use crate::model::Product;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Sort direction of one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// One of the four compound orderings: by name, then by count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortMode {
    pub name: Direction,
    pub count: Direction,
}

impl SortMode {
    pub const NAME_ASC_COUNT_ASC: SortMode = SortMode::new(Direction::Asc, Direction::Asc);
    pub const NAME_ASC_COUNT_DESC: SortMode = SortMode::new(Direction::Asc, Direction::Desc);
    pub const NAME_DESC_COUNT_ASC: SortMode = SortMode::new(Direction::Desc, Direction::Asc);
    pub const NAME_DESC_COUNT_DESC: SortMode = SortMode::new(Direction::Desc, Direction::Desc);

    pub const ALL: [SortMode; 4] = [
        Self::NAME_ASC_COUNT_ASC,
        Self::NAME_ASC_COUNT_DESC,
        Self::NAME_DESC_COUNT_ASC,
        Self::NAME_DESC_COUNT_DESC,
    ];

    pub const fn new(name: Direction, count: Direction) -> Self {
        Self { name, count }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = |d: Direction| match d {
            Direction::Asc => "Asc",
            Direction::Desc => "Desc",
        };
        write!(f, "name{}_count{}", side(self.name), side(self.count))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown sort mode {0:?}; expected one of nameAsc_countAsc, nameAsc_countDesc, nameDesc_countAsc, nameDesc_countDesc")]
pub struct ParseSortModeError(String);

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.to_string() == s)
            .ok_or_else(|| ParseSortModeError(s.to_string()))
    }
}

/// Case-folds for comparison.
fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Computes the list view.
///
/// Keeps products whose case-folded name contains the case-folded, trimmed `query`
/// (an empty query keeps everything), then sorts by case-folded name and, for equal
/// names, by count. The sort is stable: products equal on both keys keep their input
/// order.
pub fn project(items: &[Product], query: &str, mode: SortMode) -> Vec<Product> {
    let needle = fold(query.trim());
    let mut keyed: Vec<(String, &Product)> = items
        .iter()
        .map(|product| (fold(&product.name), product))
        .filter(|(name, _)| name.contains(needle.as_str()))
        .collect();

    keyed.sort_by(|(name_a, a), (name_b, b)| {
        mode.name
            .apply(name_a.cmp(name_b))
            .then_with(|| mode.count.apply(a.count.cmp(&b.count)))
    });

    keyed.into_iter().map(|(_, product)| product.clone()).collect()
}
