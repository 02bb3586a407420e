//! Immutable grid state
//!
//! A [`GridState`] is a value: every edit produces a new state and leaves the
//! original untouched. The editor keeps a short history of these values and
//! hands out the latest one to whoever needs to read the grid.

use crate::{Coord, PlacedTile, TileDescriptor};
use std::collections::BTreeMap;
use thiserror::Error;

/// Level name used when none is configured
pub const DEFAULT_LEVEL_NAME: &str = "mylevel";

/// Reasons a placement can be refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("category '{category}' already holds its maximum of {max} tile(s)")]
    QuotaExceeded { category: String, max: u32 },
}

/// Sparse placement map plus per-category counts
///
/// # Invariants
///
/// - `count(c)` equals the number of placements whose category is `c`.
///   Categories with no placements have no entry in `category_counts`.
/// - At most one placement per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    placements: BTreeMap<Coord, PlacedTile>,
    level_name: String,
    category_counts: BTreeMap<String, usize>,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_NAME)
    }
}

impl GridState {
    /// Create an empty grid
    pub fn new(level_name: impl Into<String>) -> Self {
        Self {
            placements: BTreeMap::new(),
            level_name: level_name.into(),
            category_counts: BTreeMap::new(),
        }
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn get(&self, coord: Coord) -> Option<&PlacedTile> {
        self.placements.get(&coord)
    }

    /// Check whether `coord` holds a placement of `category`
    pub fn is_category_at(&self, coord: Coord, category: &str) -> bool {
        self.get(coord).is_some_and(|p| p.is_category(category))
    }

    /// All placements in coordinate order
    pub fn placements(&self) -> impl Iterator<Item = &PlacedTile> {
        self.placements.values()
    }

    /// Placements of a single category, in coordinate order
    pub fn placements_of<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a PlacedTile> {
        self.placements().filter(move |p| p.is_category(category))
    }

    /// Cached number of placements in `category`
    pub fn count(&self, category: &str) -> usize {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    pub fn category_counts(&self) -> &BTreeMap<String, usize> {
        &self.category_counts
    }

    /// Recompute per-category counts by scanning the placements
    ///
    /// Always equal to [`category_counts`](Self::category_counts).
    pub fn recount(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for placed in self.placements.values() {
            *counts.entry(placed.category().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Return a new state with `tile` placed at `coord`
    ///
    /// An existing placement at `coord` is replaced. The quota check counts the
    /// replaced placement as gone, so repainting a full category's own cell
    /// is allowed.
    pub fn with_tile(&self, coord: Coord, tile: &TileDescriptor) -> Result<GridState, PlacementError> {
        let replaced_same = self.is_category_at(coord, &tile.category);
        let prospective = self.count(&tile.category) - usize::from(replaced_same) + 1;
        if !tile.allows(prospective) {
            return Err(PlacementError::QuotaExceeded {
                category: tile.category.clone(),
                max: tile.max_instances.unwrap_or(0),
            });
        }

        let mut next = self.clone();
        if let Some(old) = next.placements.insert(coord, PlacedTile::new(coord, tile)) {
            next.decrement(old.category());
        }
        *next.category_counts.entry(tile.category.clone()).or_insert(0) += 1;
        debug_assert_eq!(next.category_counts, next.recount());
        Ok(next)
    }

    /// Return a new state with the placement at `coord` removed
    ///
    /// Returns `None` if the cell is empty; counts are never touched in that case.
    pub fn without_tile(&self, coord: Coord) -> Option<GridState> {
        if !self.placements.contains_key(&coord) {
            return None;
        }

        let mut next = self.clone();
        if let Some(old) = next.placements.remove(&coord) {
            next.decrement(old.category());
        }
        debug_assert_eq!(next.category_counts, next.recount());
        Some(next)
    }

    /// Return a new state with a different level name
    pub fn with_level_name(&self, level_name: impl Into<String>) -> GridState {
        GridState {
            level_name: level_name.into(),
            ..self.clone()
        }
    }

    fn decrement(&mut self, category: &str) {
        if let Some(count) = self.category_counts.get_mut(category) {
            *count -= 1;
            if *count == 0 {
                self.category_counts.remove(category);
            }
        }
    }
}
