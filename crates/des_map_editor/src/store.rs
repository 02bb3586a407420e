//! Grid state store with bounded snapshot history

use des_map_core::{Coord, GridState, PlacementError, TileDescriptor};
use std::collections::VecDeque;

/// Maximum number of snapshots kept by default
pub const HISTORY_LIMIT: usize = 20;

/// Owns the grid and the most recent snapshots of it
///
/// Every successful edit commits a whole new [`GridState`]; readers only ever
/// see complete snapshots. The oldest snapshot is dropped once the history
/// grows past its limit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct GridStore {
    /// Oldest first; the back is the current state
    history: VecDeque<GridState>,
    limit: usize,
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new(GridState::default())
    }
}

impl GridStore {
    /// Create a store whose history starts with `initial`
    pub fn new(initial: GridState) -> Self {
        Self::with_limit(initial, HISTORY_LIMIT)
    }

    /// Create a store keeping at most `limit` snapshots (at least one)
    pub fn with_limit(initial: GridState, limit: usize) -> Self {
        let mut history = VecDeque::with_capacity(limit.max(1));
        history.push_back(initial);
        Self {
            history,
            limit: limit.max(1),
        }
    }

    /// Place `tile` at `coord`, replacing whatever was there
    ///
    /// Returns `false` and leaves the grid unchanged when the tile's category
    /// is already at its quota.
    pub fn add_tile(&mut self, coord: impl Into<Coord>, tile: &TileDescriptor) -> bool {
        self.try_add_tile(coord, tile).is_ok()
    }

    /// Like [`add_tile`](Self::add_tile) but reports why a placement was refused
    pub fn try_add_tile(
        &mut self,
        coord: impl Into<Coord>,
        tile: &TileDescriptor,
    ) -> Result<(), PlacementError> {
        let coord = coord.into();
        match self.latest().with_tile(coord, tile) {
            Ok(next) => {
                self.commit(next);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(%coord, tile = %tile.id, "Placement rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Remove the placement at `coord`
    ///
    /// Removing an empty cell is a no-op and commits nothing. Returns whether
    /// a placement was removed.
    pub fn remove_tile(&mut self, coord: impl Into<Coord>) -> bool {
        let coord = coord.into();
        match self.latest().without_tile(coord) {
            Some(next) => {
                self.commit(next);
                true
            }
            None => {
                tracing::debug!(%coord, "Nothing to remove");
                false
            }
        }
    }

    /// Rename the level
    pub fn set_level_name(&mut self, level_name: impl Into<String>) {
        let next = self.latest().with_level_name(level_name);
        self.commit(next);
    }

    /// A copy of the current state
    pub fn state(&self) -> GridState {
        self.latest().clone()
    }

    /// Borrow the current state
    pub fn latest(&self) -> &GridState {
        // The history always holds at least the initial snapshot
        &self.history[self.history.len() - 1]
    }

    /// Number of snapshots currently retained
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_limit(&self) -> usize {
        self.limit
    }

    fn commit(&mut self, state: GridState) {
        self.history.push_back(state);
        while self.history.len() > self.limit {
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> TileDescriptor {
        TileDescriptor::new("Walls", 0, "Wall", '|')
    }

    fn player() -> TileDescriptor {
        TileDescriptor::new("Player", 0, "Player", '@').with_max_instances(1)
    }

    fn stairs() -> TileDescriptor {
        TileDescriptor::new("Staircase", 0, "Stairs", '>').with_max_instances(2)
    }

    #[test]
    fn test_add_and_query() {
        let mut store = GridStore::default();
        assert!(store.add_tile((1, 2), &wall()));

        let state = store.state();
        assert_eq!(state.get(Coord::new(1, 2)).map(|p| p.id()), Some("Walls-0"));
        assert_eq!(state.count("Walls"), 1);
        assert_eq!(store.history_len(), 2);
    }

    #[test]
    fn test_quota_rejection_leaves_state() {
        let mut store = GridStore::default();
        assert!(store.add_tile((0, 0), &player()));
        let before = store.state();
        let history = store.history_len();

        assert!(!store.add_tile((4, 4), &player()));
        assert_eq!(store.state(), before);
        assert_eq!(store.history_len(), history);
        assert!(matches!(
            store.try_add_tile((4, 4), &player()),
            Err(PlacementError::QuotaExceeded { max: 1, .. })
        ));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = GridStore::default();
        store.add_tile((0, 0), &wall());
        let history = store.history_len();

        assert!(!store.remove_tile((3, 3)));
        assert_eq!(store.history_len(), history);
        assert_eq!(store.latest().count("Walls"), 1);
    }

    #[test]
    fn test_remove_frees_quota() {
        let mut store = GridStore::default();
        assert!(store.add_tile((0, 0), &player()));
        assert!(store.remove_tile((0, 0)));
        assert_eq!(store.latest().count("Player"), 0);
        assert!(store.add_tile((2, 2), &player()));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = GridStore::default();
        store.add_tile((0, 0), &wall());
        let snapshot = store.state();

        store.add_tile((1, 0), &wall());
        store.remove_tile((0, 0));

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get(Coord::new(0, 0)).is_some());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut store = GridStore::default();
        for i in 0..25 {
            store.add_tile((i, 0), &wall());
            assert!(store.history_len() <= HISTORY_LIMIT);
            assert!(store.latest().get(Coord::new(i, 0)).is_some());
            assert_eq!(store.latest().count("Walls"), (i + 1) as usize);
        }
        assert_eq!(store.history_len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_custom_limit() {
        let mut store = GridStore::with_limit(GridState::default(), 3);
        for i in 0..10 {
            store.add_tile((0, i), &wall());
        }
        assert_eq!(store.history_len(), 3);

        let store = GridStore::with_limit(GridState::default(), 0);
        assert_eq!(store.history_limit(), 1);
    }

    #[test]
    fn test_set_level_name() {
        let mut store = GridStore::default();
        store.set_level_name("bigroom");
        assert_eq!(store.latest().level_name(), "bigroom");
    }

    #[test]
    fn test_counts_stay_consistent() {
        let tiles = [wall(), player(), stairs()];
        let mut store = GridStore::default();

        // Deterministic mix of paints and erasures over a small area
        let mut seed: u32 = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let x = ((seed >> 8) % 6) as i32;
            let y = ((seed >> 16) % 6) as i32;
            if (seed >> 4) % 3 == 0 {
                store.remove_tile((x, y));
            } else {
                store.add_tile((x, y), &tiles[(seed % 3) as usize]);
            }

            let state = store.latest();
            assert_eq!(state.category_counts(), &state.recount());
            assert!(state.count("Player") <= 1);
            assert!(state.count("Staircase") <= 2);
        }
    }
}
