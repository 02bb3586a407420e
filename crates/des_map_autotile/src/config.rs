//! Wall autotile configuration
//!
//! Maps each [`WallVariant`] to a tile of the wall category and resolves the
//! tile to draw for a wall cell of a [`GridState`].

use crate::bitmask::{affected_cells, grid_bitmask};
use crate::variant::WallVariant;
use des_map_core::{tile_id, Coord, GridState};
use std::collections::HashMap;

/// Default name of the structural category that gets autotiled
pub const DEFAULT_WALL_CATEGORY: &str = "Walls";

/// Wall category plus the catalog offset of each variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallAutotile {
    pub category: String,
    tile_mapping: HashMap<WallVariant, usize>,
}

impl Default for WallAutotile {
    fn default() -> Self {
        Self::new(DEFAULT_WALL_CATEGORY)
    }
}

impl WallAutotile {
    /// Create a wall autotiler with the standard variant offsets
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            tile_mapping: WallVariant::ALL
                .iter()
                .map(|v| (*v, v.default_offset()))
                .collect(),
        }
    }

    /// Override the catalog offset used for a variant
    pub fn with_offset(mut self, variant: WallVariant, offset: usize) -> Self {
        self.tile_mapping.insert(variant, offset);
        self
    }

    /// Catalog offset for a variant
    pub fn offset(&self, variant: WallVariant) -> usize {
        self.tile_mapping
            .get(&variant)
            .copied()
            .unwrap_or_else(|| variant.default_offset())
    }

    /// Catalog identifier for a variant, e.g. `Walls-1`
    pub fn tile_id(&self, variant: WallVariant) -> String {
        tile_id(&self.category, self.offset(variant))
    }

    pub fn is_wall(&self, category: &str) -> bool {
        self.category == category
    }

    /// Classify the cell at `coord` against neighboring walls
    ///
    /// The cell itself does not need to hold a wall, which lets a palette
    /// preview show the variant a wall would take if painted there.
    pub fn resolve_variant(&self, state: &GridState, coord: Coord) -> WallVariant {
        WallVariant::from_bitmask(grid_bitmask(state, coord, &self.category))
    }

    /// Tile identifier to draw for the placement at `coord`
    ///
    /// Wall placements resolve to their variant tile; anything else keeps the
    /// identifier it was placed with. Empty cells return `None`.
    pub fn display_tile_id(&self, state: &GridState, coord: Coord) -> Option<String> {
        let placed = state.get(coord)?;
        if self.is_wall(placed.category()) {
            Some(self.tile_id(self.resolve_variant(state, coord)))
        } else {
            Some(placed.id().to_string())
        }
    }

    /// Wall cells to re-resolve after the cell at `coord` was painted or erased
    pub fn cells_to_refresh(&self, state: &GridState, coord: Coord) -> Vec<Coord> {
        affected_cells(state, coord, &self.category)
    }
}
