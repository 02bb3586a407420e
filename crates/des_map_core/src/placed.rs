//! Placed tiles on the grid

use crate::{Coord, TileDescriptor};

/// A tile placed on one grid cell
///
/// The descriptor is copied at placement time, so later catalog changes never
/// alter what is already on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTile {
    pub coord: Coord,
    pub tile: TileDescriptor,
}

impl PlacedTile {
    pub fn new(coord: Coord, tile: &TileDescriptor) -> Self {
        Self {
            coord,
            tile: tile.clone(),
        }
    }

    pub fn x(&self) -> i32 {
        self.coord.x
    }

    pub fn y(&self) -> i32 {
        self.coord.y
    }

    pub fn id(&self) -> &str {
        &self.tile.id
    }

    pub fn category(&self) -> &str {
        &self.tile.category
    }

    pub fn glyph(&self) -> char {
        self.tile.glyph
    }

    /// Check whether this placement belongs to `category`
    pub fn is_category(&self, category: &str) -> bool {
        self.tile.category == category
    }
}
