//! Bounding box of the placed tiles and the document axis transform

use des_map_core::{Coord, GridState};

/// Inclusive extent of all placements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl MapBounds {
    /// Compute the bounds of a grid. An empty grid has no bounds.
    pub fn of(state: &GridState) -> Option<MapBounds> {
        let mut placements = state.placements();
        let first = placements.next()?.coord;

        Some(placements.fold(
            MapBounds {
                min_x: first.x,
                max_x: first.x,
                min_y: first.y,
                max_y: first.y,
            },
            |b, p| MapBounds {
                min_x: b.min_x.min(p.x()),
                max_x: b.max_x.max(p.x()),
                min_y: b.min_y.min(p.y()),
                max_y: b.max_y.max(p.y()),
            },
        ))
    }

    /// Number of columns in the map block
    pub fn width(&self) -> u64 {
        u64::from(self.max_x.abs_diff(self.min_x)) + 1
    }

    /// Number of rows in the map block
    pub fn height(&self) -> u64 {
        u64::from(self.max_y.abs_diff(self.min_y)) + 1
    }

    /// Convert a grid coordinate to document coordinates
    ///
    /// The document counts rows from the top, so `y` is flipped against
    /// `max_y`. Row 0 is the highest grid row.
    pub fn to_document(&self, coord: Coord) -> (u32, u32) {
        (coord.x.abs_diff(self.min_x), self.max_y.abs_diff(coord.y))
    }
}
