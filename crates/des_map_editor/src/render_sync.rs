//! Keeps a display layer in step with the grid
//!
//! The display layer polls the latest [`GridState`] once per frame. [`RenderSync`]
//! remembers what is currently on screen and turns each poll into the minimal
//! list of [`RenderOp`]s, re-resolving wall variants around every changed cell.

use des_map_autotile::WallAutotile;
use des_map_core::{Coord, GridState};
use std::collections::{BTreeMap, BTreeSet};

/// A drawing instruction for the display layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Draw the catalog tile `tile_id` at `coord`, replacing anything drawn there
    Paint { coord: Coord, tile_id: String },
    /// Remove whatever is drawn at `coord`
    Clear { coord: Coord },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RenderedTile {
    /// Identifier the cell was placed with
    placed_id: String,
    /// Identifier currently drawn (a wall variant for walls)
    shown_id: String,
}

/// Diff between the last rendered grid and the current one
#[derive(Debug, Clone, Default)]
pub struct RenderSync {
    autotile: WallAutotile,
    rendered: BTreeMap<Coord, RenderedTile>,
}

impl RenderSync {
    pub fn new(autotile: WallAutotile) -> Self {
        Self {
            autotile,
            rendered: BTreeMap::new(),
        }
    }

    /// Identifier currently drawn at `coord`
    pub fn shown_tile(&self, coord: Coord) -> Option<&str> {
        self.rendered.get(&coord).map(|r| r.shown_id.as_str())
    }

    /// Number of drawn cells
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Forget everything drawn, so the next sync repaints the whole grid
    pub fn reset(&mut self) {
        self.rendered.clear();
    }

    /// Bring the drawn cells in line with `state`
    ///
    /// Clears come first, then paints, each in coordinate order. A cell that
    /// was added, replaced or removed also re-resolves its wall neighbors.
    pub fn sync(&mut self, state: &GridState) -> Vec<RenderOp> {
        let mut changed = Vec::new();
        let mut ops = Vec::new();

        for placed in state.placements() {
            let same = self
                .rendered
                .get(&placed.coord)
                .is_some_and(|r| r.placed_id == placed.id());
            if !same {
                changed.push(placed.coord);
            }
        }

        let removed: Vec<Coord> = self
            .rendered
            .keys()
            .filter(|c| state.get(**c).is_none())
            .copied()
            .collect();
        for coord in removed {
            self.rendered.remove(&coord);
            ops.push(RenderOp::Clear { coord });
            changed.push(coord);
        }

        let mut dirty = BTreeSet::new();
        for coord in changed {
            if state.get(coord).is_some() {
                dirty.insert(coord);
            }
            dirty.extend(self.autotile.cells_to_refresh(state, coord));
        }

        for coord in dirty {
            let (Some(placed), Some(shown_id)) = (
                state.get(coord),
                self.autotile.display_tile_id(state, coord),
            ) else {
                continue;
            };

            let previous = self.rendered.insert(
                coord,
                RenderedTile {
                    placed_id: placed.id().to_string(),
                    shown_id: shown_id.clone(),
                },
            );
            if previous.map(|p| p.shown_id) != Some(shown_id.clone()) {
                ops.push(RenderOp::Paint {
                    coord,
                    tile_id: shown_id,
                });
            }
        }

        if !ops.is_empty() {
            tracing::trace!(ops = ops.len(), "Render sync");
        }
        ops
    }
}
