//! Core data structures for des_map_editor
//!
//! This crate provides the fundamental types for painting NetHack-style levels:
//! - `Coord` - A cell on the unbounded editing grid
//! - `TileDescriptor` - A paintable tile with its glyph and placement quota
//! - `TileCatalog` - Categories of tiles, loaded from JSON
//! - `PlacedTile` - A tile occupying one grid cell
//! - `GridState` - Immutable snapshot of every placement on the grid

mod catalog;
mod coord;
mod grid;
mod placed;
mod tile;

pub use catalog::{CatalogError, TileCatalog};
pub use coord::Coord;
pub use grid::{GridState, PlacementError, DEFAULT_LEVEL_NAME};
pub use placed::PlacedTile;
pub use tile::{tile_id, TileDescriptor};
