//! Neighbor-aware wall autotiling
//!
//! Wall placements are drawn with one of a handful of wall tiles depending on
//! which orthogonal neighbors are also walls. This crate classifies that
//! neighborhood and maps the result to a catalog tile identifier.
//!
//! Resolution never mutates the grid. After a cell changes, the display layer
//! re-resolves the cell and its four neighbors, since a new wall can change an
//! adjacent wall's shape.
//!
//! # Example
//!
//! ```rust
//! use des_map_autotile::{WallAutotile, WallVariant};
//! use des_map_core::{Coord, GridState, TileDescriptor};
//!
//! let wall = TileDescriptor::new("Walls", 0, "Wall", '|');
//! let state = GridState::default()
//!     .with_tile(Coord::new(0, 0), &wall)
//!     .unwrap()
//!     .with_tile(Coord::new(1, 0), &wall)
//!     .unwrap();
//!
//! let autotile = WallAutotile::default();
//! assert_eq!(autotile.resolve_variant(&state, Coord::new(0, 0)), WallVariant::Horizontal);
//! assert_eq!(autotile.tile_id(WallVariant::Horizontal), "Walls-1");
//! ```

pub mod bitmask;
pub mod config;
pub mod variant;

pub use bitmask::{affected_cells, calculate_bitmask, grid_bitmask, neighbors};
pub use config::{WallAutotile, DEFAULT_WALL_CATEGORY};
pub use variant::WallVariant;

// Re-export des_map_core
pub use des_map_core;
