//! des_map_compiler - Level documents from painted grids
//!
//! This crate turns a [`GridState`](des_map_core::GridState) into the text of a
//! NetHack/MiniHack `des` level:
//!
//! ```text
//! MAZE: "mylevel", ' '
//! FLAGS:premapped
//! GEOMETRY:center,center
//!
//! MAP
//! -----
//! |...|
//! -----
//! ENDMAP
//!
//! STAIR:(3, 1),down
//! BRANCH: (1,1,1,1),(2,2,2,2)
//! MONSTER: random, random, (2,1)
//! ```
//!
//! The map block spans the bounding box of all placements with the grid's
//! highest row printed first. Start, exit and creature placements are drawn as
//! floor and described by the directives that follow the map.
//!
//! # Example
//!
//! ```rust
//! use des_map_compiler::compile;
//! use des_map_core::{Coord, GridState, TileDescriptor};
//!
//! let wall = TileDescriptor::new("Walls", 0, "Wall", '#');
//! let state = GridState::new("tiny").with_tile(Coord::new(0, 0), &wall).unwrap();
//!
//! assert!(compile(&state).contains("MAP\n#\nENDMAP"));
//! ```

pub mod bounds;
pub mod directive;
pub mod generator;
pub mod roles;

pub use bounds::MapBounds;
pub use directive::Directive;
pub use generator::{DesCompiler, EMPTY_GLYPH, FLOOR_GLYPH};
pub use roles::CategoryRoles;

use des_map_core::GridState;

/// Compile a grid with the default category roles
pub fn compile(state: &GridState) -> String {
    DesCompiler::default().compile(state)
}
