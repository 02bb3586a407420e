//! Headless level editor for NetHack/MiniHack des files
//!
//! Bundles everything between a front end's input events and the compiled
//! level document:
//!
//! - [`GridStore`] - the grid with a bounded history of snapshots
//! - [`EditorConfig`] - level name, viewport and category roles, stored as TOML
//! - [`RenderSync`] - paint/clear instructions for a display layer, with wall
//!   variants resolved
//! - [`EditorSession`] - catalog, config and store wired together
//!
//! Painting, erasing and compiling all run synchronously on the caller's
//! thread. Readers only ever observe whole snapshots.
//!
//! # Example
//!
//! ```rust
//! use des_map_editor::{builtin_catalog, EditorConfig, EditorSession};
//!
//! let mut session = EditorSession::new(builtin_catalog().unwrap(), EditorConfig::default());
//! session.paint((0, 0), "Player-0").unwrap();
//! session.paint((1, 0), "Staircase-0").unwrap();
//!
//! let document = session.compile();
//! assert!(document.contains("STAIR:(1, 0),down"));
//! ```

pub mod config;
pub mod render_sync;
pub mod session;
pub mod store;

pub use config::{ConfigError, EditorConfig, Viewport};
pub use render_sync::{RenderOp, RenderSync};
pub use session::{EditorError, EditorSession};
pub use store::{GridStore, HISTORY_LIMIT};

pub use des_map_autotile;
pub use des_map_compiler;
pub use des_map_core;

use des_map_core::{CatalogError, TileCatalog};

/// The tile catalog shipped with the editor
pub const BUILTIN_CATALOG: &str = include_str!("../assets/tiles.json");

/// Parse the shipped tile catalog
pub fn builtin_catalog() -> Result<TileCatalog, CatalogError> {
    TileCatalog::from_json(BUILTIN_CATALOG)
}
