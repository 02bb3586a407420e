//! An editing session: catalog, settings and grid in one place

use des_map_autotile::WallAutotile;
use des_map_compiler::DesCompiler;
use des_map_core::{Coord, GridState, PlacementError, TileCatalog, TileDescriptor};
use thiserror::Error;

use crate::config::{EditorConfig, Viewport};
use crate::render_sync::RenderSync;
use crate::store::GridStore;

/// Why a paint request was refused
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Unknown tile '{0}'")]
    UnknownTile(String),
    #[error("Cell {coord} is outside the {width}x{height} viewport")]
    OutsideViewport { coord: Coord, width: u32, height: u32 },
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Everything a front end needs to paint a level and read it back
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct EditorSession {
    catalog: TileCatalog,
    config: EditorConfig,
    store: GridStore,
    compiler: DesCompiler,
}

impl EditorSession {
    pub fn new(catalog: TileCatalog, config: EditorConfig) -> Self {
        let store = GridStore::with_limit(
            GridState::new(config.level_name.clone()),
            config.history_limit,
        );
        let compiler = DesCompiler::new(config.roles.clone());
        tracing::info!(
            level = %config.level_name,
            tiles = catalog.len(),
            "Editor session started ({}x{})",
            config.viewport.width,
            config.viewport.height
        );
        Self {
            catalog,
            config,
            store,
            compiler,
        }
    }

    /// Paint the catalog tile `tile_id` at `coord`
    ///
    /// Cells outside the viewport are refused here; the store itself accepts
    /// any coordinate.
    pub fn paint(&mut self, coord: impl Into<Coord>, tile_id: &str) -> Result<(), EditorError> {
        let coord = coord.into();
        let viewport = self.config.viewport;
        if !viewport.contains(coord) {
            return Err(EditorError::OutsideViewport {
                coord,
                width: viewport.width,
                height: viewport.height,
            });
        }

        let tile = self
            .catalog
            .get(tile_id)
            .ok_or_else(|| EditorError::UnknownTile(tile_id.to_string()))?;
        self.store.try_add_tile(coord, tile)?;
        Ok(())
    }

    /// Paint a descriptor that may not come from the catalog
    pub fn paint_tile(&mut self, coord: impl Into<Coord>, tile: &TileDescriptor) -> bool {
        self.store.add_tile(coord, tile)
    }

    /// Erase the cell at `coord`. Returns whether anything was removed.
    pub fn erase(&mut self, coord: impl Into<Coord>) -> bool {
        self.store.remove_tile(coord)
    }

    pub fn rename(&mut self, level_name: impl Into<String>) {
        let level_name = level_name.into();
        self.config.level_name = level_name.clone();
        self.store.set_level_name(level_name);
    }

    /// Change the paintable area. Placements outside it are kept.
    pub fn resize(&mut self, viewport: Viewport) {
        self.config.viewport = viewport.clamped();
    }

    /// Compile the current grid into a level document
    pub fn compile(&self) -> String {
        let document = self.compiler.compile(self.store.latest());
        tracing::info!(
            level = %self.store.latest().level_name(),
            lines = document.lines().count(),
            "Compiled level"
        );
        document
    }

    pub fn state(&self) -> &GridState {
        self.store.latest()
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Wall autotiler for the configured wall category
    pub fn autotile(&self) -> WallAutotile {
        WallAutotile::new(self.config.wall_category.clone())
    }

    /// A fresh render sync for a display layer attaching to this session
    pub fn render_sync(&self) -> RenderSync {
        RenderSync::new(self.autotile())
    }
}
