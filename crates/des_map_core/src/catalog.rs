//! Tile catalog and its JSON loader
//!
//! The catalog is a list of categories, each holding an ordered list of tiles:
//!
//! ```json
//! [
//!   {
//!     "class": "Walls",
//!     "objects": [
//!       { "name": "Vertical wall", "image": "walls/0.png", "glyph": { "character": "|" } }
//!     ]
//!   },
//!   {
//!     "class": "Player",
//!     "objects": [
//!       { "name": "Player", "image": "player.png", "glyph": { "character": "@" },
//!         "max_instances": 1 }
//!     ]
//!   }
//! ]
//! ```
//!
//! `visible_in_editor` defaults to `true` and `max_instances` to `-1` (unlimited).

use crate::tile::TileDescriptor;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a tile catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    class: String,
    #[serde(default)]
    objects: Vec<RawTile>,
}

#[derive(Debug, Deserialize)]
struct RawTile {
    name: String,
    #[serde(default)]
    wiki_link: Option<String>,
    #[serde(default)]
    image: String,
    glyph: RawGlyph,
    #[serde(default = "default_visible")]
    visible_in_editor: bool,
    #[serde(default = "default_max_instances")]
    max_instances: i64,
}

#[derive(Debug, Deserialize)]
struct RawGlyph {
    character: String,
}

fn default_visible() -> bool {
    true
}

fn default_max_instances() -> i64 {
    -1
}

/// Immutable mapping from category name to its ordered tiles
///
/// Category order follows the source file.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct TileCatalog {
    categories: Vec<(String, Vec<TileDescriptor>)>,
    /// tile id -> (category index, tile index)
    index: HashMap<String, (usize, usize)>,
}

impl TileCatalog {
    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawCategory> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse a catalog from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        let raw: Vec<RawCategory> = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: Vec<RawCategory>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for category in raw {
            let mut tiles = Vec::with_capacity(category.objects.len());
            for (i, object) in category.objects.into_iter().enumerate() {
                tiles.push(convert_tile(&category.class, i, object)?);
            }
            catalog.insert_category(category.class, tiles)?;
        }
        tracing::debug!(
            categories = catalog.categories.len(),
            tiles = catalog.index.len(),
            "Loaded tile catalog"
        );
        Ok(catalog)
    }

    /// Append a category. Category names must be unique.
    pub fn insert_category(
        &mut self,
        name: impl Into<String>,
        tiles: Vec<TileDescriptor>,
    ) -> Result<(), CatalogError> {
        let name = name.into();
        if self.categories.iter().any(|(existing, _)| *existing == name) {
            return Err(CatalogError::Invalid(format!(
                "Duplicate category '{}'",
                name
            )));
        }

        // Validate everything before touching the index
        let mut seen = HashSet::with_capacity(tiles.len());
        for tile in &tiles {
            if tile.category != name {
                return Err(CatalogError::Invalid(format!(
                    "Tile '{}' is filed under '{}' but belongs to '{}'",
                    tile.id, name, tile.category
                )));
            }
            if self.index.contains_key(&tile.id) || !seen.insert(tile.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "Duplicate tile id '{}'",
                    tile.id
                )));
            }
        }

        let category_idx = self.categories.len();
        for (tile_idx, tile) in tiles.iter().enumerate() {
            self.index.insert(tile.id.clone(), (category_idx, tile_idx));
        }
        self.categories.push((name, tiles));
        Ok(())
    }

    /// All categories with their tiles, in catalog order
    pub fn tiles(&self) -> impl Iterator<Item = (&str, &[TileDescriptor])> {
        self.categories
            .iter()
            .map(|(name, tiles)| (name.as_str(), tiles.as_slice()))
    }

    /// Tiles of a single category
    pub fn category(&self, name: &str) -> Option<&[TileDescriptor]> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, tiles)| tiles.as_slice())
    }

    /// Look up a tile by identifier
    pub fn get(&self, id: &str) -> Option<&TileDescriptor> {
        let &(c, t) = self.index.get(id)?;
        self.categories.get(c).and_then(|(_, tiles)| tiles.get(t))
    }

    /// Tiles the palette should show
    pub fn visible_tiles(&self) -> impl Iterator<Item = &TileDescriptor> {
        self.categories
            .iter()
            .flat_map(|(_, tiles)| tiles.iter())
            .filter(|t| t.visible)
    }

    /// Total number of tiles across all categories
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn convert_tile(category: &str, index: usize, raw: RawTile) -> Result<TileDescriptor, CatalogError> {
    let mut chars = raw.glyph.character.chars();
    let glyph = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(CatalogError::Invalid(format!(
                "Tile '{}' in '{}' must have a single-character glyph, got {:?}",
                raw.name, category, raw.glyph.character
            )))
        }
    };

    let max_instances = match raw.max_instances {
        -1 => None,
        n if n >= 0 => Some(u32::try_from(n).map_err(|_| {
            CatalogError::Invalid(format!(
                "Tile '{}' in '{}' has an out of range max_instances {}",
                raw.name, category, n
            ))
        })?),
        n => {
            return Err(CatalogError::Invalid(format!(
                "Tile '{}' in '{}' has an invalid max_instances {}",
                raw.name, category, n
            )))
        }
    };

    let mut tile = TileDescriptor::new(category, index, raw.name, glyph)
        .with_visible(raw.visible_in_editor)
        .with_image(raw.image);
    tile.wiki_link = raw.wiki_link;
    tile.max_instances = max_instances;
    Ok(tile)
}
