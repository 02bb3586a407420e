//! Tile descriptors

/// Build the catalog identifier for the `index`-th tile of a category
///
/// Identifiers look like `Walls-3`. The wall autotiler relies on this shape to
/// address a wall variant by its offset inside the `Walls` category.
pub fn tile_id(category: &str, index: usize) -> String {
    format!("{}-{}", category, index)
}

/// A paintable tile as defined by the tile catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDescriptor {
    /// Catalog identifier, `<category>-<index>`
    pub id: String,
    /// Display name (e.g., "Horizontal wall")
    pub name: String,
    /// Category the tile belongs to (e.g., "Walls", "Monster")
    pub category: String,
    /// Character written into the `MAP` block of the document
    pub glyph: char,
    /// Image reference for the palette, carried but never read by the core
    pub image: String,
    /// Optional documentation link
    pub wiki_link: Option<String>,
    /// Whether the palette should offer this tile
    pub visible: bool,
    /// Maximum number of placements of this tile's category. `None` is unlimited.
    pub max_instances: Option<u32>,
}

impl TileDescriptor {
    /// Create a visible, unlimited tile at position `index` of `category`
    pub fn new(category: impl Into<String>, index: usize, name: impl Into<String>, glyph: char) -> Self {
        let category = category.into();
        Self {
            id: tile_id(&category, index),
            name: name.into(),
            category,
            glyph,
            image: String::new(),
            wiki_link: None,
            visible: true,
            max_instances: None,
        }
    }

    /// Limit the number of placements of this tile's category
    pub fn with_max_instances(mut self, max: u32) -> Self {
        self.max_instances = Some(max);
        self
    }

    /// Set palette visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the palette image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_instances.is_none()
    }

    /// Check whether the category may hold `count` placements
    pub fn allows(&self, count: usize) -> bool {
        match self.max_instances {
            Some(max) => count <= max as usize,
            None => true,
        }
    }
}
