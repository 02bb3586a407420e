//! Editor configuration
//!
//! Stored as TOML in the platform config directory:
//! - Windows: %APPDATA%/des_map_editor/config.toml
//! - Linux: ~/.config/des_map_editor/config.toml
//! - macOS: ~/Library/Application Support/des_map_editor/config.toml
//!
//! Only settings live here; painted grids are never written to disk.

use des_map_autotile::DEFAULT_WALL_CATEGORY;
use des_map_compiler::CategoryRoles;
use des_map_core::{Coord, DEFAULT_LEVEL_NAME};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::HISTORY_LIMIT;

/// Allowed viewport widths, in cells
pub const VIEWPORT_WIDTH_RANGE: RangeInclusive<u32> = 5..=79;
/// Allowed viewport heights, in cells
pub const VIEWPORT_HEIGHT_RANGE: RangeInclusive<u32> = 5..=21;

/// Errors that can occur when reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The rectangle of cells the editor lets the user paint
///
/// The origin is the bottom-left cell `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 15,
            height: 10,
        }
    }
}

impl Viewport {
    /// Create a viewport, clamping both sides into their allowed ranges
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }.clamped()
    }

    pub fn clamped(self) -> Self {
        Self {
            width: clamp(self.width, &VIEWPORT_WIDTH_RANGE),
            height: clamp(self.height, &VIEWPORT_HEIGHT_RANGE),
        }
    }

    pub fn grow_width(self) -> Self {
        Self::new(self.width.saturating_add(1), self.height)
    }

    pub fn shrink_width(self) -> Self {
        Self::new(self.width.saturating_sub(1), self.height)
    }

    pub fn grow_height(self) -> Self {
        Self::new(self.width, self.height.saturating_add(1))
    }

    pub fn shrink_height(self) -> Self {
        Self::new(self.width, self.height.saturating_sub(1))
    }

    /// Check whether a cell lies inside the viewport
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Settings for an editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Name written into the `MAZE` header of new levels
    pub level_name: String,
    /// Snapshots kept by the grid store
    pub history_limit: usize,
    /// Category drawn with wall autotiling
    pub wall_category: String,
    pub viewport: Viewport,
    /// Categories the compiler turns into footer directives
    pub roles: CategoryRoles,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            level_name: DEFAULT_LEVEL_NAME.to_string(),
            history_limit: HISTORY_LIMIT,
            wall_category: DEFAULT_WALL_CATEGORY.to_string(),
            viewport: Viewport::default(),
            roles: CategoryRoles::default(),
        }
    }
}

impl EditorConfig {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "des_map_editor")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("No config directory available, using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string, normalizing out-of-range values
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Write to a file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn normalized(mut self) -> Self {
        let viewport = self.viewport.clamped();
        if viewport != self.viewport {
            tracing::warn!(
                "Viewport {}x{} out of range, clamped to {}x{}",
                self.viewport.width,
                self.viewport.height,
                viewport.width,
                viewport.height
            );
        }
        self.viewport = viewport;
        self.history_limit = self.history_limit.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.level_name, "mylevel");
        assert_eq!(config.viewport, Viewport { width: 15, height: 10 });
        assert_eq!(config.history_limit, 20);
        assert_eq!(config.roles.exit, "Staircase");
        assert_eq!(config.wall_category, "Walls");
    }

    #[test]
    fn test_viewport_clamps() {
        assert_eq!(Viewport::new(100, 1), Viewport { width: 79, height: 5 });
        assert_eq!(Viewport::new(79, 21).grow_width().grow_height(), Viewport::new(79, 21));
        assert_eq!(Viewport::new(5, 5).shrink_width().shrink_height(), Viewport::new(5, 5));
        assert_eq!(Viewport::new(10, 10).grow_width().shrink_height(), Viewport::new(11, 9));
    }

    #[test]
    fn test_viewport_contains() {
        let viewport = Viewport::default();
        assert!(viewport.contains(Coord::new(0, 0)));
        assert!(viewport.contains(Coord::new(14, 9)));
        assert!(!viewport.contains(Coord::new(15, 0)));
        assert!(!viewport.contains(Coord::new(0, 10)));
        assert!(!viewport.contains(Coord::new(-1, 3)));
    }

    #[test]
    fn test_partial_toml() {
        let config = EditorConfig::from_toml(
            r#"
level_name = "sokoban"
wall_category = "Stone"

[viewport]
width = 200

[roles]
creature = "Monsters"
"#,
        )
        .unwrap();

        assert_eq!(config.level_name, "sokoban");
        assert_eq!(config.viewport, Viewport { width: 79, height: 10 });
        assert_eq!(config.roles.creature, "Monsters");
        assert_eq!(config.wall_category, "Stone");
        assert_eq!(config.roles.start, "Player");
        assert_eq!(config.history_limit, 20);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            EditorConfig::from_toml("level_name = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = EditorConfig::default();
        config.level_name = "castle".to_string();
        config.viewport = Viewport::new(40, 12);
        config.save(&path).unwrap();

        let loaded = EditorConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = EditorConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, EditorConfig::default());
    }
}
