//! Categories with special meaning to the compiler

use serde::{Deserialize, Serialize};

/// Names of the categories the document treats specially
///
/// Start, exit and creature placements are drawn as floor (`.`) in the map
/// block and described by a directive in the footer instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRoles {
    /// Where the player arrives (`BRANCH`)
    pub start: String,
    /// Down staircase (`STAIR`)
    pub exit: String,
    /// Random monster spawns (`MONSTER`)
    pub creature: String,
}

impl Default for CategoryRoles {
    fn default() -> Self {
        Self {
            start: "Player".to_string(),
            exit: "Staircase".to_string(),
            creature: "Monster".to_string(),
        }
    }
}

impl CategoryRoles {
    /// Check whether a category is drawn as floor with a footer directive
    pub fn is_marker(&self, category: &str) -> bool {
        category == self.start || category == self.exit || category == self.creature
    }
}
