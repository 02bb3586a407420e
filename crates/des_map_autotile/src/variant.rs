//! Wall variant classification

use crate::bitmask::neighbors::{DOWN, LEFT, RIGHT, UP};

/// Structural form of a wall segment, chosen from its orthogonal neighbors
///
/// The classification is deliberately coarse: corners, tees and crossings all
/// fall into [`WallVariant::Junction`], except when nothing is below, which is
/// [`WallVariant::OpenBelow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallVariant {
    /// Only vertical neighbors (`|`)
    Vertical,
    /// Only horizontal neighbors (`-`)
    Horizontal,
    /// Anything else with a wall below
    Junction,
    /// Anything else without a wall below, including an isolated wall
    OpenBelow,
}

impl WallVariant {
    pub const ALL: [WallVariant; 4] = [
        WallVariant::Vertical,
        WallVariant::Horizontal,
        WallVariant::Junction,
        WallVariant::OpenBelow,
    ];

    /// Classify from the four neighbor flags. Rules are checked in order.
    pub fn classify(up: bool, down: bool, left: bool, right: bool) -> Self {
        if (right || left) && !up && !down {
            WallVariant::Horizontal
        } else if !right && !left && (up || down) {
            WallVariant::Vertical
        } else if !down {
            WallVariant::OpenBelow
        } else {
            WallVariant::Junction
        }
    }

    /// Classify from a neighbor bitmask (see [`crate::bitmask::neighbors`])
    pub fn from_bitmask(bitmask: u8) -> Self {
        Self::classify(
            bitmask & UP != 0,
            bitmask & DOWN != 0,
            bitmask & LEFT != 0,
            bitmask & RIGHT != 0,
        )
    }

    /// Index of this variant's tile inside the wall category of a standard catalog
    pub fn default_offset(self) -> usize {
        match self {
            WallVariant::Vertical => 0,
            WallVariant::Horizontal => 1,
            WallVariant::Junction => 3,
            WallVariant::OpenBelow => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_horizontal_neighbor() {
        assert_eq!(
            WallVariant::classify(false, false, true, false),
            WallVariant::Horizontal
        );
        assert_eq!(
            WallVariant::classify(false, false, false, true),
            WallVariant::Horizontal
        );
    }

    #[test]
    fn test_single_vertical_neighbor() {
        assert_eq!(
            WallVariant::classify(true, false, false, false),
            WallVariant::Vertical
        );
        assert_eq!(
            WallVariant::classify(false, true, false, false),
            WallVariant::Vertical
        );
    }

    #[test]
    fn test_isolated_wall_is_open_below() {
        assert_eq!(
            WallVariant::classify(false, false, false, false),
            WallVariant::OpenBelow
        );
    }

    #[test]
    fn test_corners_and_junctions() {
        // Up + left corner: no wall below
        assert_eq!(
            WallVariant::classify(true, false, true, false),
            WallVariant::OpenBelow
        );
        // Down + right corner
        assert_eq!(
            WallVariant::classify(false, true, false, true),
            WallVariant::Junction
        );
        // Four-way crossing
        assert_eq!(
            WallVariant::classify(true, true, true, true),
            WallVariant::Junction
        );
    }

    #[test]
    fn test_every_bitmask_classifies() {
        for bitmask in 0u8..16 {
            let variant = WallVariant::from_bitmask(bitmask);
            assert!(WallVariant::ALL.contains(&variant));
        }
        assert_eq!(WallVariant::from_bitmask(LEFT | RIGHT), WallVariant::Horizontal);
        assert_eq!(WallVariant::from_bitmask(UP | DOWN), WallVariant::Vertical);
    }

    #[test]
    fn test_default_offsets() {
        let offsets: Vec<usize> = WallVariant::ALL.iter().map(|v| v.default_offset()).collect();
        assert_eq!(offsets, vec![0, 1, 3, 4]);
    }
}
