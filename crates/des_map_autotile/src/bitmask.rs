//! Orthogonal neighbor flags and bitmask calculation

use des_map_core::{Coord, GridState};

/// Neighbor direction flags for bitmask calculation
///
/// `UP` is `y + 1`, `DOWN` is `y - 1`, `LEFT` is `x + 1` and `RIGHT` is `x - 1`.
pub mod neighbors {
    pub const UP: u8 = 0b0001; // (x, y + 1)
    pub const DOWN: u8 = 0b0010; // (x, y - 1)
    pub const LEFT: u8 = 0b0100; // (x + 1, y)
    pub const RIGHT: u8 = 0b1000; // (x - 1, y)
}

/// Calculate the orthogonal neighbor bitmask for a cell
pub fn calculate_bitmask<F>(x: i32, y: i32, is_same_category: F) -> u8
where
    F: Fn(i32, i32) -> bool,
{
    use neighbors::*;

    // Neighbors past the edge of the i32 range count as empty
    let occupied = |dx: i32, dy: i32| match (x.checked_add(dx), y.checked_add(dy)) {
        (Some(nx), Some(ny)) => is_same_category(nx, ny),
        _ => false,
    };

    let mut bitmask = 0u8;

    if occupied(0, 1) {
        bitmask |= UP;
    }
    if occupied(0, -1) {
        bitmask |= DOWN;
    }
    if occupied(1, 0) {
        bitmask |= LEFT;
    }
    if occupied(-1, 0) {
        bitmask |= RIGHT;
    }

    bitmask
}

/// Neighbor bitmask of `coord` against placements of `category` in `state`
pub fn grid_bitmask(state: &GridState, coord: Coord, category: &str) -> u8 {
    calculate_bitmask(coord.x, coord.y, |nx, ny| {
        state.is_category_at(Coord::new(nx, ny), category)
    })
}

/// Cells whose variant must be re-resolved after `coord` changed
///
/// This is `coord` itself plus every orthogonal neighbor, filtered to cells
/// that currently hold `category`. A removed cell is therefore not included,
/// but its neighbors are.
pub fn affected_cells(state: &GridState, coord: Coord, category: &str) -> Vec<Coord> {
    std::iter::once(coord)
        .chain(coord.orthogonal_neighbors().into_iter().flatten())
        .filter(|c| state.is_category_at(*c, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::neighbors::*;
    use super::*;
    use des_map_core::TileDescriptor;

    fn wall() -> TileDescriptor {
        TileDescriptor::new("Walls", 0, "Wall", '|')
    }

    #[test]
    fn test_bitmask_directions() {
        let only = |tx: i32, ty: i32| move |x: i32, y: i32| x == tx && y == ty;

        assert_eq!(calculate_bitmask(0, 0, only(0, 1)), UP);
        assert_eq!(calculate_bitmask(0, 0, only(0, -1)), DOWN);
        assert_eq!(calculate_bitmask(0, 0, only(1, 0)), LEFT);
        assert_eq!(calculate_bitmask(0, 0, only(-1, 0)), RIGHT);
        assert_eq!(calculate_bitmask(0, 0, only(1, 1)), 0);
    }

    #[test]
    fn test_grid_bitmask_ignores_other_categories() {
        let floor = TileDescriptor::new("Floor", 0, "Floor", '.');
        let state = GridState::default()
            .with_tile(Coord::new(0, 1), &wall())
            .unwrap()
            .with_tile(Coord::new(1, 0), &floor)
            .unwrap();

        assert_eq!(grid_bitmask(&state, Coord::new(0, 0), "Walls"), UP);
    }

    #[test]
    fn test_affected_cells_after_removal() {
        let state = GridState::default()
            .with_tile(Coord::new(0, 0), &wall())
            .unwrap()
            .with_tile(Coord::new(1, 0), &wall())
            .unwrap()
            .with_tile(Coord::new(0, 1), &wall())
            .unwrap();
        let removed = state.without_tile(Coord::new(0, 0)).unwrap();

        let mut cells = affected_cells(&removed, Coord::new(0, 0), "Walls");
        cells.sort();
        assert_eq!(cells, vec![Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn test_bitmask_at_range_edge() {
        let state = GridState::default()
            .with_tile(Coord::new(i32::MAX, 0), &wall())
            .unwrap()
            .with_tile(Coord::new(i32::MAX - 1, 0), &wall())
            .unwrap();

        assert_eq!(grid_bitmask(&state, Coord::new(i32::MAX, 0), "Walls"), RIGHT);
        assert_eq!(calculate_bitmask(i32::MIN, i32::MIN, |_, _| true), UP | LEFT);

        let mut cells = affected_cells(&state, Coord::new(i32::MAX, 0), "Walls");
        cells.sort();
        assert_eq!(cells, vec![Coord::new(i32::MAX - 1, 0), Coord::new(i32::MAX, 0)]);
    }
}
