//! Document generation
//!
//! Turns a [`GridState`] into a level document in three independent passes:
//! header, map block and footer directives.

use des_map_core::{Coord, GridState};

use crate::bounds::MapBounds;
use crate::directive::Directive;
use crate::roles::CategoryRoles;

/// Glyph drawn under start, exit and creature placements
pub const FLOOR_GLYPH: char = '.';

/// Glyph drawn for cells without a placement
pub const EMPTY_GLYPH: char = ' ';

/// Compiles grid states into level documents
///
/// Compilation is a pure function of the state and the configured roles: the
/// same input always yields byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct DesCompiler {
    pub roles: CategoryRoles,
}

impl DesCompiler {
    pub fn new(roles: CategoryRoles) -> Self {
        Self { roles }
    }

    /// Compile a full document: header, map block, then footer
    pub fn compile(&self, state: &GridState) -> String {
        let bounds = MapBounds::of(state);
        let mut document = self.header(state);
        document.push_str(&self.map_block(state, bounds));
        document.push_str(&self.footer(state, bounds));

        tracing::debug!(
            level = state.level_name(),
            placements = state.len(),
            bytes = document.len(),
            "Compiled level document"
        );
        document
    }

    /// `MAZE`/`FLAGS`/`GEOMETRY` preamble
    pub fn header(&self, state: &GridState) -> String {
        format!(
            "MAZE: \"{}\", ' '\nFLAGS:premapped\nGEOMETRY:center,center\n",
            state.level_name()
        )
    }

    /// Map rows, top row first, without the `MAP`/`ENDMAP` wrapper
    ///
    /// Document row 0 is the highest grid row, so rows run from `max_y` down to
    /// `min_y`. An empty grid has no rows.
    pub fn map_rows(&self, state: &GridState, bounds: Option<MapBounds>) -> Vec<String> {
        let Some(b) = bounds else {
            return Vec::new();
        };

        (b.min_y..=b.max_y)
            .rev()
            .map(|y| {
                (b.min_x..=b.max_x)
                    .map(|x| match state.get(Coord::new(x, y)) {
                        Some(placed) if self.roles.is_marker(placed.category()) => FLOOR_GLYPH,
                        Some(placed) => placed.glyph(),
                        None => EMPTY_GLYPH,
                    })
                    .collect()
            })
            .collect()
    }

    /// The `MAP` ... `ENDMAP` block with its surrounding blank lines
    pub fn map_block(&self, state: &GridState, bounds: Option<MapBounds>) -> String {
        let mut block = String::from("\nMAP\n");
        for row in self.map_rows(state, bounds) {
            block.push_str(&row);
            block.push('\n');
        }
        block.push_str("ENDMAP\n\n");
        block
    }

    /// Footer directives in document order: stair, branch, then monsters
    ///
    /// Start and exit use the first placement of their category in coordinate
    /// order. Missing categories produce no directive.
    pub fn directives(&self, state: &GridState, bounds: Option<MapBounds>) -> Vec<Directive> {
        let Some(b) = bounds else {
            return Vec::new();
        };

        let mut directives = Vec::new();

        if let Some(exit) = state.placements_of(&self.roles.exit).next() {
            let (x, y) = b.to_document(exit.coord);
            directives.push(Directive::Stair { x, y });
        }

        if let Some(start) = state.placements_of(&self.roles.start).next() {
            let (x, y) = b.to_document(start.coord);
            directives.push(Directive::Branch { x, y });
        }

        for creature in state.placements_of(&self.roles.creature) {
            let (x, y) = b.to_document(creature.coord);
            directives.push(Directive::Monster { x, y });
        }

        directives
    }

    /// Footer directives, one per line
    pub fn footer(&self, state: &GridState, bounds: Option<MapBounds>) -> String {
        self.directives(state, bounds)
            .iter()
            .map(|d| format!("{}\n", d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use des_map_core::TileDescriptor;

    fn tile(category: &str, glyph: char) -> TileDescriptor {
        TileDescriptor::new(category, 0, category, glyph)
    }

    fn grid(cells: &[(i32, i32, &TileDescriptor)]) -> GridState {
        cells.iter().fold(GridState::default(), |s, (x, y, t)| {
            s.with_tile(Coord::new(*x, *y), t).unwrap()
        })
    }

    #[test]
    fn test_header_literal() {
        let compiler = DesCompiler::default();
        let state = GridState::new("oracle");
        assert_eq!(
            compiler.header(&state),
            "MAZE: \"oracle\", ' '\nFLAGS:premapped\nGEOMETRY:center,center\n"
        );
    }

    #[test]
    fn test_single_cell_map() {
        let compiler = DesCompiler::default();
        let wall = tile("Walls", '#');
        let state = grid(&[(0, 0, &wall)]);
        assert_eq!(
            compiler.map_rows(&state, MapBounds::of(&state)),
            vec!["#".to_string()]
        );
    }

    #[test]
    fn test_rows_are_inverted() {
        let compiler = DesCompiler::default();
        let wall = tile("Walls", '#');
        let floor = tile("Floor", '.');
        // Glyph at the lower y must end up on the last line
        let state = grid(&[(0, 0, &wall), (0, 1, &floor)]);

        let block = compiler.map_block(&state, MapBounds::of(&state));
        assert_eq!(block, "\nMAP\n.\n#\nENDMAP\n\n");
    }

    #[test]
    fn test_gaps_are_spaces_and_markers_are_floor() {
        let compiler = DesCompiler::default();
        let wall = tile("Walls", '-');
        let player = tile("Player", '@');
        let monster = tile("Monster", 'd');
        let state = grid(&[(0, 0, &wall), (2, 0, &player), (1, 1, &monster)]);

        let rows = compiler.map_rows(&state, MapBounds::of(&state));
        assert_eq!(rows, vec![" . ".to_string(), "- .".to_string()]);
    }

    #[test]
    fn test_empty_grid_document() {
        let compiler = DesCompiler::default();
        let document = compiler.compile(&GridState::default());
        assert_eq!(
            document,
            "MAZE: \"mylevel\", ' '\nFLAGS:premapped\nGEOMETRY:center,center\n\nMAP\nENDMAP\n\n"
        );
    }

    #[test]
    fn test_footer_order_and_transform() {
        let compiler = DesCompiler::default();
        let monster = tile("Monster", 'd');
        let stairs = tile("Staircase", '>');
        let player = tile("Player", '@');
        let state = grid(&[
            (5, 0, &monster),
            (1, 2, &monster),
            (4, 4, &stairs),
            (1, 1, &player),
        ]);

        let directives = compiler.directives(&state, MapBounds::of(&state));
        assert_eq!(
            directives,
            vec![
                Directive::Stair { x: 3, y: 0 },
                Directive::Branch { x: 0, y: 3 },
                Directive::Monster { x: 0, y: 2 },
                Directive::Monster { x: 4, y: 4 },
            ]
        );
    }

    #[test]
    fn test_first_exit_wins() {
        let compiler = DesCompiler::default();
        let stairs = tile("Staircase", '>');
        let state = grid(&[(3, 0, &stairs), (0, 0, &stairs)]);

        let footer = compiler.footer(&state, MapBounds::of(&state));
        assert_eq!(footer, "STAIR:(0, 0),down\n");
    }

    #[test]
    fn test_custom_roles() {
        let roles = CategoryRoles {
            creature: "Critters".to_string(),
            ..CategoryRoles::default()
        };
        let compiler = DesCompiler::new(roles);
        let newt = tile("Critters", ':');
        let state = grid(&[(0, 0, &newt)]);

        assert_eq!(compiler.map_rows(&state, MapBounds::of(&state)), vec![".".to_string()]);
        assert_eq!(
            compiler.footer(&state, MapBounds::of(&state)),
            "MONSTER: random, random, (0,0)\n"
        );
    }

    #[test]
    fn test_footer_with_extreme_coordinates() {
        let compiler = DesCompiler::default();
        let monster = tile("Monster", 'd');
        let state = grid(&[(0, i32::MIN, &monster), (0, 1, &monster)]);

        let footer = compiler.footer(&state, MapBounds::of(&state));
        assert_eq!(
            footer,
            "MONSTER: random, random, (0,2147483649)\nMONSTER: random, random, (0,0)\n"
        );
    }

    #[test]
    fn test_compile_at_range_corners() {
        let compiler = DesCompiler::default();
        let wall = tile("Walls", '-');
        let player = tile("Player", '@');
        let state = grid(&[
            (i32::MAX, i32::MAX, &wall),
            (i32::MAX - 1, i32::MAX - 1, &player),
        ]);

        let document = compiler.compile(&state);
        assert!(document.contains("\nMAP\n -\n. \nENDMAP\n"));
        assert!(document.ends_with("BRANCH: (0,1,0,1),(1,2,1,2)\n"));

        let low = grid(&[(i32::MIN, i32::MIN, &wall), (i32::MIN, i32::MIN + 1, &player)]);
        assert!(compiler.compile(&low).contains("\nMAP\n.\n-\nENDMAP\n"));
    }
}
