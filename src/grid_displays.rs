use std::fmt;

use crate::cells::{Cell, CompassPrimary};
use crate::maze::Maze;

pub trait CellDisplay {
    /// Render the contents of a maze cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: &Cell) -> String {
        String::from("   ")
    }
}

/// Empty cell bodies, only the walls are drawn.
#[derive(Debug, Copy, Clone)]
pub struct BlankDisplay;
impl CellDisplay for BlankDisplay {}

/// Marks the start with an 'S' and the end, if the maze has one, with an 'E'.
#[derive(Debug, Copy, Clone)]
pub struct StartEndPointsDisplay;
impl CellDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, cell: &Cell) -> String {
        if cell.is_start() {
            String::from(" S ")
        } else if cell.is_end() {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// Text rendering of a maze's walls with box drawing characters.
pub struct MazeDisplay<'a> {
    maze: &'a Maze,
    cell_display: &'a dyn CellDisplay,
}

impl<'a> MazeDisplay<'a> {
    pub fn new(maze: &'a Maze, cell_display: &'a dyn CellDisplay) -> MazeDisplay<'a> {
        MazeDisplay {
            maze,
            cell_display,
        }
    }
}

impl Maze {
    /// Render with the start and end marked, or with blank cells.
    pub fn display(&self, mark_start_end: bool) -> MazeDisplay {
        if mark_start_end {
            MazeDisplay::new(self, &StartEndPointsDisplay)
        } else {
            MazeDisplay::new(self, &BlankDisplay)
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display(true))
    }
}

impl<'a> fmt::Display for MazeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let maze = self.maze;
        let dimensions = maze.dimensions();
        let columns_count = dimensions.width().0;
        let rows_count = dimensions.height().0;

        // Start by special case rendering the text for the north most boundary
        let mut output = String::from(WALL_RD);
        for index in 0..columns_count {
            output.push_str(WALL_LR_3);
            if maze.is_neighbour_linked(index, CompassPrimary::East) {
                output.push_str(WALL_LR);
            } else if index == columns_count - 1 {
                output.push_str(WALL_LD);
            } else {
                output.push_str(WALL_LRD);
            }
        }
        output.push('\n');

        for (index_row, row) in maze.cells().chunks(columns_count).enumerate() {

            let is_last_row = index_row == rows_count - 1;

            // The west most boundary of the row. The top section of each cell is drawn by the
            // row above it.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for (index_column, cell) in row.iter().enumerate() {

                let index = cell.index();
                let is_first_column = index_column == 0;
                let is_last_column = index_column == columns_count - 1;
                let east_open = maze.is_neighbour_linked(index, CompassPrimary::East);
                let south_open = maze.is_neighbour_linked(index, CompassPrimary::South);

                // Each cell uses the southern wall of the cell above it as its own northern wall,
                // so only the body, its eastern boundary ('|') and its southern boundary ('---+')
                // minus the south west corner are drawn here.
                row_middle_section_render.push_str(&self.cell_display.render_cell_body(cell));
                row_middle_section_render.push_str(if east_open { " " } else { WALL_UD });

                if is_first_column {
                    row_bottom_section_render.push_str(if is_last_row {
                        WALL_RU
                    } else if south_open {
                        WALL_UD
                    } else {
                        WALL_RUD
                    });
                }
                row_bottom_section_render.push_str(if south_open { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let access_se_from_east =
                            dimensions.neighbour_at_direction(index, CompassPrimary::East)
                                .map_or(false,
                                        |c| maze.is_neighbour_linked(c, CompassPrimary::South));
                        let access_se_from_south =
                            dimensions.neighbour_at_direction(index, CompassPrimary::South)
                                .map_or(false,
                                        |c| maze.is_neighbour_linked(c, CompassPrimary::East));
                        let show_right_section = !access_se_from_east;
                        let show_down_section = !access_se_from_south;
                        let show_up_section = !east_open;
                        let show_left_section = !south_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
