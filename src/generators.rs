use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{Cell, CompassPrimary};
use crate::grid_dimensions::MazeDimensions;

/// How many times a maze is carved, each time on a fresh set of cells, looking for an end cell.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Tuning for maze generation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GenerationOptions {
    max_attempts: usize,
}

impl GenerationOptions {
    /// At least one attempt is always made.
    #[inline]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions { max_attempts: MAX_GENERATION_ATTEMPTS }
    }
}

#[derive(Debug, Default)]
pub struct GenerationOptionsBuilder {
    options: GenerationOptions,
}

impl GenerationOptionsBuilder {
    pub fn new() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }

    /// Zero is raised to one, a maze is always carved.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.options.max_attempts = attempts.max(1);
        self
    }

    pub fn build(self) -> GenerationOptions {
        self.options
    }
}

/// Allocate a fully walled, unmarked set of cells, reusing the buffer's storage.
pub fn reset_cells(cells: &mut Vec<Cell>, dimensions: &MazeDimensions) {
    cells.clear();
    cells.extend((0..dimensions.size()).map(Cell::new));
}

/// Carve a perfect maze into `cells` with a randomized depth first search that backtracks
/// with an explicit stack.
///
/// The cell at index 0 is the start. Whenever a dead end is reached straight after advancing
/// (the stack is deeper than it was at the last advance) and that cell may hold the end, it
/// becomes the new end and the previous end is cleared.
///
/// `cells` must be freshly reset for `dimensions`. Returns the index of the end cell, or None
/// if no dead end qualified.
pub fn recursive_backtracker<R>(cells: &mut [Cell],
                                dimensions: &MazeDimensions,
                                rng: &mut R)
                                -> Option<usize>
    where R: Rng
{
    let cells_count = dimensions.size();
    debug_assert_eq!(cells.len(), cells_count);

    let mut stack: Vec<usize> = Vec::with_capacity(cells_count);
    let mut current = 0;
    cells[current].set_start(true);

    // Stack depth at the last random advance.
    let mut distance = 0;
    let mut visited_count = 1;
    let mut end: Option<usize> = None;

    while visited_count <= cells_count {

        if !cells[current].is_visited() {
            cells[current].mark_visited();
            visited_count += 1;
        }

        let unvisited_neighbours: SmallVec<[(CompassPrimary, usize); 4]> = CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| dimensions.neighbour_at_direction(current, dir).map(|n| (dir, n)))
            .filter(|&(_, neighbour)| !cells[neighbour].is_visited())
            .collect();

        if unvisited_neighbours.is_empty() {

            if stack.len() > distance && dimensions.can_place_end(current) {
                if let Some(previous_end) = end.replace(current) {
                    cells[previous_end].set_end(false);
                }
                cells[current].set_end(true);
            }

            match stack.pop() {
                Some(previous) => current = previous,
                None => break,
            }

        } else {

            let (direction, next) =
                unvisited_neighbours[rng.gen_range(0..unvisited_neighbours.len())];

            cells[current].remove_wall(direction.wall());
            cells[next].remove_wall(direction.opposite().wall());

            distance = stack.len();
            stack.push(current);
            current = next;
        }
    }

    end
}

#[cfg(test)]
mod tests {

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::Walls;
    use crate::units::{Height, Width};

    fn carve(w: usize, h: usize, seed: u64) -> (Vec<Cell>, Option<usize>) {
        let dimensions = MazeDimensions::new(Width(w), Height(h)).unwrap();
        let mut cells = Vec::new();
        reset_cells(&mut cells, &dimensions);
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let end = recursive_backtracker(&mut cells, &dimensions, &mut rng);
        (cells, end)
    }

    #[test]
    fn default_options() {
        assert_eq!(GenerationOptions::default().max_attempts(), MAX_GENERATION_ATTEMPTS);
        assert_eq!(GenerationOptionsBuilder::new().build(), GenerationOptions::default());
    }

    #[test]
    fn options_builder() {
        let options = GenerationOptionsBuilder::new().max_attempts(3).build();
        assert_eq!(options.max_attempts(), 3);
        let options = GenerationOptionsBuilder::new().max_attempts(0).build();
        assert_eq!(options.max_attempts(), 1);
    }

    #[test]
    fn reset_produces_enclosed_cells() {
        let dimensions = MazeDimensions::new(Width(3), Height(2)).unwrap();
        let mut cells = vec![Cell::new(42)];
        reset_cells(&mut cells, &dimensions);
        assert_eq!(cells.len(), 6);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(*cell, Cell::new(i));
        }
    }

    #[test]
    fn single_cell_has_no_end() {
        let (cells, end) = carve(1, 1, 7);
        assert_eq!(end, None);
        assert_eq!(cells[0].walls(), Walls::ALL);
        assert!(cells[0].is_start());
        assert!(cells[0].is_visited());
        assert!(!cells[0].is_end());
    }

    #[test]
    fn two_cells_in_a_row() {
        let (cells, end) = carve(2, 1, 0);
        assert_eq!(end, Some(1));
        assert!(cells[0].is_start());
        assert!(cells[1].is_end());
        assert_eq!(cells[0].walls(), Walls::TOP | Walls::BOTTOM | Walls::LEFT);
        assert_eq!(cells[1].walls(), Walls::TOP | Walls::RIGHT | Walls::BOTTOM);
    }

    #[test]
    fn single_column_corridor_ends_at_the_bottom() {
        let (cells, end) = carve(1, 4, 99);
        assert_eq!(end, Some(3));
        assert!(cells[3].is_end());
        assert_eq!(cells[0].walls(), Walls::TOP | Walls::RIGHT | Walls::LEFT);
        assert_eq!(cells[1].walls(), Walls::RIGHT | Walls::LEFT);
        assert_eq!(cells[3].walls(), Walls::RIGHT | Walls::BOTTOM | Walls::LEFT);
    }

    #[test]
    fn every_cell_visited_and_one_end_marked() {
        for seed in 0..20 {
            let (cells, end) = carve(8, 6, seed);
            assert!(cells.iter().all(|c| c.is_visited()));

            let ends = cells.iter().filter(|c| c.is_end()).map(|c| c.index()).collect::<Vec<_>>();
            match end {
                Some(index) => assert_eq!(ends, vec![index]),
                None => assert!(ends.is_empty()),
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let (a, end_a) = carve(12, 9, 1234);
        let (b, end_b) = carve(12, 9, 1234);
        assert_eq!(a, b);
        assert_eq!(end_a, end_b);
    }
}
