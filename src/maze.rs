use std::fmt;
use std::slice;

use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use tracing::{debug, info, warn};

use crate::cells::{Cell, CompassPrimary};
use crate::errors::*;
use crate::generators::{self, GenerationOptions};
use crate::grid_dimensions::{IndexSmallVec, MazeDimensions};
use crate::units::{Height, Width};

/// The passages of a maze as an undirected graph, one node per cell in row major order.
pub type PassageGraph = Graph<(), (), Undirected, usize>;

/// A rectangular perfect maze: every cell is reachable from the start by exactly one route.
///
/// Built in full by the constructors, there is no partially generated maze.
#[derive(Debug, Clone)]
pub struct Maze {
    dimensions: MazeDimensions,
    cells: Vec<Cell>,
    attempts: usize,
}

/// Build a maze with the default options, seeded from the thread local random generator.
pub fn new_maze(width: Width, height: Height) -> Result<Maze> {
    Maze::new(width, height, &mut rand::thread_rng())
}

impl Maze {
    pub fn new<R: Rng>(width: Width, height: Height, rng: &mut R) -> Result<Maze> {
        Maze::with_options(width, height, &GenerationOptions::default(), rng)
    }

    /// A reproducible maze: the same seed and dimensions always carve the same maze.
    pub fn from_seed(width: Width, height: Height, seed: u64) -> Result<Maze> {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        Maze::new(width, height, &mut rng)
    }

    /// Carve a maze, retrying on fresh cells up to `options.max_attempts()` times until an end
    /// cell is placed.
    ///
    /// Running out of attempts is not an error, the maze is returned without an end.
    /// See `require_end`.
    pub fn with_options<R: Rng>(width: Width,
                                height: Height,
                                options: &GenerationOptions,
                                rng: &mut R)
                                -> Result<Maze> {

        let dimensions = MazeDimensions::new(width, height)?;
        let mut cells = Vec::with_capacity(dimensions.size());
        let mut attempts = 0;
        let mut end = None;

        while attempts < options.max_attempts() {
            attempts += 1;
            generators::reset_cells(&mut cells, &dimensions);
            end = generators::recursive_backtracker(&mut cells, &dimensions, rng);
            debug!(attempt = attempts, end = ?end, "carved maze");
            if end.is_some() {
                break;
            }
        }

        match end {
            Some(end_index) => {
                info!(width = width.0,
                      height = height.0,
                      attempts,
                      end = end_index,
                      "maze built")
            }
            None => {
                warn!(width = width.0,
                      height = height.0,
                      attempts,
                      "maze built without an end cell")
            }
        }

        Ok(Maze {
            dimensions,
            cells,
            attempts,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<Cell> {
        self.cells.iter()
    }

    /// How many carving attempts it took to build this maze.
    #[inline]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn start(&self) -> &Cell {
        &self.cells[0]
    }

    pub fn end(&self) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.is_end())
    }

    /// The end cell, or `EndUnresolved` if every generation attempt failed to place one.
    pub fn require_end(&self) -> Result<&Cell> {
        self.end().ok_or_else(|| ErrorKind::EndUnresolved(self.attempts).into())
    }

    #[inline]
    pub fn is_top_edge(&self, cell: &Cell) -> bool {
        self.dimensions.is_top_edge(cell.index())
    }

    #[inline]
    pub fn is_right_edge(&self, cell: &Cell) -> bool {
        self.dimensions.is_right_edge(cell.index())
    }

    #[inline]
    pub fn is_bottom_edge(&self, cell: &Cell) -> bool {
        self.dimensions.is_bottom_edge(cell.index())
    }

    #[inline]
    pub fn is_left_edge(&self, cell: &Cell) -> bool {
        self.dimensions.is_left_edge(cell.index())
    }

    #[inline]
    pub fn is_edge(&self, cell: &Cell) -> bool {
        self.dimensions.is_edge(cell.index())
    }

    #[inline]
    pub fn can_place_end(&self, cell: &Cell) -> bool {
        self.dimensions.can_place_end(cell.index())
    }

    /// Is there an open passage from a cell to its neighbour in the given direction?
    pub fn is_neighbour_linked(&self, index: usize, direction: CompassPrimary) -> bool {
        self.dimensions
            .neighbour_at_direction(index, direction)
            .map_or(false, |_| !self.cells[index].has_wall(direction.wall()))
    }

    /// Are two cells joined by an open passage? Cells that are not neighbours never are.
    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.dimensions
            .direction_between(a, b)
            .map_or(false, |direction| self.is_neighbour_linked(a, direction))
    }

    /// Cells joined to a particular cell by an open passage.
    /// Returns None if the index is outside the maze.
    pub fn links(&self, index: usize) -> Option<IndexSmallVec> {
        if !self.dimensions.is_valid_index(index) {
            return None;
        }

        let linked_cells = CompassPrimary::ALL
            .iter()
            .filter(|dir| self.is_neighbour_linked(index, **dir))
            .filter_map(|dir| self.dimensions.neighbour_at_direction(index, *dir))
            .collect();
        Some(linked_cells)
    }

    /// Every open passage once, as `(a, b)` with `a < b`.
    pub fn iter_passages(&self) -> PassagesIter {
        PassagesIter {
            maze: self,
            index: 0,
            south_pending: false,
        }
    }

    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }

    /// The maze's passages as a graph, for analysis with graph algorithms.
    pub fn to_graph(&self) -> PassageGraph {
        let cells_count = self.size();
        let mut g = PassageGraph::with_capacity(cells_count, cells_count.saturating_sub(1));
        for _ in 0..cells_count {
            let _ = g.add_node(());
        }
        for (a, b) in self.iter_passages() {
            let _ = g.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        g
    }
}

impl<'a> IntoIterator for &'a Maze {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks the cells in row major order yielding the east then south passage of each.
#[derive(Clone)]
pub struct PassagesIter<'a> {
    maze: &'a Maze,
    index: usize,
    south_pending: bool,
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.maze.size() {
            let direction = if self.south_pending {
                CompassPrimary::South
            } else {
                CompassPrimary::East
            };
            let index = self.index;

            if self.south_pending {
                self.index += 1;
            }
            self.south_pending = !self.south_pending;

            if self.maze.is_neighbour_linked(index, direction) {
                if let Some(neighbour) = self.maze.dimensions.neighbour_at_direction(index, direction) {
                    return Some((index, neighbour));
                }
            }
        }
        None
    }
}

impl<'a> fmt::Debug for PassagesIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "PassagesIter :: index: {:?}, south_pending: {:?}",
               self.index,
               self.south_pending)
    }
}
