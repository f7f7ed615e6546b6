//! **mazes** is a maze generation library.
//!
//! A `Maze` is a rectangular grid of cells carved into a perfect maze (a spanning tree) by a
//! randomized depth first search. The start is always the top left cell; the end is placed on
//! a dead end along the right or bottom edge when one can be found.
//!
//! ```
//! use mazes::{Maze, units::{Height, Width}};
//!
//! let maze = Maze::from_seed(Width(10), Height(10), 42).unwrap();
//! assert!(maze.start().is_start());
//! println!("{}", maze);
//! ```

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod maze;
pub mod units;

pub use crate::cells::{Cell, CompassPrimary, Walls};
pub use crate::generators::{GenerationOptions, GenerationOptionsBuilder, MAX_GENERATION_ATTEMPTS};
pub use crate::maze::{new_maze, Maze};
