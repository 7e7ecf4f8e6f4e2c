//! A crate to find routes for an agent on an orthogonal 2D grid, using one of several
//! interchangeable search strategies.
//!
//! ## Introduction
//! The agent moves one cell at a time in one of four directions (Up, Left, Down, Right).
//! Cells are either traversable or walls. Given a [`GridMap`](grid::GridMap), a start and
//! a goal, every strategy either returns a [`Path`](path::Path) or one of the
//! [`SearchError`] outcomes.
//!
//! | Algorithm | Frontier | Optimal |
//! |---|---|---|
//! | [Depth-First](grid::depth_first) | stack | no |
//! | [Breadth-First](grid::breadth_first) | queue | yes (edge count) |
//! | [Greedy Best-First](grid::greedy) | min-heap on `h` | no |
//! | [A*](grid::a_star) | min-heap on `f`, then `h` | yes |
//! | [Uniform-Cost](grid::dijkstra) | min-heap on `g` | yes |
//! | [Bidirectional-BFS](grid::bidirectional) | two queues | see module docs |
//!
//! All strategies expand neighbors in the same fixed order, so repeated calls with the
//! same input always produce the same path.
//!
//! ## Examples
//! Creating a map and searching it:
//! ```
//! use grid_navigation::prelude::*;
//!
//! // 3x3 grid with a wall in the middle
//! let map = GridMap::builder(3, 3)
//!     .start((0, 0))
//!     .goal((2, 2))
//!     .wall((1, 1))
//!     .build()
//!     .unwrap();
//!
//! let path = grid::a_star::search(&map, map.start(), map.goals()[0]).unwrap();
//! assert_eq!(path.len(), 5);
//! assert_eq!(path.start(), Position::new(0, 0));
//! assert_eq!(path.end(), Position::new(2, 2));
//!
//! // the same search by name
//! let algorithm: Algorithm = "bfs".parse().unwrap();
//! let other = algorithm.search(&map, map.start(), map.goals()[0]).unwrap();
//! assert_eq!(other.edge_count(), path.edge_count());
//! ```
//!
//! Maps can also be read from the plain text format:
//! ```
//! use grid_navigation::prelude::*;
//!
//! let map: GridMap = "[3,5]\n(0,1)\n(4,1) | (2,0)\n(2,1,1,2)\n".parse().unwrap();
//! assert_eq!(map.width(), 5);
//! assert_eq!(map.height(), 3);
//! assert!(map.is_wall(Position::new(2, 2)));
//! ```
//!
//! ## Cargo Features
//! #### parallel
//! Enabled by default.
//!
//! Runs the legs of a [`tour`](grid::tour) on multiple threads using `rayon`.
//!
//! #### log
//! Disabled by default.
//!
//! Emits `debug` records when a search starts and terminates and `trace` records per
//! expanded node, through the `log` crate.

use std::fmt;

#[cfg(feature = "log")]
macro_rules! search_debug {
    ($($arg: tt)*) => {
        log::debug!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! search_debug {
    // does nothing without log feature
    ($($arg: tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! search_trace {
    ($($arg: tt)*) => {
        log::trace!($($arg)*)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! search_trace {
    ($($arg: tt)*) => {};
}

mod error;
pub use error::{MapError, ParseMapError, SearchError};

pub mod graph;
pub mod grid;
pub mod neighbors;
pub mod path;

/// A cell coordinate on the grid. `x` grows to the right, `y` grows upwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Position {
    /// Creates a new Position.
    pub const fn new(x: usize, y: usize) -> Position {
        Position { x, y }
    }

    /// The Manhattan distance `|dx| + |dy|` between two Positions.
    pub fn manhattan_distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Moves the Position by `(dx, dy)`. Returns `None` if a coordinate would become negative.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Position {
        Position { x, y }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> (usize, usize) {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

type PointMap<V> = hashbrown::HashMap<Position, V>;
type PointSet = hashbrown::HashSet<Position>;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        graph::{NodeId, SearchNode},
        grid::{self, Algorithm, Cell, GridMap, GridMapBuilder, SearchConfig},
        neighbors::{ManhattanNeighborhood, Neighborhood},
        path::{Direction, Path, SearchStats},
        MapError, ParseMapError, Position, SearchError,
    };
}
