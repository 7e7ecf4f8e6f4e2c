//! The most common Neighborhoods

use crate::{path::Direction, Position};

/// Defines how a search proceeds from one cell to the next.
///
/// A Neighborhood only knows the size of the grid. Whether a neighbor can actually be
/// entered (walls etc.) is decided by the search that asks for it.
pub trait Neighborhood: Clone + std::fmt::Debug {
    /// Provides a list of Neighbors of a Point
    ///
    /// Note that it is not necessary to check the terrain, only the bounds of the grid.
    /// The order in which neighbors are pushed is the tie-break order of every search.
    fn get_all_neighbors(&self, point: Position, target: &mut Vec<Position>);

    /// Gives a lower bound on the number of steps between two Points.
    fn heuristic(&self, point: Position, goal: Position) -> usize;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Neighbors are produced in the order Up, Left, Down, Right. Out-of-bounds
/// candidates are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }

    fn contains(&self, point: Position) -> bool {
        point.x < self.width && point.y < self.height
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Position, target: &mut Vec<Position>) {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            if let Some(other) = point.offset(dx, dy) {
                if self.contains(other) {
                    target.push(other);
                }
            }
        }
    }

    fn heuristic(&self, point: Position, goal: Position) -> usize {
        point.manhattan_distance(goal)
    }
}
