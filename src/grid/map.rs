use crate::{
    neighbors::{ManhattanNeighborhood, Neighborhood},
    MapError, Position, SearchError,
};

/// Classification of a single grid cell, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Freely traversable
    #[default]
    Empty,
    /// Impassable
    Wall,
    /// Where the agent begins. Traversable.
    Start,
    /// One of the targets. Traversable.
    Goal,
}

/// An immutable grid of [`Cell`]s with a start and one or more goals.
///
/// Every stored Position lies within `width` x `height`. A GridMap is never modified after
/// [`build`](GridMapBuilder::build), so any number of searches may read it at the same
/// time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    goals: Vec<Position>,
    neighborhood: ManhattanNeighborhood,
}

impl GridMap {
    /// Starts building a map of the given size. All cells begin as [`Cell::Empty`].
    pub fn builder(width: usize, height: usize) -> GridMapBuilder {
        GridMapBuilder {
            width,
            height,
            start: None,
            goals: vec![],
            walls: vec![],
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Where the agent begins
    pub fn start(&self) -> Position {
        self.start
    }

    /// The goals, in the order they were added
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// The Neighborhood used to enumerate moves on this map
    pub fn neighborhood(&self) -> &ManhattanNeighborhood {
        &self.neighborhood
    }

    /// Returns `true` iff `0 <= pos.x < width` and `0 <= pos.y < height`.
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The classification of a cell, or `None` if it is out of bounds.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if self.is_in_bounds(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Returns `true` if the cell is a [`Cell::Wall`].
    ///
    /// ## Panics
    /// If `pos` is out of bounds. Use [`is_traversable`](GridMap::is_traversable) or check
    /// [`is_in_bounds`](GridMap::is_in_bounds) first.
    #[track_caller]
    pub fn is_wall(&self, pos: Position) -> bool {
        assert!(
            self.is_in_bounds(pos),
            "{} is outside the {}x{} map",
            pos,
            self.width,
            self.height
        );
        self.cells[self.index(pos)] == Cell::Wall
    }

    /// Returns `true` if the cell is in bounds and not a wall.
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.is_in_bounds(pos) && !self.is_wall(pos)
    }

    /// The in-bounds orthogonal neighbors of `pos`, in the order Up, Left, Down, Right.
    ///
    /// Walls are **not** filtered out.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let mut target = Vec::with_capacity(4);
        self.get_neighbors(pos, &mut target);
        target.into_iter()
    }

    pub(crate) fn get_neighbors(&self, pos: Position, target: &mut Vec<Position>) {
        self.neighborhood.get_all_neighbors(pos, target);
    }

    /// Manhattan distance, the heuristic used by Greedy Best-First and A*.
    pub fn heuristic(&self, pos: Position, goal: Position) -> usize {
        self.neighborhood.heuristic(pos, goal)
    }

    pub(crate) fn check_bounds(&self, pos: Position) -> Result<(), SearchError> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds { position: pos })
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }
}

/// A rectangle of walls, `w` x `h` cells with its lowest corner at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WallRect {
    x: usize,
    y: usize,
    w: usize,
    h: usize,
}

impl WallRect {
    fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The cell diagonally opposite `(x, y)`. Saturates instead of overflowing, so that it
    /// can be reported even for rectangles that do not fit into `usize`.
    fn far_corner(&self) -> Position {
        Position::new(
            self.x.saturating_add(self.w - 1),
            self.y.saturating_add(self.h - 1),
        )
    }

    /// Whether the rectangle lies within a `width` x `height` grid.
    fn fits(&self, width: usize, height: usize) -> bool {
        matches!(self.x.checked_add(self.w), Some(end) if end <= width)
            && matches!(self.y.checked_add(self.h), Some(end) if end <= height)
    }

    /// Must only be called once [`fits`](WallRect::fits) holds.
    fn contains(&self, pos: Position) -> bool {
        (self.x..self.x + self.w).contains(&pos.x) && (self.y..self.y + self.h).contains(&pos.y)
    }
}

/// Collects the contents of a [`GridMap`] before validating them.
///
/// Nothing is checked until [`build`](GridMapBuilder::build), so the setters never fail.
#[derive(Clone, Debug)]
pub struct GridMapBuilder {
    width: usize,
    height: usize,
    start: Option<Position>,
    goals: Vec<Position>,
    walls: Vec<WallRect>,
}

impl GridMapBuilder {
    /// Sets the start. A later call replaces an earlier one.
    pub fn start(mut self, pos: impl Into<Position>) -> Self {
        self.start = Some(pos.into());
        self
    }

    /// Adds a goal.
    pub fn goal(mut self, pos: impl Into<Position>) -> Self {
        self.goals.push(pos.into());
        self
    }

    /// Marks a single cell as a wall.
    pub fn wall(self, pos: impl Into<Position>) -> Self {
        let pos = pos.into();
        self.wall_rect(pos.x, pos.y, 1, 1)
    }

    /// Marks the `w` x `h` rectangle whose lowest corner is `(x, y)` as walls.
    ///
    /// The whole rectangle has to lie on the map, otherwise [`build`](GridMapBuilder::build)
    /// fails. An empty rectangle is ignored.
    pub fn wall_rect(mut self, x: usize, y: usize, w: usize, h: usize) -> Self {
        self.walls.push(WallRect { x, y, w, h });
        self
    }

    /// Validates the collected data and creates the GridMap.
    pub fn build(self) -> Result<GridMap, MapError> {
        let GridMapBuilder {
            width,
            height,
            start,
            goals,
            walls,
        } = self;

        if width == 0 || height == 0 {
            return Err(MapError::ZeroDimension { width, height });
        }
        let in_bounds = |what: &'static str, position: Position| {
            if position.x < width && position.y < height {
                Ok(())
            } else {
                Err(MapError::OutOfBounds {
                    what,
                    position,
                    width,
                    height,
                })
            }
        };

        let start = start.ok_or(MapError::MissingStart)?;
        in_bounds("start", start)?;
        if goals.is_empty() {
            return Err(MapError::MissingGoal);
        }
        for &goal in &goals {
            in_bounds("goal", goal)?;
        }

        for rect in walls.iter().filter(|rect| !rect.is_empty()) {
            if !rect.fits(width, height) {
                return Err(MapError::OutOfBounds {
                    what: "wall",
                    position: rect.far_corner(),
                    width,
                    height,
                });
            }
            if rect.contains(start) {
                return Err(MapError::WallOnEndpoint {
                    what: "start",
                    position: start,
                });
            }
            if let Some(&goal) = goals.iter().find(|&&goal| rect.contains(goal)) {
                return Err(MapError::WallOnEndpoint {
                    what: "goal",
                    position: goal,
                });
            }
        }

        let too_large = MapError::TooLarge { width, height };
        let len = width.checked_mul(height).ok_or_else(|| too_large.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, Cell::Empty);

        for rect in walls.iter().filter(|rect| !rect.is_empty()) {
            for y in rect.y..rect.y + rect.h {
                let row = y * width;
                cells[row + rect.x..row + rect.x + rect.w].fill(Cell::Wall);
            }
        }
        for &goal in &goals {
            cells[goal.y * width + goal.x] = Cell::Goal;
        }
        cells[start.y * width + start.x] = Cell::Start;

        Ok(GridMap {
            width,
            height,
            cells,
            start,
            goals,
            neighborhood: ManhattanNeighborhood::new(width, height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GridMap {
        GridMap::builder(4, 3)
            .start((0, 0))
            .goal((3, 2))
            .goal((3, 0))
            .wall((1, 1))
            .build()
            .unwrap()
    }

    #[test]
    fn classification() {
        let map = sample();
        assert_eq!(map.cell(Position::new(0, 0)), Some(Cell::Start));
        assert_eq!(map.cell(Position::new(3, 2)), Some(Cell::Goal));
        assert_eq!(map.cell(Position::new(3, 0)), Some(Cell::Goal));
        assert_eq!(map.cell(Position::new(1, 1)), Some(Cell::Wall));
        assert_eq!(map.cell(Position::new(2, 1)), Some(Cell::Empty));
        assert_eq!(map.cell(Position::new(4, 0)), None);
        assert_eq!(map.goals(), [Position::new(3, 2), Position::new(3, 0)]);
    }

    #[test]
    fn traversable() {
        let map = sample();
        assert!(map.is_traversable(Position::new(0, 0)));
        assert!(!map.is_traversable(Position::new(1, 1)));
        assert!(!map.is_traversable(Position::new(0, 3)));
        assert!(map.is_wall(Position::new(1, 1)));
        assert!(!map.is_wall(Position::new(2, 2)));
    }

    #[test]
    #[should_panic]
    fn is_wall_out_of_bounds() {
        sample().is_wall(Position::new(7, 0));
    }

    #[test]
    fn neighbors_keep_walls() {
        let map = sample();
        let neighbors: Vec<_> = map.neighbors(Position::new(1, 0)).collect();
        assert_eq!(
            neighbors,
            [Position::new(1, 1), Position::new(0, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn wall_rect() {
        let map = GridMap::builder(5, 5)
            .start((0, 0))
            .goal((4, 4))
            .wall_rect(1, 2, 3, 2)
            .build()
            .unwrap();
        let walls = (0..5)
            .flat_map(|y| (0..5).map(move |x| Position::new(x, y)))
            .filter(|&p| map.is_wall(p))
            .count();
        assert_eq!(walls, 6);
        assert!(map.is_wall(Position::new(3, 3)));
        assert!(!map.is_wall(Position::new(4, 3)));
    }

    #[test]
    fn empty_wall_rects_are_ignored() {
        let map = GridMap::builder(3, 3)
            .start((0, 0))
            .goal((2, 2))
            .wall_rect(1, 1, 0, 2)
            .wall_rect(usize::MAX, 7, 3, 0)
            .build()
            .unwrap();
        assert!(!map.is_wall(Position::new(1, 1)));
    }

    #[test]
    fn wall_rect_past_the_edge() {
        let builder = GridMap::builder(4, 4).start((0, 0)).goal((3, 3));
        assert_eq!(
            builder.clone().wall_rect(2, 1, 3, 1).build(),
            Err(MapError::OutOfBounds {
                what: "wall",
                position: Position::new(4, 1),
                width: 4,
                height: 4
            })
        );
        assert_eq!(
            builder.wall_rect(1, usize::MAX - 1, 1, usize::MAX).build(),
            Err(MapError::OutOfBounds {
                what: "wall",
                position: Position::new(1, usize::MAX),
                width: 4,
                height: 4
            })
        );
    }

    #[test]
    fn invalid_maps() {
        assert_eq!(
            GridMap::builder(0, 3).start((0, 0)).goal((0, 0)).build(),
            Err(MapError::ZeroDimension {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            GridMap::builder(3, 3).goal((1, 1)).build(),
            Err(MapError::MissingStart)
        );
        assert_eq!(
            GridMap::builder(3, 3).start((1, 1)).build(),
            Err(MapError::MissingGoal)
        );
        assert!(matches!(
            GridMap::builder(3, 3).start((1, 1)).goal((3, 1)).build(),
            Err(MapError::OutOfBounds { what: "goal", .. })
        ));
        assert!(matches!(
            GridMap::builder(3, 3)
                .start((1, 1))
                .goal((2, 2))
                .wall_rect(2, 0, 2, 1)
                .build(),
            Err(MapError::OutOfBounds { what: "wall", .. })
        ));
        assert!(matches!(
            GridMap::builder(3, 3)
                .start((1, 1))
                .goal((2, 2))
                .wall((2, 2))
                .build(),
            Err(MapError::WallOnEndpoint { what: "goal", .. })
        ));
    }
}
