use std::fmt;

use crate::Position;

/// One of the four moves an agent can make.
///
/// The declaration order is the tie-break order of every search: when two candidates are
/// otherwise equal, Up is tried before Left, before Down, before Right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, +1)`
    Up,
    /// `(-1, 0)`
    Left,
    /// `(0, -1)`
    Down,
    /// `(+1, 0)`
    Right,
}

impl Direction {
    /// All Directions in tie-break order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// The `(dx, dy)` displacement of this move
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, -1),
            Direction::Right => (1, 0),
        }
    }

    /// The Direction that leads from `from` to the adjacent `to`.
    ///
    /// Returns `None` if the two Positions are not exactly one step apart.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| {
                let (dx, dy) = dir.offset();
                from.offset(dx, dy) == Some(to)
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between() {
        let center = Position::new(3, 3);
        assert_eq!(Direction::between(center, Position::new(3, 4)), Some(Direction::Up));
        assert_eq!(Direction::between(center, Position::new(2, 3)), Some(Direction::Left));
        assert_eq!(Direction::between(center, Position::new(3, 2)), Some(Direction::Down));
        assert_eq!(Direction::between(center, Position::new(4, 3)), Some(Direction::Right));

        assert_eq!(Direction::between(center, center), None);
        assert_eq!(Direction::between(center, Position::new(4, 4)), None);
        assert_eq!(Direction::between(center, Position::new(3, 5)), None);
    }

    #[test]
    fn display() {
        let names: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["up", "left", "down", "right"]);
    }
}
