//! The plain text map format.
//!
//! ```text
//! [rows,cols]
//! (x,y)
//! (x,y) | (x,y)
//! (x,y,w,h)
//! (x,y,w,h)
//! ```
//!
//! The first line holds the size (height first), the second the start, the third one or
//! more goals separated by `|`. Each following line is a rectangle of walls. Whitespace is
//! ignored and blank lines are skipped.

use std::str::FromStr;

use super::GridMap;
use crate::{ParseMapError, Position};

impl FromStr for GridMap {
    type Err = ParseMapError;

    fn from_str(text: &str) -> Result<GridMap, ParseMapError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
                (i + 1, compact)
            })
            .filter(|(_, line)| !line.is_empty());

        let (line_no, line) = lines.next().ok_or(ParseMapError::MissingLine("size"))?;
        let [height, width] = numbers::<2>(&line, '[', ']', line_no)?;

        let (line_no, line) = lines.next().ok_or(ParseMapError::MissingLine("start"))?;
        let [x, y] = numbers::<2>(&line, '(', ')', line_no)?;
        let mut builder = GridMap::builder(width, height).start(Position::new(x, y));

        let (line_no, line) = lines.next().ok_or(ParseMapError::MissingLine("goal"))?;
        for goal in line.split('|') {
            let [x, y] = numbers::<2>(goal, '(', ')', line_no)?;
            builder = builder.goal(Position::new(x, y));
        }

        for (line_no, line) in lines {
            let [x, y, w, h] = numbers::<4>(&line, '(', ')', line_no)?;
            builder = builder.wall_rect(x, y, w, h);
        }

        Ok(builder.build()?)
    }
}

/// Parses `N` comma separated numbers enclosed in `open` and `close`.
fn numbers<const N: usize>(
    text: &str,
    open: char,
    close: char,
    line: usize,
) -> Result<[usize; N], ParseMapError> {
    let inner = text
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .ok_or_else(|| {
            ParseMapError::syntax(line, format!("expected {open}...{close}, found {text:?}"))
        })?;

    let mut ret = [0; N];
    let mut parts = inner.split(',');
    for slot in ret.iter_mut() {
        let part = parts.next().ok_or_else(|| {
            ParseMapError::syntax(line, format!("expected {} numbers in {:?}", N, text))
        })?;
        *slot = part.parse().map_err(|_| {
            ParseMapError::syntax(line, format!("{part:?} is not a non-negative integer"))
        })?;
    }
    if parts.next().is_some() {
        return Err(ParseMapError::syntax(
            line,
            format!("expected {} numbers in {:?}", N, text),
        ));
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Cell, MapError};

    const SAMPLE: &str = "\
[5,11]
(0,1)
(7,0) | (10,3)
(2,0,2,2)
(8,0,1,2)

(10,0,1,1)
(2,3,1,2)
(3,4,3,1)
(9,3,1,1)
(8,4,2,1)
";

    #[test]
    fn sample_map() {
        let map: GridMap = SAMPLE.parse().unwrap();
        assert_eq!(map.width(), 11);
        assert_eq!(map.height(), 5);
        assert_eq!(map.start(), Position::new(0, 1));
        assert_eq!(map.goals(), [Position::new(7, 0), Position::new(10, 3)]);

        assert_eq!(map.cell(Position::new(2, 0)), Some(Cell::Wall));
        assert_eq!(map.cell(Position::new(3, 1)), Some(Cell::Wall));
        assert_eq!(map.cell(Position::new(4, 1)), Some(Cell::Empty));
        assert_eq!(map.cell(Position::new(5, 4)), Some(Cell::Wall));
        assert_eq!(map.cell(Position::new(10, 3)), Some(Cell::Goal));
    }

    #[test]
    fn whitespace_is_ignored() {
        let map: GridMap = " [ 2 , 3 ]\n( 0, 0 )\n (2,1)\n".parse().unwrap();
        assert_eq!((map.width(), map.height()), (3, 2));
        assert_eq!(map.goals(), [Position::new(2, 1)]);
    }

    #[test]
    fn errors() {
        assert_eq!(
            "".parse::<GridMap>(),
            Err(ParseMapError::MissingLine("size"))
        );
        assert_eq!(
            "[3,3]\n(0,0)\n".parse::<GridMap>(),
            Err(ParseMapError::MissingLine("goal"))
        );
        assert!(matches!(
            "[3,3]\n(0,0\n(1,1)".parse::<GridMap>(),
            Err(ParseMapError::Syntax { line: 2, .. })
        ));
        assert!(matches!(
            "[3,3]\n(0,0)\n(1,1)\n\n(1,-1,1,1)".parse::<GridMap>(),
            Err(ParseMapError::Syntax { line: 5, .. })
        ));
        assert!(matches!(
            "[3,3]\n(0,0,1)\n(1,1)".parse::<GridMap>(),
            Err(ParseMapError::Syntax { line: 2, .. })
        ));
        assert_eq!(
            "[3,3]\n(0,0)\n(1,1)\n(0,0,1,1)".parse::<GridMap>(),
            Err(ParseMapError::Map(MapError::WallOnEndpoint {
                what: "start",
                position: Position::new(0, 0)
            }))
        );
    }

    #[test]
    fn oversized_walls() {
        let overflowing = format!("[3,3]\n(0,0)\n(1,1)\n({},0,2,1)", usize::MAX);
        assert_eq!(
            overflowing.parse::<GridMap>(),
            Err(ParseMapError::Map(MapError::OutOfBounds {
                what: "wall",
                position: Position::new(usize::MAX, 0),
                width: 3,
                height: 3
            }))
        );

        // rejected without visiting its cells
        assert_eq!(
            "[3,3]\n(0,0)\n(1,1)\n(0,0,100000,100000)".parse::<GridMap>(),
            Err(ParseMapError::Map(MapError::OutOfBounds {
                what: "wall",
                position: Position::new(99_999, 99_999),
                width: 3,
                height: 3
            }))
        );
    }

    #[test]
    fn oversized_map() {
        let overflowing = format!("[{},2]\n(0,0)\n(1,1)", usize::MAX);
        assert_eq!(
            overflowing.parse::<GridMap>(),
            Err(ParseMapError::Map(MapError::TooLarge {
                width: 2,
                height: usize::MAX
            }))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unallocatable_map() {
        // fits into a usize, but not into any address space
        let unallocatable = format!("[{},{}]\n(0,0)\n(1,1)", 1_usize << 40, 1_usize << 20);
        assert!(matches!(
            unallocatable.parse::<GridMap>(),
            Err(ParseMapError::Map(MapError::TooLarge { .. }))
        ));
    }
}
