//! Error types for map construction and searches

use thiserror::Error;

use crate::{path::SearchStats, Position};

/// The ways a single search invocation can fail.
///
/// None of these are retried internally. Retrying with a different algorithm or a larger
/// iteration budget is up to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier ran empty without reaching the goal.
    #[error("no path exists between start and goal")]
    NoPathFound {
        /// Counters of the failed search
        stats: SearchStats,
    },

    /// The iteration budget ran out before the search resolved. This does not mean that
    /// the goal is unreachable.
    #[error("search gave up after {limit} expansions")]
    SearchExhausted {
        /// The iteration budget that was exceeded
        limit: usize,
        /// Counters at the moment the search gave up
        stats: SearchStats,
    },

    /// The start or goal lies outside the map. Raised before the search begins.
    #[error("position {position} is outside the map")]
    OutOfBounds {
        /// The offending Position
        position: Position,
    },
}

impl SearchError {
    /// The counters of the search, if it got as far as creating nodes.
    ///
    /// `None` for [`OutOfBounds`](SearchError::OutOfBounds), which is raised before the
    /// search begins.
    pub fn stats(&self) -> Option<SearchStats> {
        match self {
            SearchError::NoPathFound { stats } | SearchError::SearchExhausted { stats, .. } => {
                Some(*stats)
            }
            SearchError::OutOfBounds { .. } => None,
        }
    }
}

/// Invalid input to [`GridMapBuilder::build`](crate::grid::GridMapBuilder::build).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map dimensions must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("a {width}x{height} map does not fit into memory")]
    TooLarge { width: usize, height: usize },

    #[error("{what} at {position} is outside the {width}x{height} map")]
    OutOfBounds {
        what: &'static str,
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("map has no start position")]
    MissingStart,

    #[error("map has no goal position")]
    MissingGoal,

    #[error("wall placed on the {what} at {position}")]
    WallOnEndpoint {
        what: &'static str,
        position: Position,
    },
}

/// Failure to read a map from its text format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMapError {
    #[error("line {line}: {reason}")]
    Syntax { line: usize, reason: String },

    #[error("map ended before the {0} line")]
    MissingLine(&'static str),

    #[error(transparent)]
    Map(#[from] MapError),
}

impl ParseMapError {
    pub(crate) fn syntax(line: usize, reason: impl Into<String>) -> ParseMapError {
        ParseMapError::Syntax {
            line,
            reason: reason.into(),
        }
    }
}
