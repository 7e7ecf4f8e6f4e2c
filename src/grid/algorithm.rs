use std::{fmt, str::FromStr};

use thiserror::Error;

use super::{
    a_star, bidirectional, breadth_first, depth_first, dijkstra, greedy, GridMap, SearchConfig,
};
use crate::{path::Path, Position, SearchError};

/// The available search strategies, for choosing one at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`depth_first`]
    DepthFirst,
    /// [`breadth_first`]
    BreadthFirst,
    /// [`greedy`]
    GreedyBestFirst,
    /// [`a_star`]
    AStar,
    /// [`dijkstra`]
    UniformCost,
    /// [`bidirectional`]
    BidirectionalBfs,
}

impl Algorithm {
    /// Every Algorithm, in declaration order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
        Algorithm::UniformCost,
        Algorithm::BidirectionalBfs,
    ];

    /// The name accepted by [`from_str`](Algorithm::from_str)
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::GreedyBestFirst => "greedybest",
            Algorithm::AStar => "astar",
            Algorithm::UniformCost => "uniformcost",
            Algorithm::BidirectionalBfs => "bidirectional",
        }
    }

    /// Whether the returned Paths always have the fewest possible moves
    pub fn is_optimal(self) -> bool {
        matches!(
            self,
            Algorithm::BreadthFirst | Algorithm::AStar | Algorithm::UniformCost
        )
    }

    /// Runs this Algorithm with the default [`SearchConfig`].
    pub fn search(
        self,
        map: &GridMap,
        start: Position,
        goal: Position,
    ) -> Result<Path, SearchError> {
        self.search_with(map, start, goal, &SearchConfig::default())
    }

    /// Runs this Algorithm.
    pub fn search_with(
        self,
        map: &GridMap,
        start: Position,
        goal: Position,
        config: &SearchConfig,
    ) -> Result<Path, SearchError> {
        match self {
            Algorithm::DepthFirst => depth_first::search_with(map, start, goal, config),
            Algorithm::BreadthFirst => breadth_first::search_with(map, start, goal, config),
            Algorithm::GreedyBestFirst => greedy::search_with(map, start, goal, config),
            Algorithm::AStar => a_star::search_with(map, start, goal, config),
            Algorithm::UniformCost => dijkstra::search_with(map, start, goal, config),
            Algorithm::BidirectionalBfs => bidirectional::search_with(map, start, goal, config),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an [`Algorithm`] from an unknown name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search algorithm {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive. Accepts [`name`](Algorithm::name) and a few short aliases.
    fn from_str(s: &str) -> Result<Algorithm, UnknownAlgorithm> {
        let algorithm = match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Algorithm::DepthFirst,
            "bfs" => Algorithm::BreadthFirst,
            "greedybest" | "gbfs" => Algorithm::GreedyBestFirst,
            "astar" | "a*" => Algorithm::AStar,
            "uniformcost" | "ucs" => Algorithm::UniformCost,
            "bidirectional" | "bibfs" => Algorithm::BidirectionalBfs,
            _ => return Err(UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}
