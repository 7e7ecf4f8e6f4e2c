#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Algorithm, GridMap, SearchConfig};
use crate::{path::Path, Position, SearchError};

/// Visits all goals of `map` in order: start to the first goal, first goal to the second, etc.
///
/// Each leg is an independent search, so one failing leg does not affect the others. The
/// results are in leg order. With the `parallel` feature the legs run on the `rayon`
/// thread pool.
///
/// ## Examples
/// ```
/// use grid_navigation::prelude::*;
///
/// let map = GridMap::builder(5, 1)
///     .start((2, 0))
///     .goal((4, 0))
///     .goal((0, 0))
///     .build()
///     .unwrap();
///
/// let legs = grid::tour(&map, Algorithm::BreadthFirst, &SearchConfig::default());
/// assert_eq!(legs.len(), 2);
/// assert_eq!(legs[0].as_ref().unwrap().edge_count(), 2);
/// assert_eq!(legs[1].as_ref().unwrap().edge_count(), 4);
/// ```
pub fn tour(
    map: &GridMap,
    algorithm: Algorithm,
    config: &SearchConfig,
) -> Vec<Result<Path, SearchError>> {
    let stops: Vec<Position> = std::iter::once(map.start())
        .chain(map.goals().iter().copied())
        .collect();
    let legs: Vec<(Position, Position)> = stops.windows(2).map(|w| (w[0], w[1])).collect();

    search_debug!("tour: {} legs with {}", legs.len(), algorithm);

    #[cfg(feature = "parallel")]
    let iter = legs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = legs.iter();

    iter.map(|&(from, to)| algorithm.search_with(map, from, to, config))
        .collect()
}
