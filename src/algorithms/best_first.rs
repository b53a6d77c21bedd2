use crate::algorithms::common::{PathfindingAlgorithm, SearchState};
use crate::grid::{Position, SearchView};

/// Greedy best-first search on Manhattan distance to the goal.
///
/// The whole frontier is stable-sorted in place before every pick, so equal
/// estimates keep their current frontier order and the sorted order carries
/// over to the next iteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyBestFirst;

impl PathfindingAlgorithm for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "BEST"
    }

    fn select(&self, state: &mut SearchState, view: &SearchView<'_>) -> Option<Position> {
        state
            .frontier
            .make_contiguous()
            .sort_by_key(|pos| view.heuristic(*pos));
        state.frontier.pop_front()
    }
}
