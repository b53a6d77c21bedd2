use crate::algorithms::common::{PathfindingAlgorithm, SearchState};
use crate::grid::{Position, SearchView};

/// A* ordered by `g + h`, where `g` is the weighted cost recorded when a cell
/// was first discovered and `h` the Manhattan distance to the goal.
///
/// Uses the same in-place stable sort as greedy best-first so that ties fall
/// back to frontier order.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "ASTAR"
    }

    fn select(&self, state: &mut SearchState, view: &SearchView<'_>) -> Option<Position> {
        let g_scores = &state.g_scores;
        state.frontier.make_contiguous().sort_by_key(|pos| {
            let g = g_scores.get(pos).copied().unwrap_or(u32::MAX) as u64;
            g + view.heuristic(*pos) as u64
        });
        state.frontier.pop_front()
    }
}
