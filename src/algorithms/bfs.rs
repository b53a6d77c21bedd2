use crate::algorithms::common::{PathfindingAlgorithm, SearchState};
use crate::grid::{Position, SearchView};

/// Breadth-first search. Fewest moves, ignoring cell weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl PathfindingAlgorithm for BreadthFirst {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn select(&self, state: &mut SearchState, _view: &SearchView<'_>) -> Option<Position> {
        state.frontier.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Endpoints, Floor};
    use crate::labels::LabelOverlay;

    #[test]
    fn open_floor_corner_to_corner() {
        let floor = Floor::open();
        let labels = LabelOverlay::new();
        let view = SearchView::new(&floor, &labels, Endpoints::default());

        let outcome = BreadthFirst.find_path(&view).expect("open floor has a route");
        assert_eq!(outcome.path.len(), 19);
        assert_eq!(view.path_cost(&outcome.path), 19);
        // the goal is the last cell at distance 18
        assert_eq!(outcome.nodes_expanded, 100);
    }

    #[test]
    fn start_equal_to_goal_expands_once() {
        let floor = Floor::open();
        let labels = LabelOverlay::new();
        let here = Position::new(3, 3);
        let view = SearchView::new(&floor, &labels, Endpoints { start: here, goal: here });

        let outcome = BreadthFirst.find_path(&view).expect("trivial route");
        assert_eq!(outcome.path, vec![here]);
        assert_eq!(outcome.nodes_expanded, 1);
    }
}
