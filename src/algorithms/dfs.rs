use crate::algorithms::common::{PathfindingAlgorithm, SearchState};
use crate::grid::{Position, SearchView};

/// Depth-first search. Finds some route, with no optimality guarantee.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl PathfindingAlgorithm for DepthFirst {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn select(&self, state: &mut SearchState, _view: &SearchView<'_>) -> Option<Position> {
        state.frontier.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Endpoints, Floor};
    use crate::labels::LabelOverlay;

    #[test]
    fn dives_along_the_last_discovered_neighbor() {
        let floor = Floor::open();
        let labels = LabelOverlay::new();
        let view = SearchView::new(
            &floor,
            &labels,
            Endpoints {
                start: Position::new(0, 0),
                goal: Position::new(0, 3),
            },
        );

        // from (0,0) the last neighbor pushed is "right", so DFS walks the row
        let outcome = DepthFirst.find_path(&view).expect("open floor has a route");
        assert_eq!(
            outcome.path,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(0, 3),
            ]
        );
        assert_eq!(outcome.nodes_expanded, 4);
    }
}
