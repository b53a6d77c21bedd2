use crate::grid::{Position, SearchView};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Path found by one search, with the number of positions it expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Vec<Position>,
    pub nodes_expanded: usize,
}

/// Per-run bookkeeping. Created fresh for every search and dropped after it.
#[derive(Debug)]
pub struct SearchState {
    pub frontier: VecDeque<Position>,
    pub visited: FxHashSet<Position>,
    pub parents: FxHashMap<Position, Position>,
    pub g_scores: FxHashMap<Position, u32>,
}

impl SearchState {
    fn new(start: Position) -> Self {
        let mut state = SearchState {
            frontier: VecDeque::new(),
            visited: FxHashSet::default(),
            parents: FxHashMap::default(),
            g_scores: FxHashMap::default(),
        };
        state.frontier.push_back(start);
        state.visited.insert(start);
        state.g_scores.insert(start, 0);
        state
    }

    pub fn g_score(&self, pos: &Position) -> u32 {
        self.g_scores.get(pos).copied().unwrap_or(u32::MAX)
    }
}

pub trait PathfindingAlgorithm {
    /// Display name, e.g. `"ASTAR"`.
    fn name(&self) -> &'static str;

    /// Removes the next position to expand from the frontier.
    fn select(&self, state: &mut SearchState, view: &SearchView<'_>) -> Option<Position>;

    /// Searches from `view.start` to `view.goal`. `None` means the frontier
    /// ran dry without reaching the goal.
    fn find_path(&self, view: &SearchView<'_>) -> Option<SearchOutcome> {
        traverse(self, view)
    }
}

/// Shared search loop: the strategy only decides which frontier entry is
/// expanded next.
pub fn traverse<A: PathfindingAlgorithm + ?Sized>(
    algorithm: &A,
    view: &SearchView<'_>,
) -> Option<SearchOutcome> {
    let mut state = SearchState::new(view.start);
    let mut nodes_expanded = 0;

    while let Some(current) = algorithm.select(&mut state, view) {
        nodes_expanded += 1;

        if current == view.goal {
            log::debug!(
                "{} reached {} after expanding {} nodes",
                algorithm.name(),
                view.goal,
                nodes_expanded
            );
            return Some(SearchOutcome {
                path: reconstruct_path(&state.parents, view.goal),
                nodes_expanded,
            });
        }

        let current_g = state.g_score(&current);
        for neighbor in view.neighbors(current) {
            if state.visited.insert(neighbor) {
                state.parents.insert(neighbor, current);
                state
                    .g_scores
                    .insert(neighbor, current_g.saturating_add(view.cost(neighbor)));
                state.frontier.push_back(neighbor);
            }
        }
    }

    log::debug!(
        "{} exhausted its frontier after {} nodes; no route to {}",
        algorithm.name(),
        nodes_expanded,
        view.goal
    );
    None
}

/// Walks parent pointers back from `goal` and returns the path start-first.
pub fn reconstruct_path(parents: &FxHashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_walks_back_to_the_root() {
        let mut parents = FxHashMap::default();
        parents.insert(Position::new(0, 1), Position::new(0, 0));
        parents.insert(Position::new(1, 1), Position::new(0, 1));
        parents.insert(Position::new(1, 2), Position::new(1, 1));
        // unrelated branch
        parents.insert(Position::new(1, 0), Position::new(0, 0));

        assert_eq!(
            reconstruct_path(&parents, Position::new(1, 2)),
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn reconstruct_of_start_is_a_single_cell() {
        let parents = FxHashMap::default();
        assert_eq!(
            reconstruct_path(&parents, Position::new(4, 4)),
            vec![Position::new(4, 4)]
        );
    }
}
