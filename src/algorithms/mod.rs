pub mod a_star;
pub mod best_first;
pub mod bfs;
pub mod common;
pub mod dfs;
pub mod reference;

use crate::algorithms::a_star::AStar;
use crate::algorithms::best_first::GreedyBestFirst;
use crate::algorithms::bfs::BreadthFirst;
use crate::algorithms::common::{PathfindingAlgorithm, SearchOutcome};
use crate::algorithms::dfs::DepthFirst;
use crate::grid::SearchView;
use std::fmt;

/// The four interchangeable traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    Bfs,
    Dfs,
    BestFirst,
    AStar,
}

impl Strategy {
    /// Execution order of a comparison pass.
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::BestFirst,
        Strategy::AStar,
    ];

    pub fn algorithm(self) -> Box<dyn PathfindingAlgorithm> {
        match self {
            Strategy::Bfs => Box::new(BreadthFirst),
            Strategy::Dfs => Box::new(DepthFirst),
            Strategy::BestFirst => Box::new(GreedyBestFirst),
            Strategy::AStar => Box::new(AStar::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::BestFirst => "BEST",
            Strategy::AStar => "ASTAR",
        }
    }

    pub fn find_path(self, view: &SearchView<'_>) -> Option<SearchOutcome> {
        self.algorithm().find_path(view)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_agree_with_the_boxed_algorithms() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name(), strategy.algorithm().name());
        }
        assert_eq!(Strategy::BestFirst.to_string(), "BEST");
    }
}
