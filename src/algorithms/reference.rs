use crate::grid::{Position, SearchView};
use pathfinding::prelude::{bfs, dijkstra};

/// Cheapest achievable route cost under the same neighbor policy, start cell
/// included. Used as the efficiency baseline in reports.
pub fn optimal_cost(view: &SearchView<'_>) -> Option<u32> {
    let goal = view.goal;
    dijkstra(
        &view.start,
        |pos| {
            view.neighbors(*pos)
                .into_iter()
                .map(|next| (next, view.cost(next)))
                .collect::<Vec<_>>()
        },
        |pos| *pos == goal,
    )
    .map(|(_, cost)| cost + view.cost(view.start))
}

/// Route efficiency as `cost / optimal`; 1.0 is optimal.
pub fn route_efficiency(cost: u32, optimal: u32) -> f64 {
    if optimal == 0 {
        0.0
    } else {
        cost as f64 / optimal as f64
    }
}

/// Fewest moves between the endpoints, ignoring cell weights.
pub fn shortest_edge_count(view: &SearchView<'_>) -> Option<usize> {
    let goal = view.goal;
    bfs(&view.start, |pos: &Position| view.neighbors(*pos), |pos| *pos == goal)
        .map(|path| path.len() - 1)
}
