use crate::error::RoutingError;
use crate::labels::LabelOverlay;
use std::fmt;

/// Side length of every floor.
pub const SIZE: usize = 10;
/// Number of floors in the building.
pub const FLOORS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Fails fast on coordinates outside the floor.
    pub fn checked(row: usize, col: usize) -> Result<Self, RoutingError> {
        if row < SIZE && col < SIZE {
            Ok(Position { row, col })
        } else {
            Err(RoutingError::OutOfBounds { row, col })
        }
    }

    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    pub cells: [[Cell; SIZE]; SIZE],
}

impl Default for Floor {
    fn default() -> Self {
        Floor {
            cells: [[Cell::default(); SIZE]; SIZE],
        }
    }
}

impl Floor {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col].blocked
    }

    pub fn set_blocked(&mut self, pos: Position, blocked: bool) {
        self.cells[pos.row][pos.col].blocked = blocked;
    }

    pub fn blocked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.blocked)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub floors: Vec<Floor>,
}

impl Building {
    pub fn new(floors: Vec<Floor>) -> Self {
        Building { floors }
    }

    /// A building with every cell on every floor unblocked.
    pub fn open() -> Self {
        Building {
            floors: vec![Floor::open(); FLOORS],
        }
    }

    pub fn floor(&self, index: usize) -> Result<&Floor, RoutingError> {
        self.floors
            .get(index)
            .ok_or(RoutingError::FloorOutOfRange { floor: index })
    }

    pub fn floor_mut(&mut self, index: usize) -> Result<&mut Floor, RoutingError> {
        self.floors
            .get_mut(index)
            .ok_or(RoutingError::FloorOutOfRange { floor: index })
    }
}

/// The active endpoints of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub start: Position,
    pub goal: Position,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            start: Position::new(0, 0),
            goal: Position::new(SIZE - 1, SIZE - 1),
        }
    }
}

/// Read-only view of one floor for the duration of a search.
#[derive(Clone, Copy)]
pub struct SearchView<'a> {
    pub floor: &'a Floor,
    pub labels: &'a LabelOverlay,
    pub start: Position,
    pub goal: Position,
}

impl<'a> SearchView<'a> {
    pub fn new(floor: &'a Floor, labels: &'a LabelOverlay, endpoints: Endpoints) -> Self {
        SearchView {
            floor,
            labels,
            start: endpoints.start,
            goal: endpoints.goal,
        }
    }

    pub fn cost(&self, pos: Position) -> u32 {
        self.labels.movement_cost(pos)
    }

    pub fn heuristic(&self, pos: Position) -> usize {
        pos.manhattan(&self.goal)
    }

    /// Traversable neighbors of `pos` in down, up, right, left order.
    ///
    /// Blocked cells are always rejected, even the goal. The active start and
    /// goal bypass the restricted-room check.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (pos.row as i32, pos.col as i32);

        for (dr, dc) in &[(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let nr = row + dr;
            let nc = col + dc;

            if nr < 0 || nr >= SIZE as i32 || nc < 0 || nc >= SIZE as i32 {
                continue;
            }
            let next = Position::new(nr as usize, nc as usize);
            if self.floor.is_blocked(next) {
                continue;
            }
            if next == self.start || next == self.goal {
                neighbors.push(next);
                continue;
            }
            if self.labels.is_restricted(next) {
                continue;
            }
            neighbors.push(next);
        }
        neighbors
    }

    /// Total cost of a path, start and goal included.
    pub fn path_cost(&self, path: &[Position]) -> u32 {
        path.iter().map(|&pos| self.cost(pos)).sum()
    }
}
