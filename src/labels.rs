use crate::error::RoutingError;
use crate::grid::Position;
use rustc_hash::FxHashMap;

/// What kind of room a label names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Classroom,
    Restroom,
    Office,
    Library,
    Lift,
    Stairs,
    Exit,
    Entry,
    Corridor,
}

impl RoomKind {
    pub fn classify(name: &str) -> Self {
        if name.starts_with("A-") || name.starts_with("B-") || name.starts_with("C-") {
            RoomKind::Classroom
        } else if name.contains("WC") {
            RoomKind::Restroom
        } else if name.contains("Director") {
            RoomKind::Office
        } else if name.contains("Library") {
            RoomKind::Library
        } else if name.contains("Stairs") {
            RoomKind::Stairs
        } else if name.contains("Lift") {
            RoomKind::Lift
        } else if name.contains("EXIT") {
            RoomKind::Exit
        } else if name.contains("Entry") {
            RoomKind::Entry
        } else {
            RoomKind::Corridor
        }
    }

    /// Rooms that can be a destination but never a through-route.
    pub fn is_restricted(self) -> bool {
        matches!(
            self,
            RoomKind::Classroom | RoomKind::Restroom | RoomKind::Office | RoomKind::Library
        )
    }

    pub fn movement_cost(self) -> u32 {
        match self {
            RoomKind::Stairs => 3,
            RoomKind::Lift => 2,
            _ => 1,
        }
    }
}

/// Two-way mapping between cells and room names for the current floor.
///
/// A name maps to exactly one cell and a cell carries at most one name.
/// Re-labeling a cell or re-using a name evicts the old pairing from both
/// sides.
#[derive(Debug, Clone, Default)]
pub struct LabelOverlay {
    by_cell: FxHashMap<Position, String>,
    by_name: FxHashMap<String, Position>,
    // insertion order, for stable listings
    order: Vec<String>,
}

impl LabelOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: Position, name: impl Into<String>) {
        let name = name.into();
        if let Some(old_name) = self.by_cell.remove(&pos) {
            self.by_name.remove(&old_name);
            self.order.retain(|n| *n != old_name);
        }
        if let Some(old_pos) = self.by_name.remove(&name) {
            self.by_cell.remove(&old_pos);
            self.order.retain(|n| *n != name);
        }
        self.by_cell.insert(pos, name.clone());
        self.by_name.insert(name.clone(), pos);
        self.order.push(name);
    }

    pub fn label_at(&self, pos: Position) -> Option<&str> {
        self.by_cell.get(&pos).map(String::as_str)
    }

    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.by_name.get(name).copied()
    }

    /// Resolves a label, failing when it does not exist on this floor.
    pub fn resolve(&self, name: &str) -> Result<Position, RoutingError> {
        self.position_of(name).ok_or_else(|| RoutingError::UnknownLabel {
            name: name.to_string(),
        })
    }

    pub fn kind_at(&self, pos: Position) -> RoomKind {
        self.label_at(pos)
            .map(RoomKind::classify)
            .unwrap_or(RoomKind::Corridor)
    }

    pub fn is_restricted(&self, pos: Position) -> bool {
        self.kind_at(pos).is_restricted()
    }

    pub fn movement_cost(&self, pos: Position) -> u32 {
        self.kind_at(pos).movement_cost()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &str)> {
        self.order
            .iter()
            .filter_map(|name| self.by_name.get(name).map(|&pos| (pos, name.as_str())))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
