use crate::error::RoutingError;
use crate::grid::{Building, Floor, Position, FLOORS, SIZE};
use crate::labels::LabelOverlay;
use rand::seq::SliceRandom;
use rand::Rng;

/// Chance that a cell starts out blocked.
pub const DEFAULT_BLOCK_PROBABILITY: f64 = 0.28;

const CLASSROOM_BLOCKS: [char; 3] = ['A', 'B', 'C'];
const CLASSROOMS_PER_BLOCK: usize = 4;

/// Rooms present on every floor.
const FACILITIES: [(usize, usize, &str); 10] = [
    (0, 5, "Ladies WC"),
    (1, 5, "Gents WC"),
    (4, 4, "Lift-1"),
    (2, 2, "Lift-2"),
    (7, 7, "Lift-3"),
    (5, 4, "Stairs-1"),
    (1, 8, "Stairs-2"),
    (8, 1, "Stairs-3"),
    (9, 0, "EXIT-1"),
    (0, 9, "EXIT-2"),
];

/// Rooms that only exist on the ground floor.
const GROUND_FLOOR: [(usize, usize, &str); 5] = [
    (5, 8, "Library"),
    (3, 8, "Director"),
    (0, 4, "A Block Entry"),
    (9, 4, "B Block Entry"),
    (4, 9, "C Block Entry"),
];

/// Random building layout: blocked cells on every floor plus the room labels
/// of one floor.
#[derive(Debug, Clone, Copy)]
pub struct MapGenerator {
    block_probability: f64,
}

impl Default for MapGenerator {
    fn default() -> Self {
        MapGenerator {
            block_probability: DEFAULT_BLOCK_PROBABILITY,
        }
    }
}

impl MapGenerator {
    pub fn new(block_probability: f64) -> Result<Self, RoutingError> {
        if !(0.0..=1.0).contains(&block_probability) {
            return Err(RoutingError::InvalidConfig {
                reason: format!("block probability {block_probability} is not in [0, 1]"),
            });
        }
        Ok(MapGenerator { block_probability })
    }

    pub fn block_probability(&self) -> f64 {
        self.block_probability
    }

    /// Generates all floors and labels `current_floor`.
    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
        current_floor: usize,
    ) -> Result<(Building, LabelOverlay), RoutingError> {
        if current_floor >= FLOORS {
            return Err(RoutingError::FloorOutOfRange {
                floor: current_floor,
            });
        }

        let floors = (0..FLOORS).map(|_| self.random_floor(rng)).collect();
        let mut building = Building::new(floors);
        let labels = self.place_labels(rng, current_floor, building.floor_mut(current_floor)?);

        log::info!(
            "generated {} floors; floor {} has {} blocked cells and {} labels",
            FLOORS,
            current_floor,
            building.floor(current_floor)?.blocked_count(),
            labels.len()
        );
        Ok((building, labels))
    }

    fn random_floor<R: Rng>(&self, rng: &mut R) -> Floor {
        let mut floor = Floor::open();
        for row in floor.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.blocked = rng.gen_bool(self.block_probability);
            }
        }
        floor
    }

    /// Places the fixed rooms, then scatters classrooms over unlabeled cells.
    /// Every labeled cell is unblocked.
    pub fn place_labels<R: Rng>(
        &self,
        rng: &mut R,
        floor_index: usize,
        floor: &mut Floor,
    ) -> LabelOverlay {
        let mut labels = LabelOverlay::new();

        let ground: &[(usize, usize, &str)] = if floor_index == 0 { &GROUND_FLOOR } else { &[] };
        for &(row, col, name) in FACILITIES.iter().chain(ground) {
            labels.insert(Position::new(row, col), name);
        }

        let mut room_index = 0;
        for block in CLASSROOM_BLOCKS {
            for _ in 0..CLASSROOMS_PER_BLOCK {
                let free: Vec<Position> = (0..SIZE)
                    .flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
                    .filter(|pos| labels.label_at(*pos).is_none())
                    .collect();
                if let Some(&pos) = free.choose(rng) {
                    labels.insert(pos, format!("{block}-{}{room_index:02}", floor_index + 1));
                }
                room_index += 1;
            }
        }

        for (pos, _) in labels.iter() {
            floor.set_blocked(pos, false);
        }
        labels
    }
}
