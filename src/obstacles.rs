use crate::grid::{Floor, Position};
use rand::Rng;

const MIN_BLOCKS: usize = 3;
const EXTRA_BLOCKS: usize = 3;

/// Collapses part of the first winning route of a map, once.
///
/// Re-armed only by map regeneration.
#[derive(Debug, Clone, Default)]
pub struct DynamicObstacleInjector {
    fired: bool,
}

impl DynamicObstacleInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Blocks 3 to 5 cells drawn from `path` with replacement and returns the
    /// draws in order (duplicates included). Returns `None` when already fired
    /// or when `path` is empty.
    pub fn inject<R: Rng>(
        &mut self,
        floor: &mut Floor,
        path: &[Position],
        rng: &mut R,
    ) -> Option<Vec<Position>> {
        if self.fired || path.is_empty() {
            return None;
        }
        self.fired = true;

        let count = MIN_BLOCKS + rng.gen_range(0..EXTRA_BLOCKS);
        let blocked: Vec<Position> = (0..count)
            .map(|_| path[rng.gen_range(0..path.len())])
            .collect();
        for &pos in &blocked {
            floor.set_blocked(pos, true);
        }

        log::info!(
            "route collapsed: blocked {} cell(s) along the winning path: {:?}",
            blocked.len(),
            blocked
        );
        Some(blocked)
    }
}
