use crate::algorithms::reference::optimal_cost;
use crate::algorithms::Strategy;
use crate::environment::MapGenerator;
use crate::error::RoutingError;
use crate::grid::{Building, Endpoints, Position, SearchView};
use crate::labels::LabelOverlay;
use crate::obstacles::DynamicObstacleInjector;
use crate::statistics::{rank, select_best, AlgorithmResult, ComparisonReport, RouteOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// All mutable simulation state for one building.
///
/// Created at map generation, read by every search, and mutated only by
/// regeneration, floor switches and the obstacle injector.
pub struct EvacuationSession {
    generator: MapGenerator,
    rng: StdRng,
    building: Building,
    labels: LabelOverlay,
    current_floor: usize,
    endpoints: Endpoints,
    selected_labels: Option<(String, String)>,
    last_path: Vec<Position>,
    injector: DynamicObstacleInjector,
}

impl EvacuationSession {
    /// Generates a fresh building. `seed` makes the map and every later
    /// obstacle injection reproducible.
    pub fn generate(
        generator: MapGenerator,
        seed: Option<u64>,
        current_floor: usize,
    ) -> Result<Self, RoutingError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (building, labels) = generator.generate(&mut rng, current_floor)?;
        Ok(Self::assemble(generator, rng, building, labels, current_floor))
    }

    /// Wraps a caller-supplied building and overlay.
    pub fn from_parts(
        building: Building,
        labels: LabelOverlay,
        current_floor: usize,
        rng: StdRng,
    ) -> Result<Self, RoutingError> {
        building.floor(current_floor)?;
        Ok(Self::assemble(
            MapGenerator::default(),
            rng,
            building,
            labels,
            current_floor,
        ))
    }

    fn assemble(
        generator: MapGenerator,
        rng: StdRng,
        building: Building,
        labels: LabelOverlay,
        current_floor: usize,
    ) -> Self {
        EvacuationSession {
            generator,
            rng,
            building,
            labels,
            current_floor,
            endpoints: Endpoints::default(),
            selected_labels: None,
            last_path: Vec::new(),
            injector: DynamicObstacleInjector::new(),
        }
    }

    /// Replaces the map, re-arms the injector and re-resolves the selected
    /// room labels on the new layout.
    pub fn regenerate(&mut self) -> Result<(), RoutingError> {
        let (building, labels) = self.generator.generate(&mut self.rng, self.current_floor)?;
        self.building = building;
        self.labels = labels;
        self.injector = DynamicObstacleInjector::new();
        self.last_path.clear();

        if let Some((start, goal)) = self.selected_labels.take() {
            self.select_route(&start, &goal)?;
        }
        Ok(())
    }

    /// Makes another floor current and labels it. The selection is reset to
    /// the default corners since room names differ between floors.
    pub fn switch_floor(&mut self, floor: usize) -> Result<(), RoutingError> {
        let labels = {
            let target = self.building.floor_mut(floor)?;
            self.generator.place_labels(&mut self.rng, floor, target)
        };
        self.current_floor = floor;
        self.labels = labels;
        self.endpoints = Endpoints::default();
        self.selected_labels = None;
        self.last_path.clear();
        Ok(())
    }

    /// Resolves both room names on the current floor.
    pub fn select_route(&mut self, start: &str, goal: &str) -> Result<Endpoints, RoutingError> {
        let endpoints = Endpoints {
            start: self.labels.resolve(start)?,
            goal: self.labels.resolve(goal)?,
        };
        self.endpoints = endpoints;
        self.selected_labels = Some((start.to_string(), goal.to_string()));
        Ok(endpoints)
    }

    pub fn set_endpoints(&mut self, start: Position, goal: Position) -> Result<(), RoutingError> {
        self.endpoints = Endpoints {
            start: Position::checked(start.row, start.col)?,
            goal: Position::checked(goal.row, goal.col)?,
        };
        self.selected_labels = None;
        Ok(())
    }

    /// Runs BFS, DFS, greedy best-first and A* in that order on the current
    /// floor, picks the composite-score best, ranks the results, and on the
    /// first routed pass since generation collapses part of the best path.
    pub fn run_all_algorithms(&mut self) -> Result<ComparisonReport, RoutingError> {
        let endpoints = self.endpoints;
        Position::checked(endpoints.start.row, endpoints.start.col)?;
        Position::checked(endpoints.goal.row, endpoints.goal.col)?;

        let mut results = Vec::with_capacity(Strategy::ALL.len());
        let optimal = {
            let floor = self.building.floor(self.current_floor)?;
            let view = SearchView::new(floor, &self.labels, endpoints);

            for strategy in Strategy::ALL {
                let algorithm = strategy.algorithm();
                let started = Instant::now();
                let outcome = algorithm.find_path(&view);
                let elapsed = started.elapsed();

                if let Some(outcome) = outcome {
                    let cost = view.path_cost(&outcome.path);
                    results.push(AlgorithmResult::new(
                        strategy,
                        outcome.path,
                        cost,
                        outcome.nodes_expanded,
                        elapsed,
                    ));
                }
            }
            optimal_cost(&view)
        };

        let Some(best) = select_best(&results).cloned() else {
            log::warn!(
                "no route from {} to {} on floor {}",
                endpoints.start,
                endpoints.goal,
                self.current_floor
            );
            self.last_path.clear();
            return Ok(ComparisonReport {
                floor: self.current_floor,
                endpoints,
                results,
                outcome: RouteOutcome::Blocked,
                optimal_cost: optimal,
            });
        };

        self.last_path = best.path.clone();
        let injected = if self.injector.has_fired() {
            None
        } else {
            let floor = self.building.floor_mut(self.current_floor)?;
            self.injector.inject(floor, &self.last_path, &mut self.rng)
        };
        let ranking = rank(&results);

        Ok(ComparisonReport {
            floor: self.current_floor,
            endpoints,
            results,
            outcome: RouteOutcome::Routed {
                best,
                ranking,
                injected,
            },
            optimal_cost: optimal,
        })
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn labels(&self) -> &LabelOverlay {
        &self.labels
    }

    pub fn current_floor(&self) -> usize {
        self.current_floor
    }

    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    /// Best path of the most recent routed pass; empty after a blocked one.
    pub fn last_path(&self) -> &[Position] {
        &self.last_path
    }

    pub fn obstacles_injected(&self) -> bool {
        self.injector.has_fired()
    }
}
