use crate::algorithms::Strategy;
use crate::config::Config;
use crate::environment::MapGenerator;
use crate::error::RoutingError;
use crate::simulation::EvacuationSession;
use crate::statistics::ComparisonReport;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::time::Instant;

const CSV_HEADER: &str =
    "simulation_id,run,algorithm,success,path_length,cost,nodes_expanded,elapsed_ms,score,selected_best";

#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub simulation_id: usize,
    pub run: usize,
    pub strategy: Strategy,
    pub success: bool,
    pub path_length: usize,
    pub cost: u32,
    pub nodes_expanded: usize,
    pub elapsed_ms: f64,
    pub score: f64,
    pub selected_best: bool,
}

impl BatchResult {
    /// One row per strategy, failed ones included.
    pub fn from_report(simulation_id: usize, run: usize, report: &ComparisonReport) -> Vec<Self> {
        let best = report.best().map(|b| b.strategy);
        Strategy::ALL
            .iter()
            .map(|&strategy| match report.result_for(strategy) {
                Some(result) => BatchResult {
                    simulation_id,
                    run,
                    strategy,
                    success: true,
                    path_length: result.path_length(),
                    cost: result.cost,
                    nodes_expanded: result.nodes_expanded,
                    elapsed_ms: result.elapsed_ms(),
                    score: result.score,
                    selected_best: best == Some(strategy),
                },
                None => BatchResult {
                    simulation_id,
                    run,
                    strategy,
                    success: false,
                    path_length: 0,
                    cost: 0,
                    nodes_expanded: 0,
                    elapsed_ms: 0.0,
                    score: 0.0,
                    selected_best: false,
                },
            })
            .collect()
    }

    fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{:.6},{:.6},{}",
            self.simulation_id,
            self.run,
            self.strategy.name(),
            self.success,
            self.path_length,
            self.cost,
            self.nodes_expanded,
            self.elapsed_ms,
            self.score,
            self.selected_best
        )
    }
}

/// Per-strategy aggregate over a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategySummary {
    pub attempts: usize,
    pub successes: usize,
    pub total_cost: u64,
    pub total_nodes: u64,
    pub times_selected: usize,
}

impl StrategySummary {
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.successes as f64 / self.attempts as f64 * 100.0
        }
    }

    pub fn average_cost(&self) -> f64 {
        if self.successes == 0 {
            0.0
        } else {
            self.total_cost as f64 / self.successes as f64
        }
    }

    pub fn average_nodes(&self) -> f64 {
        if self.successes == 0 {
            0.0
        } else {
            self.total_nodes as f64 / self.successes as f64
        }
    }
}

/// Runs many seeded maps and streams every result row to CSV.
pub struct BatchSimulation {
    config: Config,
    pending: Vec<BatchResult>,
    summary: HashMap<Strategy, StrategySummary>,
    batch_size: usize,
    total_results_written: usize,
    blocked_passes: usize,
}

impl BatchSimulation {
    pub fn new(config: Config) -> Self {
        BatchSimulation {
            config,
            pending: Vec::new(),
            summary: HashMap::new(),
            batch_size: 100,
            total_results_written: 0,
            blocked_passes: 0,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        let started = Instant::now();
        self.initialize_csv_file()?;

        let base_seed = self.config.seed.unwrap_or_else(rand::random);
        let generator = MapGenerator::new(self.config.block_probability).map_err(invalid_input)?;
        log::info!(
            "batch of {} maps from seed {} -> {}",
            self.config.num_simulations,
            base_seed,
            self.config.output_file
        );

        for simulation_id in 0..self.config.num_simulations {
            let seed = base_seed.wrapping_add(simulation_id as u64);
            let mut session = EvacuationSession::generate(generator, Some(seed), self.config.floor)
                .map_err(invalid_input)?;
            session
                .select_route(&self.config.start, &self.config.goal)
                .map_err(invalid_input)?;

            for run in 1..=self.config.runs {
                let report = session.run_all_algorithms().map_err(invalid_input)?;
                self.record(simulation_id, run, &report);
            }

            if self.pending.len() >= self.batch_size {
                self.flush_results_to_csv()?;
            }
        }
        self.flush_results_to_csv()?;

        if !self.config.quiet {
            println!(
                "Batch finished: {} rows in {:.2?} -> {}",
                self.total_results_written,
                started.elapsed(),
                self.config.output_file
            );
        }
        Ok(())
    }

    pub fn record(&mut self, simulation_id: usize, run: usize, report: &ComparisonReport) {
        if report.is_blocked() {
            self.blocked_passes += 1;
        }
        for row in BatchResult::from_report(simulation_id, run, report) {
            let entry = self.summary.entry(row.strategy).or_default();
            entry.attempts += 1;
            if row.success {
                entry.successes += 1;
                entry.total_cost += row.cost as u64;
                entry.total_nodes += row.nodes_expanded as u64;
            }
            if row.selected_best {
                entry.times_selected += 1;
            }
            self.pending.push(row);
        }
    }

    pub fn summary(&self, strategy: Strategy) -> Option<&StrategySummary> {
        self.summary.get(&strategy)
    }

    pub fn blocked_passes(&self) -> usize {
        self.blocked_passes
    }

    fn flush_results_to_csv(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.output_file)?;
        for row in &self.pending {
            writeln!(file, "{}", row.csv_row())?;
        }

        self.total_results_written += self.pending.len();
        log::debug!(
            "flushed {} rows (total {})",
            self.pending.len(),
            self.total_results_written
        );
        self.pending.clear();
        Ok(())
    }

    fn initialize_csv_file(&self) -> io::Result<()> {
        let mut file = std::fs::File::create(&self.config.output_file)?;
        writeln!(file, "{}", CSV_HEADER)
    }

    pub fn print_summary(&self) {
        if self.summary.is_empty() {
            println!("No results to summarize.");
            return;
        }

        println!("\n=== BATCH SUMMARY ===");
        println!("Blocked passes: {}", self.blocked_passes);
        for strategy in Strategy::ALL {
            let Some(summary) = self.summary.get(&strategy) else {
                continue;
            };
            println!("\n{} results:", strategy);
            println!(
                "  Success rate: {}/{} ({:.1}%)",
                summary.successes,
                summary.attempts,
                summary.success_rate()
            );
            if summary.successes > 0 {
                println!("  Average cost: {:.2}", summary.average_cost());
                println!("  Average nodes expanded: {:.1}", summary.average_nodes());
            }
            println!("  Selected as best: {} time(s)", summary.times_selected);
        }
    }
}

fn invalid_input(err: RoutingError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Endpoints, Position};
    use crate::statistics::{rank, AlgorithmResult, RouteOutcome};
    use clap::Parser;
    use std::time::Duration;

    fn report_with(results: Vec<AlgorithmResult>) -> ComparisonReport {
        let outcome = match results.first() {
            Some(best) => RouteOutcome::Routed {
                best: best.clone(),
                ranking: rank(&results),
                injected: None,
            },
            None => RouteOutcome::Blocked,
        };
        ComparisonReport {
            floor: 0,
            endpoints: Endpoints::default(),
            results,
            outcome,
            optimal_cost: None,
        }
    }

    #[test]
    fn failed_strategies_still_get_a_row() {
        let bfs = AlgorithmResult::new(
            Strategy::Bfs,
            vec![Position::new(0, 0), Position::new(0, 1)],
            2,
            3,
            Duration::ZERO,
        );
        let rows = BatchResult::from_report(7, 1, &report_with(vec![bfs]));

        assert_eq!(rows.len(), 4);
        assert!(rows[0].success && rows[0].selected_best);
        assert_eq!(rows[0].path_length, 2);
        assert!(rows[1..].iter().all(|row| !row.success && !row.selected_best));
        assert!(rows[0].csv_row().starts_with("7,1,BFS,true,2,2,3,"));
    }

    #[test]
    fn summary_accumulates_per_strategy() {
        let config = Config::parse_from(["evacuation_routing"]);
        let mut batch = BatchSimulation::new(config).with_batch_size(10);

        let astar = AlgorithmResult::new(
            Strategy::AStar,
            vec![Position::new(0, 0)],
            4,
            6,
            Duration::ZERO,
        );
        batch.record(0, 1, &report_with(vec![astar.clone()]));
        batch.record(0, 2, &report_with(Vec::new()));
        batch.record(1, 1, &report_with(vec![AlgorithmResult { cost: 8, ..astar }]));

        let summary = batch.summary(Strategy::AStar).expect("recorded");
        assert_eq!(summary.attempts, 3);
        assert_eq!(summary.successes, 2);
        assert_eq!(summary.times_selected, 2);
        assert_eq!(summary.average_cost(), 6.0);
        assert_eq!(batch.summary(Strategy::Dfs).map(|s| s.successes), Some(0));
        assert_eq!(batch.blocked_passes(), 1);
    }
}
