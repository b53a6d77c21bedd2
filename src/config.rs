use crate::environment::DEFAULT_BLOCK_PROBABILITY;
use crate::error::RoutingError;
use crate::grid::FLOORS;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Compare evacuation routes across a building floor", long_about = None)]
pub struct Config {
    /// Seed for map generation and obstacle injection (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_BLOCK_PROBABILITY)]
    pub block_probability: f64,

    #[arg(long, default_value_t = 0)]
    pub floor: usize,

    #[arg(long, default_value = "A Block Entry")]
    pub start: String,

    #[arg(long, default_value = "EXIT-1")]
    pub goal: String,

    /// Comparison passes on the same map; the second pass onward sees the
    /// collapsed route
    #[arg(long, default_value_t = 2)]
    pub runs: usize,

    #[arg(long, default_value_t = false)]
    pub batch_mode: bool,

    #[arg(long, default_value_t = 100)]
    pub num_simulations: usize,

    #[arg(long, default_value = "evacuation_results.csv")]
    pub output_file: String,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    #[arg(long, default_value_t = false)]
    pub show_grid: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), RoutingError> {
        if self.floor >= FLOORS {
            return Err(RoutingError::FloorOutOfRange { floor: self.floor });
        }
        if !(0.0..=1.0).contains(&self.block_probability) {
            return Err(RoutingError::InvalidConfig {
                reason: format!(
                    "--block-probability {} is not in [0, 1]",
                    self.block_probability
                ),
            });
        }
        if self.runs == 0 {
            return Err(RoutingError::InvalidConfig {
                reason: "--runs must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
