use anyhow::{Context, Result};
use clap::Parser;

use evacuation_routing::batch_simulation::BatchSimulation;
use evacuation_routing::config::Config;
use evacuation_routing::environment::MapGenerator;
use evacuation_routing::report::{print_comparison_results, render_floor};
use evacuation_routing::simulation::EvacuationSession;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    config.validate()?;

    if config.batch_mode {
        let mut batch = BatchSimulation::new(config.clone());
        batch
            .run()
            .with_context(|| format!("batch run writing {}", config.output_file))?;
        if !config.quiet {
            batch.print_summary();
        }
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    if !config.quiet {
        println!("Evacuation routing on floor {}", config.floor);
        println!("Map seed: {} (for reproducibility)", seed);
        println!("Route: {} -> {}", config.start, config.goal);
    }

    let generator = MapGenerator::new(config.block_probability)?;
    let mut session = EvacuationSession::generate(generator, Some(seed), config.floor)?;
    session
        .select_route(&config.start, &config.goal)
        .with_context(|| format!("selecting route on floor {}", config.floor))?;

    for run in 1..=config.runs {
        let report = session.run_all_algorithms()?;
        if config.quiet {
            match report.ranking_leader() {
                Some(leader) => println!(
                    "run {}: {} cost={} nodes={}",
                    run, leader.strategy, leader.cost, leader.nodes_expanded
                ),
                None => println!("run {}: blocked", run),
            }
        } else {
            print_comparison_results(run, &report);
        }

        if config.show_grid {
            let floor = session.building().floor(session.current_floor())?;
            println!();
            print!(
                "{}",
                render_floor(floor, session.labels(), report.endpoints, report.highlighted_path())
            );
        }
    }

    Ok(())
}
