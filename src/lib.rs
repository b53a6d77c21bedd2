//! Evacuation route comparison on a multi-floor building grid.
//!
//! An [`simulation::EvacuationSession`] owns the building, its room labels and
//! the one-shot obstacle injector. Each call to
//! [`simulation::EvacuationSession::run_all_algorithms`] runs BFS, DFS, greedy
//! best-first and A* between the selected rooms and returns a
//! [`statistics::ComparisonReport`].

pub mod algorithms;
pub mod batch_simulation;
pub mod config;
pub mod environment;
pub mod error;
pub mod grid;
pub mod labels;
pub mod obstacles;
pub mod report;
pub mod simulation;
pub mod statistics;
