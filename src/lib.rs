pub mod args;
pub mod config;
pub mod core;
pub mod errors;
pub mod report;
pub mod runner;
pub mod simulation;
pub mod stats;
