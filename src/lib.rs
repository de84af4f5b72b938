pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generators;
pub mod maze;
pub mod solvers;
pub mod step;
