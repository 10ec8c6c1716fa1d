//! Pipeline orchestration, configuration, and safety decisions.
pub mod config;
pub mod pipeline;
pub mod safety;
