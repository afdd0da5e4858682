//! Journey-level metrics, reported next to the per-request metrics of the engine

pub mod collector;
pub mod reporter;
pub mod types;
