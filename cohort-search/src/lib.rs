//! Random-restart hill-climbing over two-cohort splits.

pub mod mutate;
pub mod search;

pub use mutate::{mutate, FLIP_DRAW_CEILING};
pub use search::{run_search, SearchOutcome};
