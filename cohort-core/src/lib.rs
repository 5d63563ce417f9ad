//! Domain model and scoring for two-cohort roster splits.

pub mod distribution;
pub mod roster;
pub mod scoring;
pub mod settings;
pub mod split;

pub use distribution::ClassDistribution;
pub use roster::{load_roster, parse_roster, Roster, Student};
pub use scoring::{
    class_penalty, score_group, GroupStats, SplitStats, MILD_PENALTY, MILD_SIZE, MODERATE_PENALTY,
    MODERATE_SIZE, SEVERE_PENALTY, SEVERE_SIZE,
};
pub use settings::SplitSettings;
pub use split::{random_split, verify_partition, Split};
