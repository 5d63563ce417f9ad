use serde::{Deserialize, Serialize};

/// Run settings, deserializable from a json string or file. Every field has
/// a default so a partial document is acceptable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SplitSettings {
    #[serde(default = "default_class_columns")]
    pub class_columns: Vec<usize>,
    #[serde(default = "default_restarts")]
    pub restarts: usize,
    #[serde(default = "default_steps_per_restart")]
    pub steps_per_restart: usize,
}

fn default_class_columns() -> Vec<usize> {
    vec![6, 8, 10, 12, 14, 16]
}

fn default_restarts() -> usize {
    2000
}

fn default_steps_per_restart() -> usize {
    500
}

impl Default for SplitSettings {
    fn default() -> Self {
        SplitSettings {
            class_columns: default_class_columns(),
            restarts: default_restarts(),
            steps_per_restart: default_steps_per_restart(),
        }
    }
}
