use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Class sizes over the full, unsplit population. `total_students` counts
/// students enrolled in at least one class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassDistribution {
    pub total_classes: usize,
    pub total_students: usize,
    pub class_sizes: BTreeMap<String, usize>,
}

impl ClassDistribution {
    pub fn from_roster(roster: &Roster) -> Self {
        let mut class_sizes: BTreeMap<String, usize> = BTreeMap::new();
        let mut enrolled = HashSet::new();
        for student in &roster.students {
            for class in &student.classes {
                *class_sizes.entry(class.clone()).or_insert(0) += 1;
                enrolled.insert(student.id);
            }
        }
        ClassDistribution {
            total_classes: class_sizes.len(),
            total_students: enrolled.len(),
            class_sizes,
        }
    }
}
