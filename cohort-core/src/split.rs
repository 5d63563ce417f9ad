use crate::roster::{Roster, Student};
use anyhow::{anyhow, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Two cohorts that together partition the roster.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Split {
    pub group_a: Vec<Student>,
    pub group_b: Vec<Student>,
}

impl Split {
    pub fn len(&self) -> usize {
        self.group_a.len() + self.group_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group_a.is_empty() && self.group_b.is_empty()
    }
}

/// Assigns each student to a cohort independently with probability 1/2.
/// Unequal group sizes are expected.
pub fn random_split<R: Rng>(students: &[Student], rng: &mut R) -> Split {
    let mut split = Split::default();
    for student in students {
        if rng.gen_bool(0.5) {
            split.group_a.push(student.clone());
        } else {
            split.group_b.push(student.clone());
        }
    }
    split
}

/// Checks the partition invariant: no student in both cohorts, no student
/// missing, no student that is not on the roster.
pub fn verify_partition(split: &Split, roster: &Roster) -> Result<()> {
    let roster_ids: HashSet<u32> = roster.students.iter().map(|s| s.id).collect();
    let mut seen = HashSet::new();
    for student in split.group_a.iter().chain(&split.group_b) {
        if !seen.insert(student.id) {
            return Err(anyhow!("Student ({}) appears in both cohorts", student.id));
        }
        if !roster_ids.contains(&student.id) {
            return Err(anyhow!("Student ({}) is not on the roster", student.id));
        }
    }
    for id in &roster_ids {
        if !seen.contains(id) {
            return Err(anyhow!("Student ({}) is missing from the split", id));
        }
    }
    Ok(())
}
