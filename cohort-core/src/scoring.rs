use crate::roster::Student;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Section-size bands. A class section at or above a threshold contributes
// the matching penalty to its group's score.
pub const MILD_SIZE: usize = 16;
pub const MODERATE_SIZE: usize = 18;
pub const SEVERE_SIZE: usize = 20;

pub const MILD_PENALTY: u32 = 1;
pub const MODERATE_PENALTY: u32 = 3;
pub const SEVERE_PENALTY: u32 = 7;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupStats {
    pub score: u32,
    pub mild_classes: usize,
    pub moderate_classes: usize,
    pub severe_classes: usize,
    pub max_class_size: usize,
    pub class_sizes: BTreeMap<String, usize>,
    pub student_penalties: BTreeMap<u32, u32>,
}

/// The pair of group statistics persisted alongside a best split.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitStats {
    pub group_a: GroupStats,
    pub group_b: GroupStats,
}

impl SplitStats {
    pub fn combined_score(&self) -> u32 {
        self.group_a.score + self.group_b.score
    }
}

pub fn class_penalty(size: usize) -> u32 {
    if size >= SEVERE_SIZE {
        SEVERE_PENALTY
    } else if size >= MODERATE_SIZE {
        MODERATE_PENALTY
    } else if size >= MILD_SIZE {
        MILD_PENALTY
    } else {
        0
    }
}

/// Scores one group. Pure function of the group's membership; order of
/// students is irrelevant. Every student gets an attribution entry, zero
/// included, so downstream consumers never see an absent id.
pub fn score_group(group: &[Student]) -> GroupStats {
    let mut class_rosters: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    let mut stats = GroupStats::default();

    for student in group {
        stats.student_penalties.insert(student.id, 0);
        for class in &student.classes {
            class_rosters
                .entry(class.as_str())
                .or_default()
                .push(student.id);
        }
    }

    for (class, members) in &class_rosters {
        let size = members.len();
        stats.class_sizes.insert((*class).to_string(), size);
        if size > stats.max_class_size {
            stats.max_class_size = size;
        }

        let penalty = class_penalty(size);
        if penalty == 0 {
            continue;
        }
        stats.score += penalty;
        if size >= SEVERE_SIZE {
            stats.severe_classes += 1;
        } else if size >= MODERATE_SIZE {
            stats.moderate_classes += 1;
        } else {
            stats.mild_classes += 1;
        }
        for id in members {
            *stats.student_penalties.entry(*id).or_insert(0) += penalty;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students_in_class(count: usize, class: &str) -> Vec<Student> {
        (1..=count)
            .map(|id| Student {
                id: id as u32,
                name: format!("student {}", id),
                classes: vec![class.to_string()],
            })
            .collect()
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(class_penalty(15), 0);
        assert_eq!(class_penalty(16), MILD_PENALTY);
        assert_eq!(class_penalty(17), MILD_PENALTY);
        assert_eq!(class_penalty(18), MODERATE_PENALTY);
        assert_eq!(class_penalty(19), MODERATE_PENALTY);
        assert_eq!(class_penalty(20), SEVERE_PENALTY);
        assert_eq!(class_penalty(25), SEVERE_PENALTY);
        assert_eq!(class_penalty(0), 0);
    }

    #[test]
    fn test_score_group_counts_bands() {
        // 16 students share ALG1 and BIO, both mildly oversized.
        let mut group = students_in_class(16, "ALG1");
        for student in group.iter_mut() {
            student.classes.push("BIO".to_string());
        }
        let stats = score_group(&group);
        assert_eq!(stats.score, 2 * MILD_PENALTY);
        assert_eq!(stats.mild_classes, 2);
        assert_eq!(stats.moderate_classes, 0);
        assert_eq!(stats.severe_classes, 0);
        assert_eq!(stats.max_class_size, 16);
        assert_eq!(stats.class_sizes["ALG1"], 16);
    }

    #[test]
    fn test_attribution_sums_over_oversized_classes() {
        let mut group = students_in_class(18, "ALG1");
        for student in group.iter_mut() {
            student.classes.push("BIO".to_string());
        }
        let stats = score_group(&group);
        // Every student sits in two moderately oversized sections.
        for student in &group {
            assert_eq!(stats.student_penalties[&student.id], 2 * MODERATE_PENALTY);
        }
    }

    #[test]
    fn test_attribution_zero_is_explicit() {
        let mut group = students_in_class(3, "ALG1");
        group.push(Student {
            id: 99,
            name: "no classes".to_string(),
            classes: vec![],
        });
        let stats = score_group(&group);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.student_penalties.len(), 4);
        assert_eq!(stats.student_penalties[&99], 0);
        assert_eq!(stats.student_penalties[&1], 0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let group = students_in_class(21, "ALG1");
        let first = score_group(&group);
        let second = score_group(&group);
        assert_eq!(first, second);
        assert_eq!(first.score, SEVERE_PENALTY);
        assert_eq!(first.severe_classes, 1);
        assert_eq!(first.max_class_size, 21);
    }

    #[test]
    fn test_scoring_monotonicity() {
        // Dropping one student from a mildly oversized class removes its
        // penalty entirely.
        let group = students_in_class(16, "ALG1");
        let oversized = score_group(&group);
        let reduced = score_group(&group[..15]);
        assert_eq!(oversized.score, MILD_PENALTY);
        assert_eq!(reduced.score, 0);
        assert!(reduced.score < oversized.score);
    }

    #[test]
    fn test_empty_group() {
        let stats = score_group(&[]);
        assert_eq!(stats, GroupStats::default());
    }
}
