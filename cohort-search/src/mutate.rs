use cohort_core::{GroupStats, Split};
use rand::Rng;

/// Upper bound of the first draw in the stay/move decision.
pub const FLIP_DRAW_CEILING: u32 = 70;

/// Produces a new candidate split by probabilistically reassigning students.
/// A student with attribution 0 never moves. Otherwise the student stays
/// when a draw in [0, FLIP_DRAW_CEILING) strictly exceeds a draw in
/// [0, attribution), so the move probability grows with the attribution.
/// The two-draw comparison is load-bearing for convergence behavior; do not
/// collapse it into a single probability.
pub fn mutate<R: Rng>(
    split: &Split,
    stats_a: &GroupStats,
    stats_b: &GroupStats,
    rng: &mut R,
) -> Split {
    let mut next = Split::default();
    for student in &split.group_a {
        let attribution = attribution_of(stats_a, student.id);
        if stays(attribution, rng) {
            next.group_a.push(student.clone());
        } else {
            next.group_b.push(student.clone());
        }
    }
    for student in &split.group_b {
        let attribution = attribution_of(stats_b, student.id);
        if stays(attribution, rng) {
            next.group_b.push(student.clone());
        } else {
            next.group_a.push(student.clone());
        }
    }
    next
}

fn attribution_of(stats: &GroupStats, student_id: u32) -> u32 {
    stats
        .student_penalties
        .get(&student_id)
        .copied()
        .unwrap_or(0)
}

fn stays<R: Rng>(attribution: u32, rng: &mut R) -> bool {
    attribution == 0 || rng.gen_range(0..FLIP_DRAW_CEILING) > rng.gen_range(0..attribution)
}
