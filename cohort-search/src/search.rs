use crate::mutate::mutate;
use anyhow::{anyhow, Result};
use cohort_core::{random_split, score_group, Roster, Split, SplitSettings, SplitStats};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};

/// The best split found across all restarts.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub split: Split,
    pub stats: SplitStats,
    pub score: u32,
    pub improvements: usize,
}

/// Random-restart hill-climbing. Each restart draws a fresh random split and
/// walks it for `steps_per_restart` rounds of score-and-mutate. The best
/// combined score is tracked across all restarts; every strict improvement
/// is handed to `save_best` before the search continues. A failed save is
/// reported and swallowed, the in-memory best stays authoritative and is
/// written again on the next improvement.
///
/// The search always runs the full restarts x steps budget. There is no
/// early exit, a zero score keeps iterating.
pub fn run_search(
    roster: &Roster,
    settings: &SplitSettings,
    seed: [u8; 32],
    save_best: &dyn Fn(&Split, &SplitStats) -> Result<()>,
) -> Result<SearchOutcome> {
    let mut rng = SmallRng::from_seed(StdRng::from_seed(seed).gen());
    let mut best: Option<(Split, SplitStats, u32)> = None;
    let mut improvements = 0;

    for _ in 0..settings.restarts {
        let mut split = random_split(&roster.students, &mut rng);
        for step in 0..settings.steps_per_restart {
            let stats = SplitStats {
                group_a: score_group(&split.group_a),
                group_b: score_group(&split.group_b),
            };
            let combined = stats.combined_score();

            if best.as_ref().map_or(true, |(_, _, score)| combined < *score) {
                improvements += 1;
                println!("found better: {} on iteration: {}", combined, step);
                if let Err(e) = save_best(&split, &stats) {
                    eprintln!("failed to save best split: {}", e);
                }
                best = Some((split.clone(), stats.clone(), combined));
            }

            split = mutate(&split, &stats.group_a, &stats.group_b, &mut rng);
        }
    }

    let (split, stats, score) =
        best.ok_or_else(|| anyhow!("Search budget is zero, no split was evaluated"))?;
    Ok(SearchOutcome {
        split,
        stats,
        score,
        improvements,
    })
}
