use anyhow::{anyhow, Result};
use clap::{arg, Command};
use cohort_core::{
    load_roster, score_group, verify_partition, ClassDistribution, Split, SplitSettings,
    SplitStats,
};
use cohort_search::run_search;
use cohort_utils::{dejsonify, jsonify, read_json_file};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

mod output;
use output::OutputPaths;

fn cli() -> Command {
    Command::new("cohort-runner")
        .about("Splits a student roster into two cohorts with bounded class sections")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("split")
                .about("Runs the cohort search and persists the best split found")
                .arg(
                    arg!(<ROSTER> "Path to the roster csv file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_DIR] "Directory for the result documents")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed for the search rng")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a saved split against a roster and prints its statistics")
                .arg(
                    arg!(<ROSTER> "Path to the roster csv file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<SPLIT> "Split json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("split", sub_m)) => split_roster(
            sub_m.get_one::<PathBuf>("ROSTER").unwrap().clone(),
            sub_m.get_one::<String>("settings").cloned(),
            sub_m.get_one::<PathBuf>("output").unwrap().clone(),
            sub_m.get_one::<u64>("seed").cloned(),
        ),
        Some(("verify", sub_m)) => verify_split(
            sub_m.get_one::<PathBuf>("ROSTER").unwrap().clone(),
            sub_m.get_one::<String>("SPLIT").unwrap().clone(),
            sub_m.get_one::<String>("settings").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn split_roster(
    roster_path: PathBuf,
    settings: Option<String>,
    output_dir: PathBuf,
    seed: Option<u64>,
) -> Result<()> {
    let settings = load_settings(settings.as_deref());
    let roster = load_roster(&roster_path, &settings.class_columns)?;
    println!("loaded {} students from {:?}", roster.len(), roster_path);

    let paths = OutputPaths::new(&output_dir);
    let distribution = ClassDistribution::from_roster(&roster);
    println!(
        "class distribution: {} classes, {} enrolled students",
        distribution.total_classes, distribution.total_students
    );
    if let Err(e) = output::write_distribution(&paths, &distribution) {
        eprintln!("failed to write class distribution: {}", e);
    }

    let seed = seed.unwrap_or_else(|| StdRng::seed_from_u64(time()).gen());
    println!("seed: {}", seed);

    let outcome = run_search(&roster, &settings, seed_bytes(seed), &|split, stats| {
        output::write_best(&paths, split, stats)
    })?;

    println!(
        "best combined score: {} after {} improvements",
        outcome.score, outcome.improvements
    );
    println!(
        "group a: {} students, group b: {} students",
        outcome.split.group_a.len(),
        outcome.split.group_b.len()
    );
    println!("best split written to: {:?}", paths.best_split);
    Ok(())
}

pub fn verify_split(
    roster_path: PathBuf,
    split_arg: String,
    settings: Option<String>,
) -> Result<()> {
    let settings = load_settings(settings.as_deref());
    let roster = load_roster(&roster_path, &settings.class_columns)?;
    let split = load_split(&split_arg)?;

    verify_partition(&split, &roster)?;
    println!("Split is valid");

    let stats = SplitStats {
        group_a: score_group(&split.group_a),
        group_b: score_group(&split.group_b),
    };
    println!("combined score: {}", stats.combined_score());
    println!("{}", jsonify(&stats));
    Ok(())
}

fn load_settings(settings: Option<&str>) -> SplitSettings {
    let settings = match settings {
        Some(settings) => settings,
        None => return SplitSettings::default(),
    };
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings).unwrap_or_else(|_| {
            eprintln!("Failed to read settings file: {}", settings);
            std::process::exit(1);
        })
    } else {
        settings.to_string()
    };

    dejsonify::<SplitSettings>(&settings).unwrap_or_else(|_| {
        eprintln!("Failed to parse settings");
        std::process::exit(1);
    })
}

fn load_split(split: &str) -> Result<Split> {
    if split == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read split from stdin: {}", e))?;
        dejsonify(&buffer).map_err(|e| anyhow!("Failed to parse split: {}", e))
    } else if split.ends_with(".json") {
        read_json_file(Path::new(split))
    } else {
        dejsonify(split).map_err(|e| anyhow!("Failed to parse split: {}", e))
    }
}

fn time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_millis() as u64
}

fn seed_bytes(seed: u64) -> [u8; 32] {
    StdRng::seed_from_u64(seed).gen()
}
