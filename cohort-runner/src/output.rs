use anyhow::{anyhow, Result};
use cohort_core::{ClassDistribution, Split, SplitStats};
use cohort_utils::write_json_file;
use std::path::{Path, PathBuf};

pub struct OutputPaths {
    pub best_split: PathBuf,
    pub best_split_stats: PathBuf,
    pub class_distribution: PathBuf,
    pub class_distribution_report: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path) -> Self {
        OutputPaths {
            best_split: dir.join("best_split.json"),
            best_split_stats: dir.join("best_split_stats.json"),
            class_distribution: dir.join("class_distribution.json"),
            class_distribution_report: dir.join("class_distribution.csv"),
        }
    }
}

/// Overwrites the best split and its statistics. Called on every
/// improvement so a crash never loses more than the current iteration.
pub fn write_best(paths: &OutputPaths, split: &Split, stats: &SplitStats) -> Result<()> {
    write_json_file(&paths.best_split, split)?;
    write_json_file(&paths.best_split_stats, stats)?;
    Ok(())
}

/// Writes the startup class distribution, once as json and once as a
/// `class,size` csv report.
pub fn write_distribution(paths: &OutputPaths, distribution: &ClassDistribution) -> Result<()> {
    write_json_file(&paths.class_distribution, distribution)?;

    let mut writer = csv::Writer::from_path(&paths.class_distribution_report).map_err(|e| {
        anyhow!(
            "Failed to create {:?}: {}",
            paths.class_distribution_report,
            e
        )
    })?;
    writer.write_record(["class", "size"])?;
    for (class, size) in &distribution.class_sizes {
        let size = size.to_string();
        writer.write_record([class.as_str(), size.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
