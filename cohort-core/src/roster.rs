use anyhow::{anyhow, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::{io::Read, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub classes: Vec<String>,
}

/// The full student population, in roster order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub students: Vec<Student>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Reads a roster from csv data with one header row and one row per student.
/// Column 0 holds the display name; `class_columns` are the 0-based indices
/// holding class identifiers. Blank and missing cells are skipped. Ids are
/// the 1-based data-row positions.
pub fn parse_roster<R: Read>(reader: R, class_columns: &[usize]) -> Result<Roster> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut students = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| anyhow!("Bad roster row {}: {}", idx + 2, e))?;
        let name = record.get(0).unwrap_or("").to_string();
        let classes = class_columns
            .iter()
            .filter_map(|&col| record.get(col))
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();
        students.push(Student {
            id: (idx + 1) as u32,
            name,
            classes,
        });
    }
    Ok(Roster { students })
}

pub fn load_roster(path: &Path, class_columns: &[usize]) -> Result<Roster> {
    let file = std::fs::File::open(path)
        .map_err(|e| anyhow!("Failed to open roster file {:?}: {}", path, e))?;
    parse_roster(file, class_columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_CSV: &str = "\
Name,Grade,P1,P1 Room,P2,P2 Room
Avery,9,ALG1,101,BIO,202
Blake,10,,-,BIO,202
Casey,9,ALG1,101,,
";

    #[test]
    fn test_parse_roster() {
        let roster = parse_roster(ROSTER_CSV.as_bytes(), &[2, 4]).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.students[0].id, 1);
        assert_eq!(roster.students[0].name, "Avery");
        assert_eq!(roster.students[0].classes, vec!["ALG1", "BIO"]);
        assert_eq!(roster.students[1].classes, vec!["BIO"]);
        assert_eq!(roster.students[2].id, 3);
        assert_eq!(roster.students[2].classes, vec!["ALG1"]);
    }

    #[test]
    fn test_parse_roster_tolerates_short_rows() {
        let csv = "Name,P1\nDrew\n";
        let roster = parse_roster(csv.as_bytes(), &[1, 9]).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students[0].name, "Drew");
        assert!(roster.students[0].classes.is_empty());
    }

    #[test]
    fn test_parse_roster_empty_data() {
        let roster = parse_roster("Name,P1\n".as_bytes(), &[1]).unwrap();
        assert!(roster.is_empty());
    }
}
