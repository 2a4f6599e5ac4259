//! Row types for the E-Saku table views.
//!
//! These mirror the JSON the data-fetching layer returns. Each one declares
//! the fields its table's search box looks at.

use crate::filter::Searchable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A student as listed in the students-by-class table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student identification number (NIS).
    pub nis: String,
    /// Full name.
    pub name: String,
    /// Class, e.g. "XI RPL 2".
    #[serde(rename = "class")]
    pub class_name: String,
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.nis.as_str(),
            self.class_name.as_str(),
        ]
    }
}

/// Whether a history entry is a violation or an accomplishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A recorded violation; `points` count against the student.
    Violation,
    /// A recorded accomplishment; `points` count for the student.
    Accomplishment,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Violation => f.write_str("violation"),
            EntryKind::Accomplishment => f.write_str("accomplishment"),
        }
    }
}

/// One row of the violation or accomplishment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Name of the student the entry is about.
    pub student_name: String,
    /// The student's NIS.
    pub nis: String,
    /// The student's class.
    #[serde(rename = "class")]
    pub class_name: String,
    /// Violation or accomplishment.
    pub kind: EntryKind,
    /// Violation type or accomplishment category.
    pub category: String,
    /// Points attached to the entry.
    pub points: u32,
    /// Date as sent by the backend (`YYYY-MM-DD`).
    pub date: String,
}

impl Searchable for HistoryEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.student_name.as_str(),
            self.nis.as_str(),
            self.class_name.as_str(),
            self.category.as_str(),
        ]
    }
}

/// An extracurricular activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extracurricular {
    /// Activity name.
    pub name: String,
    /// Trainer or coach.
    pub trainer: String,
    /// Free-form schedule, e.g. "Sabtu 08:00".
    #[serde(default)]
    pub schedule: String,
}

impl Searchable for Extracurricular {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.trainer.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Matcher;

    fn entry(name: &str, kind: EntryKind, category: &str) -> HistoryEntry {
        HistoryEntry {
            student_name: name.to_string(),
            nis: "12345".to_string(),
            class_name: "X TKJ 1".to_string(),
            kind,
            category: category.to_string(),
            points: 10,
            date: "2024-08-01".to_string(),
        }
    }

    #[test]
    fn test_history_searches_violation_type() {
        let rows = vec![
            entry("Ayu", EntryKind::Violation, "Terlambat"),
            entry("Budi", EntryKind::Accomplishment, "Juara lomba"),
        ];
        let m = Matcher::substring();
        assert_eq!(m.filter_indices(&rows, "terlambat"), vec![0]);
        assert_eq!(m.filter_indices(&rows, "tkj"), vec![0, 1]);
    }

    #[test]
    fn test_extracurricular_ignores_schedule() {
        let rows = vec![Extracurricular {
            name: "Pramuka".to_string(),
            trainer: "Pak Darto".to_string(),
            schedule: "Sabtu".to_string(),
        }];
        let m = Matcher::substring();
        assert_eq!(m.filter_indices(&rows, "darto"), vec![0]);
        assert!(m.filter_indices(&rows, "sabtu").is_empty());
    }

    #[test]
    fn test_student_deserializes_class_field() {
        let json = r#"[{ "nis": "2201", "name": "Citra", "class": "XII RPL 1" }]"#;
        let students: Vec<Student> = serde_json::from_str(json).unwrap();
        assert_eq!(students[0].class_name, "XII RPL 1");
        assert_eq!(
            Matcher::substring().filter_indices(&students, "2201"),
            vec![0]
        );
    }

    #[test]
    fn test_history_entry_kind_serde() {
        let json = r#"{
            "student_name": "Ayu", "nis": "1", "class": "X",
            "kind": "accomplishment", "category": "Olimpiade",
            "points": 25, "date": "2024-09-12"
        }"#;
        let e: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.kind, EntryKind::Accomplishment);
        assert_eq!(e.kind.to_string(), "accomplishment");
    }
}
