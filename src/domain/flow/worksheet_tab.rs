//! Tabs of the pros/cons worksheet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Create (title and options), Matrix (pros/cons), Vote (ranking).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorksheetTab {
    #[default]
    Create,
    Matrix,
    Vote,
}

impl WorksheetTab {
    pub fn all() -> &'static [WorksheetTab] {
        &[WorksheetTab::Create, WorksheetTab::Matrix, WorksheetTab::Vote]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorksheetTab::Create => "Create",
            WorksheetTab::Matrix => "Matrix",
            WorksheetTab::Vote => "Vote",
        }
    }
}

impl fmt::Display for WorksheetTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
