use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellOutcome {
    Absent,
    Misplaced,
    Correct,
}

/// One game line decoded into 1-based visual positions.
///
/// Absent cells never appear in either list but still count toward `width`,
/// so the two lists are disjoint subsets of `1..=width`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedRow {
    pub misplaced_indexes: Vec<usize>,
    pub perfect_indexes: Vec<usize>,
    pub width: usize,
}

impl DecodedRow {
    #[must_use]
    pub fn has_perfect(&self) -> bool {
        !self.perfect_indexes.is_empty()
    }

    #[must_use]
    pub fn has_misplaced(&self) -> bool {
        !self.misplaced_indexes.is_empty()
    }

    /// Outcome at a 1-based visual position; positions past `width` read as absent.
    #[must_use]
    pub fn outcome_at(&self, index: usize) -> CellOutcome {
        if self.perfect_indexes.binary_search(&index).is_ok() {
            CellOutcome::Correct
        } else if self.misplaced_indexes.binary_search(&index).is_ok() {
            CellOutcome::Misplaced
        } else {
            CellOutcome::Absent
        }
    }

    #[must_use]
    pub fn cells(&self) -> Vec<CellOutcome> {
        (1..=self.width).map(|index| self.outcome_at(index)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderInfo {
    pub day: String,
    pub score: String,
}

impl HeaderInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.score.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Game,
    Narrative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub index: usize,
    pub kind: LineKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<DecodedRow>,
}

/// Data handed to a presentation layer: alt text plus grid rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltTextReport {
    pub description: String,
    pub rows: Vec<DecodedRow>,
    pub header: HeaderInfo,
    pub aggression: u8,
    pub length: usize,
    pub max_length: usize,
    pub fits: bool,
}

impl AltTextReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
