use serde::{Deserialize, Serialize};

use crate::classify::{
    ABSENT_DARK, ABSENT_LIGHT, CORRECT_HIGH_CONTRAST, CORRECT_REGULAR, MISPLACED_HIGH_CONTRAST,
    MISPLACED_REGULAR,
};
use crate::models::{CellOutcome, DecodedRow, HeaderInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankStyle {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlyphTheme {
    pub blank: BlankStyle,
    pub high_contrast: bool,
}

impl GlyphTheme {
    #[must_use]
    pub const fn glyph(self, outcome: CellOutcome) -> char {
        match (outcome, self.high_contrast) {
            (CellOutcome::Absent, _) => match self.blank {
                BlankStyle::Dark => ABSENT_DARK,
                BlankStyle::Light => ABSENT_LIGHT,
            },
            (CellOutcome::Misplaced, true) => MISPLACED_HIGH_CONTRAST,
            (CellOutcome::Misplaced, false) => MISPLACED_REGULAR,
            (CellOutcome::Correct, true) => CORRECT_HIGH_CONTRAST,
            (CellOutcome::Correct, false) => CORRECT_REGULAR,
        }
    }
}

#[must_use]
pub fn render_row(row: &DecodedRow, theme: GlyphTheme) -> String {
    row.cells()
        .into_iter()
        .map(|outcome| theme.glyph(outcome))
        .collect()
}

/// Header title (when present), a blank line, then one glyph row per guess.
#[must_use]
pub fn render_grid(header: &HeaderInfo, rows: &[DecodedRow], theme: GlyphTheme) -> String {
    let grid = rows
        .iter()
        .map(|row| render_row(row, theme))
        .collect::<Vec<_>>()
        .join("\n");
    let title = [header.day.as_str(), header.score.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if title.is_empty() {
        grid
    } else {
        format!("{title}\n\n{grid}")
    }
}
