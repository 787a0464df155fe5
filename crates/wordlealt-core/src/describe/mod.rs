mod ordinal;

pub use ordinal::{ordinal, ordinal_list};

use crate::models::DecodedRow;

/// Rows with this many perfect (or misplaced) cells get a whole-row summary.
pub const FULL_ROW_CELLS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabel {
    // "Line 3:"
    Long,
    // "3."
    Short,
}

/// Separator between the perfect and misplaced clauses when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    CommaBut,
    NewSentence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MisplacedOnly {
    CorrectBut,
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrasing {
    pub perfect_word: &'static str,
    pub wrong_place: &'static str,
    pub all_misplaced: &'static str,
    pub continuation: Continuation,
    pub misplaced_only: MisplacedOnly,
    pub label: RowLabel,
    pub ampersand: bool,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    AllMisplaced(&'static str),
    Continuation(Continuation),
    MisplacedOnly(MisplacedOnly),
    Ampersand,
    Label(RowLabel),
    WrongPlace(&'static str),
    PerfectWord(&'static str),
}

const VERBOSE: Phrasing = Phrasing {
    perfect_word: "perfect",
    wrong_place: "in the wrong place",
    all_misplaced: "all the correct letters but in the wrong order.",
    continuation: Continuation::CommaBut,
    misplaced_only: MisplacedOnly::CorrectBut,
    label: RowLabel::Long,
    ampersand: false,
};

// Each rule applies from its level upward; later entries override earlier ones.
const RULES: [(u8, Rule); 8] = [
    (1, Rule::AllMisplaced("all in the wrong order.")),
    (2, Rule::Continuation(Continuation::NewSentence)),
    (3, Rule::MisplacedOnly(MisplacedOnly::Bare)),
    (4, Rule::Ampersand),
    (5, Rule::Label(RowLabel::Short)),
    (6, Rule::WrongPlace("wrong")),
    (7, Rule::WrongPlace("no")),
    (8, Rule::PerfectWord("yes")),
];

impl Phrasing {
    #[must_use]
    pub fn at(level: u8) -> Self {
        RULES
            .iter()
            .filter(|(from, _)| level >= *from)
            .fold(VERBOSE, |phrasing, (_, rule)| phrasing.apply(*rule))
    }

    const fn apply(self, rule: Rule) -> Self {
        match rule {
            Rule::AllMisplaced(text) => Self {
                all_misplaced: text,
                ..self
            },
            Rule::Continuation(continuation) => Self {
                continuation,
                ..self
            },
            Rule::MisplacedOnly(misplaced_only) => Self {
                misplaced_only,
                ..self
            },
            Rule::Ampersand => Self {
                ampersand: true,
                ..self
            },
            Rule::Label(label) => Self { label, ..self },
            Rule::WrongPlace(text) => Self {
                wrong_place: text,
                ..self
            },
            Rule::PerfectWord(text) => Self {
                perfect_word: text,
                ..self
            },
        }
    }

    fn explain(&self, row: &DecodedRow) -> String {
        let perfect = ordinal_list(&row.perfect_indexes);
        let misplaced = ordinal_list(&row.misplaced_indexes);
        let wrong_place = self.wrong_place;
        let perfect_word = self.perfect_word;

        match (perfect, misplaced) {
            (None, None) => "Nothing.".to_string(),
            _ if row.perfect_indexes.len() == FULL_ROW_CELLS => "Won!".to_string(),
            _ if row.misplaced_indexes.len() == FULL_ROW_CELLS => self.all_misplaced.to_string(),
            (Some(perfect), Some(misplaced)) => {
                let separator = match self.continuation {
                    Continuation::CommaBut => ", but ",
                    Continuation::NewSentence => ". ",
                };
                format!("{perfect} {perfect_word}{separator}{misplaced} {wrong_place}.")
            }
            (None, Some(misplaced)) => match self.misplaced_only {
                MisplacedOnly::CorrectBut => format!("{misplaced} correct but {wrong_place}."),
                MisplacedOnly::Bare => format!("{misplaced} {wrong_place}."),
            },
            (Some(perfect), None) => format!("{perfect} {perfect_word}."),
        }
    }

    fn row_label(&self, number: usize) -> String {
        match self.label {
            RowLabel::Long => format!("Line {number}:"),
            RowLabel::Short => format!("{number}."),
        }
    }
}

/// Renders one row as `"{label} {explanation}\n"` at the given aggression level.
#[must_use]
pub fn describe_row(row: &DecodedRow, number: usize, level: u8) -> String {
    let phrasing = Phrasing::at(level);
    let line = format!("{} {}\n", phrasing.row_label(number), phrasing.explain(row));
    if phrasing.ampersand {
        line.replace(" and ", " & ")
    } else {
        line
    }
}

#[must_use]
pub fn describe_rows(rows: &[DecodedRow], level: u8) -> Vec<String> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| describe_row(row, index + 1, level))
        .collect()
}
