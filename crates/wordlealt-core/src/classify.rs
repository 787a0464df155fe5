use crate::models::{CellOutcome, ClassifiedLine, DecodedRow, LineKind};

// Blank squares, dark and light mode.
pub const ABSENT_DARK: char = '\u{2B1B}';
pub const ABSENT_LIGHT: char = '\u{2B1C}';
// Misplaced, high contrast then regular contrast.
pub const MISPLACED_HIGH_CONTRAST: char = '\u{1F7E6}';
pub const MISPLACED_REGULAR: char = '\u{1F7E8}';
// Correct, high contrast then regular contrast.
pub const CORRECT_HIGH_CONTRAST: char = '\u{1F7E7}';
pub const CORRECT_REGULAR: char = '\u{1F7E9}';

#[must_use]
pub const fn glyph_outcome(ch: char) -> Option<CellOutcome> {
    match ch {
        ABSENT_DARK | ABSENT_LIGHT => Some(CellOutcome::Absent),
        MISPLACED_HIGH_CONTRAST | MISPLACED_REGULAR => Some(CellOutcome::Misplaced),
        CORRECT_HIGH_CONTRAST | CORRECT_REGULAR => Some(CellOutcome::Correct),
        _ => None,
    }
}

/// Decodes a whole line of result glyphs. A single foreign character rejects the line.
#[must_use]
pub fn decode_line(line: &str) -> Option<DecodedRow> {
    let mut row = DecodedRow::default();
    for ch in line.chars() {
        row.width += 1;
        match glyph_outcome(ch)? {
            CellOutcome::Absent => {}
            CellOutcome::Misplaced => row.misplaced_indexes.push(row.width),
            CellOutcome::Correct => row.perfect_indexes.push(row.width),
        }
    }
    Some(row)
}

/// Like [`decode_line`], but an empty line is never a game row.
#[must_use]
pub fn decode_game_line(line: &str) -> Option<DecodedRow> {
    if line.is_empty() {
        return None;
    }
    decode_line(line)
}

#[must_use]
pub fn is_game_line(line: &str) -> bool {
    decode_game_line(line).is_some()
}

/// Splits a transcript into lines, tolerating CRLF endings.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[must_use]
pub fn classify_transcript(input: &str) -> Vec<ClassifiedLine> {
    split_lines(input)
        .enumerate()
        .map(|(index, line)| {
            let row = decode_game_line(line);
            ClassifiedLine {
                index,
                kind: if row.is_some() {
                    LineKind::Game
                } else {
                    LineKind::Narrative
                },
                text: line.to_string(),
                row,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_collects_one_based_visual_indexes() {
        let row = decode_line("🟨⬛⬜🟩🟦").expect("game line");
        assert_eq!(row.misplaced_indexes, vec![1, 5]);
        assert_eq!(row.perfect_indexes, vec![4]);
        assert_eq!(row.width, 5);
    }

    #[test]
    fn decode_accepts_high_contrast_and_regular_variants() {
        let regular = decode_line("🟩🟨⬛⬛⬛").expect("regular");
        let high_contrast = decode_line("🟧🟦⬜⬜⬜").expect("high contrast");
        assert_eq!(regular, high_contrast);
    }

    #[test]
    fn decode_rejects_any_foreign_character() {
        assert_eq!(decode_line("🟩🟩 🟩🟩🟩"), None);
        assert_eq!(decode_line("🟩🟩🟩🟩🟥"), None);
        assert_eq!(decode_line("Wordle 900 3/6*"), None);
        assert_eq!(decode_line("🟩🟩🟩🟩🟩\r"), None);
    }

    #[test]
    fn decode_of_empty_line_is_an_empty_row_but_not_a_game_line() {
        assert_eq!(decode_line(""), Some(DecodedRow::default()));
        assert!(!is_game_line(""));
    }

    #[test]
    fn all_absent_row_is_still_a_game_line() {
        let row = decode_line("⬛⬛⬛⬛⬛").expect("game line");
        assert!(!row.has_perfect());
        assert!(!row.has_misplaced());
        assert_eq!(row.width, 5);
        assert!(is_game_line("⬛⬛⬛⬛⬛"));
    }

    #[test]
    fn index_lists_stay_disjoint_for_every_five_cell_row() {
        let glyphs = [ABSENT_DARK, MISPLACED_REGULAR, CORRECT_REGULAR];
        for code in 0..3usize.pow(5) {
            let mut rest = code;
            let line = (0..5)
                .map(|_| {
                    let ch = glyphs[rest % 3];
                    rest /= 3;
                    ch
                })
                .collect::<String>();
            let row = decode_line(&line).expect("game line");
            for index in 1..=5 {
                let in_perfect = row.perfect_indexes.contains(&index);
                let in_misplaced = row.misplaced_indexes.contains(&index);
                assert!(!(in_perfect && in_misplaced), "{line} index {index}");
            }
            assert!(row.perfect_indexes.iter().all(|i| (1..=5).contains(i)));
            assert!(row.misplaced_indexes.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn classify_marks_crlf_rows_as_game_lines() {
        let lines = classify_transcript("Wordle 900 3/6*\r\n\r\n🟩🟩🟩🟩🟩\r\n");
        let kinds = lines.iter().map(|line| line.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                LineKind::Narrative,
                LineKind::Narrative,
                LineKind::Game,
                LineKind::Narrative,
            ]
        );
        assert_eq!(lines[0].text, "Wordle 900 3/6*");
        assert_eq!(lines[2].row.as_ref().map(|row| row.width), Some(5));
    }
}
