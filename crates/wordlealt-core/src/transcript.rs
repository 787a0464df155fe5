use tracing::debug;

use crate::classify::{decode_game_line, split_lines};
use crate::compress::compress_rows;
use crate::config::AltTextConfig;
use crate::header::extract_header;
use crate::models::{AltTextReport, DecodedRow};

/// Lines of a transcript split into pass-through narrative text and decoded game rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    /// Every non-game line followed by `\n`, in transcript order.
    pub narrative: String,
    pub rows: Vec<DecodedRow>,
}

#[must_use]
pub fn partition_transcript(input: &str) -> Partition {
    let mut partition = Partition::default();
    for line in split_lines(input) {
        match decode_game_line(line) {
            Some(row) => partition.rows.push(row),
            None => {
                partition.narrative.push_str(line);
                partition.narrative.push('\n');
            }
        }
    }
    partition
}

/// Full pipeline: raw transcript in, alt text and grid rows out. Total over its input.
#[must_use]
pub fn build_alt_text(input: &str, config: &AltTextConfig) -> AltTextReport {
    let header = extract_header(split_lines(input).next().unwrap_or_default());
    let Partition { narrative, rows } = partition_transcript(input);
    debug!(
        game_rows = rows.len(),
        narrative_len = narrative.len(),
        "partitioned transcript"
    );

    let prefix_length = config.length_unit.measure(&narrative);
    let compression = compress_rows(&rows, prefix_length, config);

    let mut description = narrative;
    for line in &compression.lines {
        description.push_str(line);
    }

    AltTextReport {
        description: trim_description(&description).to_string(),
        rows,
        header,
        aggression: compression.aggression,
        length: compression.length,
        max_length: config.max_length,
        fits: compression.fits,
    }
}

// Byte-order marks from pasted or file-read transcripts count as padding.
fn trim_description(description: &str) -> &str {
    description.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{FEFF}')
}
