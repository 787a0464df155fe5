use tracing::debug;

use crate::config::AltTextConfig;
use crate::describe::describe_rows;
use crate::models::DecodedRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compression {
    pub lines: Vec<String>,
    pub aggression: u8,
    /// Prefix length plus every rendered line, in the configured unit.
    pub length: usize,
    pub fits: bool,
}

/// Re-renders every row at rising aggression until the text fits the budget
/// or `max_aggression` is reached. The last rendering wins either way.
#[must_use]
pub fn compress_rows(
    rows: &[DecodedRow],
    prefix_length: usize,
    config: &AltTextConfig,
) -> Compression {
    let mut aggression = 0u8;
    loop {
        let lines = describe_rows(rows, aggression);
        let length = prefix_length
            + lines
                .iter()
                .map(|line| config.length_unit.measure(line))
                .sum::<usize>();
        let fits = length <= config.max_length;
        debug!(
            aggression,
            length,
            max_length = config.max_length,
            fits,
            "rendered row descriptions"
        );
        if fits || aggression >= config.max_aggression {
            return Compression {
                lines,
                aggression,
                length,
                fits,
            };
        }
        aggression += 1;
    }
}
