// Public fallible APIs in this crate share one concrete error contract (`WordleAltError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod classify;
pub mod compress;
pub mod config;
pub mod describe;
pub mod error;
pub mod grid;
pub mod header;
pub mod models;
pub mod text;
pub mod transcript;

pub use classify::{classify_transcript, decode_game_line, decode_line, is_game_line};
pub use compress::{Compression, compress_rows};
pub use config::AltTextConfig;
pub use describe::{describe_row, describe_rows};
pub use error::{Result, WordleAltError};
pub use grid::{BlankStyle, GlyphTheme, render_grid, render_row};
pub use header::extract_header;
pub use models::{AltTextReport, CellOutcome, ClassifiedLine, DecodedRow, HeaderInfo, LineKind};
pub use text::LengthUnit;
pub use transcript::{Partition, build_alt_text, partition_transcript};
