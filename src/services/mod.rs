// SPDX-License-Identifier: MIT

//! Services module - the completion and progress computation layer.

pub mod completion;
pub mod date_input;
pub mod progress;
pub mod seasons;

pub use completion::resolve;
pub use date_input::{parse_date_input, DateInputError};
pub use progress::{
    count_completed_ascents, latest_qualifying_ascent, progress_summary, total_required_ascents,
    ProgressSummary,
};
pub use seasons::{
    classify_season, is_date_in_month, NorthernBoundaries, SeasonBoundaries, YearBoundaries,
};
