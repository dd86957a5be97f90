// SPDX-License-Identifier: MIT

//! Wilderlist progress core: ascent-completion and progress computation
//! for hiking peak lists.
//!
//! A peak list is a set of mountains tracked under a completion rule-set
//! (its [`ListVariant`]): standard (climb each once), winter (each in
//! winter), four-season (each in every season), or grid (each in every
//! calendar month). Users report ascents as partially-known dates; this
//! crate decodes them, classifies them by season or month, resolves each
//! mountain's completion state, and aggregates list-level progress.
//!
//! All computation is pure and synchronous; the surrounding API layer
//! supplies the raw records and renders the results.

pub mod models;
pub mod services;

pub use models::{
    AscentLog, Completion, ListVariant, MonthSlots, Mountain, Season, SeasonSlots, StructuredDate,
};
pub use services::{
    classify_season, count_completed_ascents, is_date_in_month, latest_qualifying_ascent,
    parse_date_input, progress_summary, resolve, total_required_ascents, NorthernBoundaries,
    ProgressSummary, SeasonBoundaries, YearBoundaries,
};
