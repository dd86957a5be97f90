// SPDX-License-Identifier: MIT

//! List-level progress aggregation.
//!
//! Drives the progress bars and summary text on list pages and the stats
//! dashboard: ascents completed vs. required across a whole peak list, and
//! the most recent qualifying ascent. Everything here is recomputed on each
//! read from the raw ascent log; nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::models::date::StructuredDate;
use crate::models::mountain::{AscentLog, Mountain};
use crate::models::variant::ListVariant;
use crate::services::completion::resolve;
use crate::services::seasons::SeasonBoundaries;

/// Aggregate progress of one user against one peak list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Populated ascent slots across all mountains in the list
    pub completed_ascents: usize,
    /// Slots the variant requires for the whole list
    pub required_ascents: usize,
    /// Most recent qualifying ascent, if any mountain has one
    pub latest_ascent: Option<StructuredDate>,
}

impl ProgressSummary {
    /// Completion percentage in [0, 100], 0 for an empty list.
    pub fn percent(&self) -> f64 {
        if self.required_ascents == 0 {
            return 0.0;
        }
        self.completed_ascents as f64 / self.required_ascents as f64 * 100.0
    }
}

/// Total ascent slots a list of `mountain_count` mountains requires.
pub fn total_required_ascents(mountain_count: usize, variant: ListVariant) -> usize {
    mountain_count * variant.required_per_mountain()
}

/// Count populated ascent slots across the list.
///
/// For standard/winter this is the number of completed mountains; for
/// four-season and grid lists every populated season/month slot counts
/// individually, so one fully-gridded mountain contributes 12.
pub fn count_completed_ascents(
    mountains: &[Mountain],
    log: &AscentLog,
    variant: ListVariant,
    boundaries: &impl SeasonBoundaries,
) -> usize {
    progress_summary(mountains, log, variant, boundaries).completed_ascents
}

/// The qualifying ascent with the latest date across the whole list.
///
/// Ties and repeated dates keep the first mountain seen, in the caller's
/// mountain order. Returns `None` when no mountain has any qualifying
/// ascent.
pub fn latest_qualifying_ascent(
    mountains: &[Mountain],
    log: &AscentLog,
    variant: ListVariant,
    boundaries: &impl SeasonBoundaries,
) -> Option<StructuredDate> {
    progress_summary(mountains, log, variant, boundaries).latest_ascent
}

/// Compute the full progress summary for a list in one pass.
pub fn progress_summary(
    mountains: &[Mountain],
    log: &AscentLog,
    variant: ListVariant,
    boundaries: &impl SeasonBoundaries,
) -> ProgressSummary {
    let mut completed = 0;
    let mut latest: Option<StructuredDate> = None;

    for mountain in mountains {
        let completion = resolve(log.dates_for(&mountain.id), variant, boundaries);
        completed += completion.populated_count();
        for date in completion.dates() {
            // Strictly-greater keeps the first-seen date on ties
            if latest.map_or(true, |best| date > best) {
                latest = Some(date);
            }
        }
    }

    let summary = ProgressSummary {
        completed_ascents: completed,
        required_ascents: total_required_ascents(mountains.len(), variant),
        latest_ascent: latest,
    };
    tracing::debug!(
        variant = %variant,
        mountains = mountains.len(),
        completed = summary.completed_ascents,
        required = summary.required_ascents,
        "Computed list progress"
    );
    summary
}
