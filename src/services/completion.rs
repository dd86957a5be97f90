// SPDX-License-Identifier: MIT

//! Per-mountain completion resolution.
//!
//! Takes one mountain's raw ascent date-strings and a list variant and
//! produces the canonical completion record for that mountain. All rules
//! work over the dates sorted ascending, so the result is independent of
//! the order ascents were recorded in.

use crate::models::completion::{Completion, MonthSlots, SeasonSlots};
use crate::models::date::StructuredDate;
use crate::models::season::Season;
use crate::models::variant::ListVariant;
use crate::services::seasons::{classify_season, is_date_in_month, SeasonBoundaries};

/// Resolve a mountain's completion state under a list variant.
///
/// - `Standard`: earliest fully-known date, falling back to the earliest
///   recorded date when no ascent has a complete date. A dateless ascent
///   still completes a standard list.
/// - `Winter`: earliest date classified as winter; an ascent whose season
///   cannot be determined never qualifies.
/// - `FourSeason` / `Grid`: each season/month slot takes the earliest
///   matching date independently. When several ascents match the same
///   slot, the first in ascending order wins and later ones are ignored;
///   this keeps historical completion dates stable as ascents are added.
pub fn resolve(
    ascent_dates: &[String],
    variant: ListVariant,
    boundaries: &impl SeasonBoundaries,
) -> Completion {
    let sorted = StructuredDate::decode_all(ascent_dates);

    match variant {
        ListVariant::Standard => {
            let date = sorted
                .iter()
                .find(|d| d.is_fully_known())
                .or_else(|| sorted.first())
                .copied();
            Completion::Single(date)
        }
        ListVariant::Winter => {
            let date = sorted
                .iter()
                .find(|d| classify_season(d, boundaries) == Some(Season::Winter))
                .copied();
            Completion::Single(date)
        }
        ListVariant::FourSeason => {
            let mut slots = SeasonSlots::default();
            for date in &sorted {
                if let Some(season) = classify_season(date, boundaries) {
                    let slot = slots.slot_mut(season);
                    if slot.is_none() {
                        *slot = Some(*date);
                    }
                }
            }
            Completion::Seasonal(slots)
        }
        ListVariant::Grid => {
            let mut slots = MonthSlots::default();
            for date in &sorted {
                for month in 1..=12 {
                    if is_date_in_month(date, month) {
                        let slot = slots.slot_mut(month);
                        if slot.is_none() {
                            *slot = Some(*date);
                        }
                    }
                }
            }
            Completion::Monthly(slots)
        }
    }
}
