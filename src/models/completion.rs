// SPDX-License-Identifier: MIT

//! Variant-shaped completion state for a single mountain.

use serde::{Deserialize, Serialize};

use crate::models::date::StructuredDate;
use crate::models::season::Season;

/// Resolved completion state of one mountain under one list variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Completion {
    /// Standard and winter lists: at most one qualifying date.
    Single(Option<StructuredDate>),
    /// Four-season lists: one slot per season.
    Seasonal(SeasonSlots),
    /// Grid lists: one slot per calendar month.
    Monthly(MonthSlots),
}

impl Completion {
    /// Number of populated ascent slots (0 or 1 for `Single`).
    pub fn populated_count(&self) -> usize {
        match self {
            Self::Single(date) => usize::from(date.is_some()),
            Self::Seasonal(slots) => slots.populated_count(),
            Self::Monthly(slots) => slots.populated_count(),
        }
    }

    /// True when every slot the variant requires is populated.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Single(date) => date.is_some(),
            Self::Seasonal(slots) => slots.populated_count() == 4,
            Self::Monthly(slots) => slots.populated_count() == 12,
        }
    }

    /// All populated dates, in slot order.
    pub fn dates(&self) -> Vec<StructuredDate> {
        match self {
            Self::Single(date) => date.iter().copied().collect(),
            Self::Seasonal(slots) => slots.dates().collect(),
            Self::Monthly(slots) => slots.dates().collect(),
        }
    }
}

/// One optional completion date per astronomical season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSlots {
    pub spring: Option<StructuredDate>,
    pub summer: Option<StructuredDate>,
    pub fall: Option<StructuredDate>,
    pub winter: Option<StructuredDate>,
}

impl SeasonSlots {
    pub fn get(&self, season: Season) -> Option<StructuredDate> {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
            Season::Winter => self.winter,
        }
    }

    pub(crate) fn slot_mut(&mut self, season: Season) -> &mut Option<StructuredDate> {
        match season {
            Season::Spring => &mut self.spring,
            Season::Summer => &mut self.summer,
            Season::Fall => &mut self.fall,
            Season::Winter => &mut self.winter,
        }
    }

    pub fn populated_count(&self) -> usize {
        Season::ALL.iter().filter(|s| self.get(**s).is_some()).count()
    }

    /// Populated dates in season order.
    pub fn dates(&self) -> impl Iterator<Item = StructuredDate> + '_ {
        Season::ALL.into_iter().filter_map(|s| self.get(s))
    }
}

/// One optional completion date per calendar month (January first).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthSlots([Option<StructuredDate>; 12]);

impl MonthSlots {
    /// The slot for a calendar month (1 = January). Out-of-range months
    /// yield `None`.
    pub fn get(&self, month: u32) -> Option<StructuredDate> {
        match month {
            1..=12 => self.0[(month - 1) as usize],
            _ => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, month: u32) -> &mut Option<StructuredDate> {
        debug_assert!((1..=12).contains(&month));
        &mut self.0[(month - 1) as usize]
    }

    pub fn populated_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// Populated dates in month order.
    pub fn dates(&self) -> impl Iterator<Item = StructuredDate> + '_ {
        self.0.iter().copied().flatten()
    }
}
