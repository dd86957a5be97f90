// SPDX-License-Identifier: MIT

//! Data models for completion tracking.

pub mod completion;
pub mod date;
pub mod mountain;
pub mod season;
pub mod variant;

pub use completion::{Completion, MonthSlots, SeasonSlots};
pub use date::StructuredDate;
pub use mountain::{AscentLog, Mountain};
pub use season::Season;
pub use variant::{InvalidVariant, ListVariant};
