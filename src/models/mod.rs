//! Housekeeping domain models.
//!
//! Core data types for a daily roster run: the staff directory record, zone
//! configuration (time standards, priority list, merge pair), the day's
//! room-service counts, and the roster solution the engine produces.
//!
//! # Domain Mapping
//!
//! | Model | Directory form | Planning form |
//! |-------|---------------|---------------|
//! | `StaffMember` | personnel sheet | absentee picker |
//! | `TimeStandard` / `ZonePlan` | time configuration | — |
//! | `ServiceCounts` | — | per-zone room counts |
//! | `DailyRoster` | — | generated plan, then hand-balanced |

mod rating;
mod roster;
mod service;
mod staff;
mod zone;

pub use rating::StaffRatings;
pub use roster::{DailyRoster, Duty, TeamMember, ZoneRoster};
pub use service::{ServiceCounts, ServiceKind};
pub use staff::{
    affinity_matches, normalize, same_name, Role, ShiftType, StaffMember, FULL_SHIFT_HOURS,
    SHORT_SHIFT_HOURS,
};
pub use zone::{TimeStandard, ZonePlan, RESORT_ZONES};
