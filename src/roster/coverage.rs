//! Coverage evaluation.
//!
//! Compares a zone's covered hours against its requirement and renders the
//! verdict the planning surface shows next to each team. The computation is
//! pure and must be re-run after every manual team edit, with exactly the
//! hour rule the engine used: 5.0 for part-timers and evening-split pool
//! members, 7.5 otherwise, supervisors excluded.

use serde::{Deserialize, Serialize};

use crate::models::{same_name, DailyRoster, Duty, StaffMember, ZoneRoster};

/// Outcome of comparing covered against required hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CoverageVerdict {
    /// Demand met, with the surplus in hours (zero or more).
    Covered { surplus_hours: f64 },
    /// Demand missed by the given number of hours.
    Short { missing_hours: f64 },
}

/// Coverage accounting for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Zone label.
    pub zone: String,
    /// Labour-hour demand.
    pub required_hours: f64,
    /// Hours actually assigned (non-supervisor members only).
    pub covered_hours: f64,
}

impl CoverageReport {
    /// Report for a zone as the engine produced it.
    pub fn of(roster: &ZoneRoster) -> Self {
        Self {
            zone: roster.zone.clone(),
            required_hours: roster.required_hours,
            covered_hours: roster.covered_hours,
        }
    }

    /// Reports for every zone of a daily roster, in roster order.
    pub fn for_roster(roster: &DailyRoster) -> Vec<Self> {
        roster.zones.iter().map(Self::of).collect()
    }

    /// Re-evaluates a hand-edited team against the original requirement.
    ///
    /// `team` is the edited member name list; names are resolved against
    /// the staff snapshot, and names that resolve to nothing contribute no
    /// hours (consistent with the engine's silent treatment of dangling
    /// references). `evening_split` is the pool published with the roster.
    pub fn reevaluate(
        zone: impl Into<String>,
        required_hours: f64,
        team: &[String],
        staff: &[StaffMember],
        evening_split: &[String],
    ) -> Self {
        let covered = team
            .iter()
            .filter_map(|name| staff.iter().find(|m| same_name(&m.name, name)))
            .filter(|m| m.is_attendant())
            .map(|m| {
                let in_split = evening_split.iter().any(|n| same_name(n, &m.name));
                m.shift_hours(in_split)
            })
            .sum();
        Self {
            zone: zone.into(),
            required_hours,
            covered_hours: covered,
        }
    }

    /// Covered minus required hours (negative when short).
    #[inline]
    pub fn difference(&self) -> f64 {
        self.covered_hours - self.required_hours
    }

    /// The coverage verdict for this zone.
    pub fn verdict(&self) -> CoverageVerdict {
        let diff = self.difference();
        if diff >= 0.0 {
            CoverageVerdict::Covered {
                surplus_hours: diff,
            }
        } else {
            CoverageVerdict::Short {
                missing_hours: -diff,
            }
        }
    }
}

/// Recomputes a zone roster's covered hours from its duty tags.
///
/// Idempotent with respect to the engine's accounting: supervisors count
/// zero, standard members 7.5, part-time and evening-split members 5.0.
pub fn covered_hours_from_duties(roster: &ZoneRoster) -> f64 {
    roster
        .team
        .iter()
        .map(|m| match m.duty {
            Duty::SupervisorLead => 0.0,
            Duty::Standard => crate::models::FULL_SHIFT_HOURS,
            Duty::PartTime | Duty::EveningSplit => crate::models::SHORT_SHIFT_HOURS,
        })
        .sum()
}
