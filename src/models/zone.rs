//! Zone configuration: time standards and the zone plan.
//!
//! A zone is a hotel property or work area. Its time standard prices each
//! room-service type in minutes per room; zones without a configured
//! standard fall back to the built-in defaults. The zone plan carries the
//! two pieces of fixed operational configuration the allocator needs:
//! which zones are processed first (and always staffed), and which two
//! small zones are merged into one macro-zone for assignment.

use serde::{Deserialize, Serialize};

use super::staff::normalize;
use super::ServiceKind;

/// The resort's work areas, in planning-form order.
pub const RESORT_ZONES: [&str; 12] = [
    "Hotel Castello",
    "Hotel Castello Garden",
    "Hotel Castello 4 Piano",
    "Cala del Forte",
    "Le Dune",
    "Villa del Parco",
    "Hotel Pineta",
    "Bouganville",
    "Le Palme",
    "Il Borgo",
    "Le Ville",
    "Spazi Comuni",
];

/// Minutes per room for each service type in one zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeStandard {
    /// Minutes per individual arrival.
    pub arrival_individual: f64,
    /// Minutes per individual stayover.
    pub stayover_individual: f64,
    /// Minutes per group arrival.
    pub arrival_group: f64,
    /// Minutes per group stayover.
    pub stayover_group: f64,
}

impl Default for TimeStandard {
    /// Built-in defaults used whenever a zone has no configured standard.
    fn default() -> Self {
        Self {
            arrival_individual: 60.0,
            stayover_individual: 30.0,
            arrival_group: 45.0,
            stayover_group: 20.0,
        }
    }
}

impl TimeStandard {
    /// Creates a standard from the four per-kind minute values.
    pub fn new(
        arrival_individual: f64,
        stayover_individual: f64,
        arrival_group: f64,
        stayover_group: f64,
    ) -> Self {
        Self {
            arrival_individual,
            stayover_individual,
            arrival_group,
            stayover_group,
        }
    }

    /// Minutes per room for a standard-priced service kind.
    pub fn minutes_for(&self, kind: ServiceKind) -> f64 {
        match kind {
            ServiceKind::ArrivalIndividual => self.arrival_individual,
            ServiceKind::StayoverIndividual => self.stayover_individual,
            ServiceKind::ArrivalGroup => self.arrival_group,
            ServiceKind::StayoverGroup => self.stayover_group,
        }
    }

    /// Minutes per evening turndown: a third of the stayover standard.
    ///
    /// Fixed approximation, not a configurable input.
    pub fn turndown_minutes(&self) -> f64 {
        self.stayover_individual / 3.0
    }

    /// Minutes per evening linen change: a quarter of the stayover standard.
    pub fn linen_change_minutes(&self) -> f64 {
        self.stayover_individual / 4.0
    }
}

/// Fixed operational configuration for a roster run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonePlan {
    /// Zones processed first, in this order, and staffed with at least one
    /// attendant even on a zero-demand day.
    pub priority_zones: Vec<String>,
    /// Two small zones whose demand and staff pools are combined into one
    /// macro-zone before assignment.
    pub merge_pair: Option<(String, String)>,
}

impl Default for ZonePlan {
    /// The main property and its sub-buildings lead; no merge pair.
    fn default() -> Self {
        Self {
            priority_zones: RESORT_ZONES[..3].iter().map(|z| z.to_string()).collect(),
            merge_pair: None,
        }
    }
}

impl ZonePlan {
    /// Creates an empty plan (no priority zones, no merge pair).
    pub fn new() -> Self {
        Self {
            priority_zones: Vec::new(),
            merge_pair: None,
        }
    }

    /// Appends a priority zone.
    pub fn with_priority_zone(mut self, zone: impl Into<String>) -> Self {
        self.priority_zones.push(zone.into());
        self
    }

    /// Declares the merge pair.
    pub fn with_merge_pair(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.merge_pair = Some((a.into(), b.into()));
        self
    }

    /// Whether a zone label names a priority zone (normalized comparison).
    pub fn is_priority(&self, zone_label: &str) -> bool {
        let label = normalize(zone_label);
        self.priority_zones.iter().any(|z| normalize(z) == label)
    }
}
