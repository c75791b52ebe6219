//! Room-service types and daily counts.
//!
//! The planning form collects, per zone, how many rooms of each service
//! type are expected for the day, plus the optional evening services
//! (turndown, linen change) that feed the evening-coverage estimate.

use serde::{Deserialize, Serialize};

/// Room-service type, as priced by a zone's time standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    /// Arrival of an individually booked room.
    ArrivalIndividual,
    /// Stayover of an individually booked room.
    StayoverIndividual,
    /// Arrival of a group-booked room.
    ArrivalGroup,
    /// Stayover of a group-booked room.
    StayoverGroup,
}

impl ServiceKind {
    /// The four standard-priced kinds, in form order.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::ArrivalIndividual,
        ServiceKind::StayoverIndividual,
        ServiceKind::ArrivalGroup,
        ServiceKind::StayoverGroup,
    ];
}

/// Per-zone room counts for one day.
///
/// All counts are non-negative by construction; the caller's form is
/// responsible for any further input validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCounts {
    /// Individual arrivals.
    pub arrival_individual: u32,
    /// Individual stayovers.
    pub stayover_individual: u32,
    /// Group arrivals.
    pub arrival_group: u32,
    /// Group stayovers.
    pub stayover_group: u32,
    /// Evening turndown services.
    pub turndown: u32,
    /// Evening linen changes.
    pub linen_change: u32,
}

impl ServiceCounts {
    /// Creates an all-zero count set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for a standard-priced service kind.
    pub fn with(mut self, kind: ServiceKind, count: u32) -> Self {
        match kind {
            ServiceKind::ArrivalIndividual => self.arrival_individual = count,
            ServiceKind::StayoverIndividual => self.stayover_individual = count,
            ServiceKind::ArrivalGroup => self.arrival_group = count,
            ServiceKind::StayoverGroup => self.stayover_group = count,
        }
        self
    }

    /// Sets the evening turndown count.
    pub fn with_turndown(mut self, count: u32) -> Self {
        self.turndown = count;
        self
    }

    /// Sets the evening linen-change count.
    pub fn with_linen_change(mut self, count: u32) -> Self {
        self.linen_change = count;
        self
    }

    /// Count for a standard-priced service kind.
    pub fn count(&self, kind: ServiceKind) -> u32 {
        match kind {
            ServiceKind::ArrivalIndividual => self.arrival_individual,
            ServiceKind::StayoverIndividual => self.stayover_individual,
            ServiceKind::ArrivalGroup => self.arrival_group,
            ServiceKind::StayoverGroup => self.stayover_group,
        }
    }

    /// Whether every count is zero.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_builder() {
        let c = ServiceCounts::new()
            .with(ServiceKind::ArrivalIndividual, 4)
            .with(ServiceKind::StayoverIndividual, 10)
            .with_turndown(6)
            .with_linen_change(2);

        assert_eq!(c.count(ServiceKind::ArrivalIndividual), 4);
        assert_eq!(c.count(ServiceKind::StayoverIndividual), 10);
        assert_eq!(c.count(ServiceKind::ArrivalGroup), 0);
        assert_eq!(c.turndown, 6);
        assert_eq!(c.linen_change, 2);
        assert!(!c.is_empty());
    }

    #[test]
    fn test_empty_counts() {
        assert!(ServiceCounts::new().is_empty());
        assert!(!ServiceCounts::new().with_turndown(1).is_empty());
    }
}
