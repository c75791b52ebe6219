//! Demand calculation.
//!
//! Converts a day's per-zone room-service counts into required labour hours
//! using each zone's time standard, then applies the macro-zone merge rule.
//! The merge happens here, before the assignment engine ever sees the
//! demand list: the two paired zones' hours are computed independently,
//! summed, and replaced by a single entry under the merged label.
//!
//! A zone with zero counts still appears in the output with
//! `required_hours = 0` — the engine decides what a zero-demand zone gets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{normalize, same_name, ServiceCounts, ServiceKind, TimeStandard, ZonePlan};

/// Labour-hour demand for one zone (post-merge, one entry per zone the
/// engine will process).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDemand {
    /// Zone label; a macro-zone carries its merged label.
    pub zone: String,
    /// Required labour hours, `>= 0`.
    pub required_hours: f64,
}

impl ZoneDemand {
    /// Creates a demand entry.
    pub fn new(zone: impl Into<String>, required_hours: f64) -> Self {
        Self {
            zone: zone.into(),
            required_hours,
        }
    }
}

/// Label of the macro-zone formed by merging two zones.
pub fn merged_label(a: &str, b: &str) -> String {
    format!("{} + {}", a.trim(), b.trim())
}

/// Required labour hours for one zone's counts under one time standard.
///
/// Evening services are priced off the stayover-individual standard:
/// turndown at a third, linen change at a quarter.
pub fn required_hours(counts: &ServiceCounts, standard: &TimeStandard) -> f64 {
    let mut minutes = 0.0;
    for kind in ServiceKind::ALL {
        minutes += f64::from(counts.count(kind)) * standard.minutes_for(kind);
    }
    minutes += f64::from(counts.turndown) * standard.turndown_minutes();
    minutes += f64::from(counts.linen_change) * standard.linen_change_minutes();
    minutes / 60.0
}

/// Computes the day's demand list from per-zone counts and time standards.
///
/// Zones missing from `standards` fall back to [`TimeStandard::default`]
/// (standard lookup is by normalized zone name). When both members of the
/// plan's merge pair appear in `loads`, their entries are replaced by one
/// macro-zone entry at the first member's position; with only one member
/// present there is nothing to merge and the zone keeps its own name.
pub fn compute_demand(
    loads: &[(String, ServiceCounts)],
    standards: &HashMap<String, TimeStandard>,
    plan: &ZonePlan,
) -> Vec<ZoneDemand> {
    let by_name: HashMap<String, &TimeStandard> = standards
        .iter()
        .map(|(zone, std)| (normalize(zone), std))
        .collect();

    let mut demand: Vec<ZoneDemand> = loads
        .iter()
        .map(|(zone, counts)| {
            let standard = by_name
                .get(&normalize(zone))
                .copied()
                .copied()
                .unwrap_or_default();
            ZoneDemand::new(zone.clone(), required_hours(counts, &standard))
        })
        .collect();

    if let Some((a, b)) = &plan.merge_pair {
        let pos_a = demand.iter().position(|d| same_name(&d.zone, a));
        let pos_b = demand.iter().position(|d| same_name(&d.zone, b));
        if let (Some(pos_a), Some(pos_b)) = (pos_a, pos_b) {
            let merged = ZoneDemand::new(
                merged_label(a, b),
                demand[pos_a].required_hours + demand[pos_b].required_hours,
            );
            let first = pos_a.min(pos_b);
            demand.remove(pos_a.max(pos_b));
            demand[first] = merged;
        }
    }

    demand
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceKind::*;

    fn loads(entries: &[(&str, ServiceCounts)]) -> Vec<(String, ServiceCounts)> {
        entries
            .iter()
            .map(|(zone, counts)| (zone.to_string(), *counts))
            .collect()
    }

    #[test]
    fn test_required_hours_worked_example() {
        // Arr-Ind=4 at 60 min, Stay-Ind=10 at 30 min → (240+300)/60 = 9 h.
        let counts = ServiceCounts::new()
            .with(ArrivalIndividual, 4)
            .with(StayoverIndividual, 10);
        assert_eq!(required_hours(&counts, &TimeStandard::default()), 9.0);
    }

    #[test]
    fn test_evening_services_priced_off_stayover() {
        let std = TimeStandard::new(60.0, 30.0, 45.0, 20.0);
        let counts = ServiceCounts::new().with_turndown(6).with_linen_change(4);
        // 6 * 10 + 4 * 7.5 = 90 min → 1.5 h.
        assert_eq!(required_hours(&counts, &std), 1.5);
    }

    #[test]
    fn test_missing_standard_falls_back_to_defaults() {
        let input = loads(&[(
            "Le Ville",
            ServiceCounts::new().with(StayoverIndividual, 2),
        )]);
        let demand = compute_demand(&input, &HashMap::new(), &ZonePlan::new());
        assert_eq!(demand, vec![ZoneDemand::new("Le Ville", 1.0)]);
    }

    #[test]
    fn test_zero_count_zone_kept() {
        let input = loads(&[("Spazi Comuni", ServiceCounts::new())]);
        let demand = compute_demand(&input, &HashMap::new(), &ZonePlan::new());
        assert_eq!(demand[0].required_hours, 0.0);
    }

    #[test]
    fn test_merge_sums_both_members() {
        // Palme 3.0 h, Garden 2.0 h → one macro entry at 5.0 h, order-free.
        let plan = ZonePlan::new().with_merge_pair("Le Palme", "Garden");
        let palme = ServiceCounts::new().with(StayoverIndividual, 6);
        let garden = ServiceCounts::new().with(StayoverIndividual, 4);

        for input in [
            loads(&[("Le Palme", palme), ("Garden", garden)]),
            loads(&[("Garden", garden), ("Le Palme", palme)]),
        ] {
            let demand = compute_demand(&input, &HashMap::new(), &plan);
            assert_eq!(demand.len(), 1);
            assert_eq!(demand[0].zone, "Le Palme + Garden");
            assert_eq!(demand[0].required_hours, 5.0);
        }
    }

    #[test]
    fn test_merge_keeps_surrounding_zones() {
        let plan = ZonePlan::new().with_merge_pair("Le Palme", "Il Borgo");
        let one = ServiceCounts::new().with(StayoverIndividual, 2);
        let input = loads(&[
            ("Le Dune", one),
            ("Le Palme", one),
            ("Bouganville", one),
            ("Il Borgo", one),
        ]);

        let demand = compute_demand(&input, &HashMap::new(), &plan);
        let labels: Vec<&str> = demand.iter().map(|d| d.zone.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Le Dune", "Le Palme + Il Borgo", "Bouganville"]
        );
    }

    #[test]
    fn test_merge_pair_with_one_side_absent() {
        let plan = ZonePlan::new().with_merge_pair("Le Palme", "Il Borgo");
        let input = loads(&[(
            "Le Palme",
            ServiceCounts::new().with(StayoverIndividual, 2),
        )]);

        let demand = compute_demand(&input, &HashMap::new(), &plan);
        assert_eq!(demand[0].zone, "Le Palme");
    }

    #[test]
    fn test_per_zone_standard_lookup() {
        let mut standards = HashMap::new();
        standards.insert("Le Dune".to_string(), TimeStandard::new(90.0, 30.0, 45.0, 20.0));
        let input = loads(&[
            ("le dune", ServiceCounts::new().with(ArrivalIndividual, 2)),
            ("Le Palme", ServiceCounts::new().with(ArrivalIndividual, 2)),
        ]);

        let demand = compute_demand(&input, &standards, &ZonePlan::new());
        assert_eq!(demand[0].required_hours, 3.0); // configured 90 min
        assert_eq!(demand[1].required_hours, 2.0); // default 60 min
    }
}
