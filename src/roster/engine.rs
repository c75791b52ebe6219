//! Greedy roster assignment engine.
//!
//! # Algorithm
//!
//! 1. Drop absentees from the staff snapshot; everyone else is the day's
//!    available pool, in directory order.
//! 2. Select the evening-split pool: the first four available attendants
//!    not restricted from split duty.
//! 3. Process zones in priority order: designated priority zones first,
//!    then the macro-zone, then the rest by descending required hours.
//! 4. Per zone: assign every matching supervisor, then pull attendants by
//!    `(affinity tier, directory index)` until the hour target is met,
//!    pulling preferred partners in unconditionally, then nudge the team
//!    to an even worker count.
//!
//! Infeasibility is never an error: supervisor gaps, under-coverage, and
//! an empty staff snapshot all produce an ordinary result for the caller
//! to flag.
//!
//! # Complexity
//! O(zones × staff), bounded by real-world counts (tens of staff, a dozen
//! zones).

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::demand::{merged_label, ZoneDemand};
use crate::models::{
    normalize, same_name, DailyRoster, Duty, ShiftType, StaffMember, TeamMember, ZonePlan,
    ZoneRoster, FULL_SHIFT_HOURS,
};

/// Size of the evening-split pool when enough attendants are eligible.
pub const EVENING_SPLIT_POOL_SIZE: usize = 4;

/// Input container for one roster run.
#[derive(Debug, Clone)]
pub struct RosterRequest {
    /// The staff directory snapshot, in directory order.
    pub staff: Vec<StaffMember>,
    /// Names excluded for the day.
    pub absences: Vec<String>,
    /// Post-merge demand list from the demand calculator.
    pub demand: Vec<ZoneDemand>,
    /// Priority zones and merge pair.
    pub plan: ZonePlan,
}

impl RosterRequest {
    /// Creates a request with no absences and the default zone plan.
    pub fn new(staff: Vec<StaffMember>, demand: Vec<ZoneDemand>) -> Self {
        Self {
            staff,
            absences: Vec::new(),
            demand,
            plan: ZonePlan::default(),
        }
    }

    /// Sets the day's absentees.
    pub fn with_absences(mut self, absences: Vec<String>) -> Self {
        self.absences = absences;
        self
    }

    /// Sets the zone plan.
    pub fn with_plan(mut self, plan: ZonePlan) -> Self {
        self.plan = plan;
        self
    }
}

/// The greedy roster allocator.
///
/// A run is a pure function of the request: the running "already assigned"
/// set is scoped to one `generate` call and never shared.
///
/// # Example
///
/// ```
/// use hk_roster::demand::ZoneDemand;
/// use hk_roster::models::{StaffMember, ZonePlan};
/// use hk_roster::roster::{RosterEngine, RosterRequest};
///
/// let staff = vec![
///     StaffMember::supervisor("Lucia").with_affinity("Le Dune"),
///     StaffMember::attendant("Anna").with_affinity("Le Dune").no_evening_split(),
///     StaffMember::attendant("Beatrice").part_time().no_evening_split(),
/// ];
/// let demand = vec![ZoneDemand::new("Le Dune", 9.0)];
/// let request = RosterRequest::new(staff, demand).with_plan(ZonePlan::new());
///
/// let roster = RosterEngine::new().generate(&request);
/// let dune = roster.zone("Le Dune").unwrap();
/// assert_eq!(dune.supervisors(), vec!["Lucia"]);
/// assert_eq!(dune.covered_hours, 12.5); // 7.5 + 5.0 against 9.0 required
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterEngine;

impl RosterEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }

    /// Generates the daily roster for a request.
    pub fn generate(&self, request: &RosterRequest) -> DailyRoster {
        let absent: HashSet<String> = request.absences.iter().map(|n| normalize(n)).collect();
        let available: Vec<(usize, &StaffMember)> = request
            .staff
            .iter()
            .enumerate()
            .filter(|(_, m)| !absent.contains(&normalize(&m.name)))
            .collect();

        let evening_split: Vec<String> = available
            .iter()
            .filter(|(_, m)| m.is_attendant() && !m.restricted_from_split)
            .take(EVENING_SPLIT_POOL_SIZE)
            .map(|(_, m)| m.name.clone())
            .collect();
        let split_set: HashSet<String> = evening_split.iter().map(|n| normalize(n)).collect();
        log::debug!("evening-split pool: {evening_split:?}");

        let mut assigned: HashSet<String> = HashSet::new();
        let zones: Vec<ZoneRoster> = zone_order(&request.demand, &request.plan)
            .into_iter()
            .map(|d| self.staff_zone(d, &request.plan, &available, &split_set, &mut assigned))
            .collect();

        let bench: Vec<String> = available
            .iter()
            .filter(|(_, m)| !assigned.contains(&normalize(&m.name)))
            .map(|(_, m)| m.name.clone())
            .collect();

        DailyRoster {
            zones,
            bench,
            evening_split,
        }
    }

    /// Builds one zone's team from the remaining pool.
    fn staff_zone(
        &self,
        demand: &ZoneDemand,
        plan: &ZonePlan,
        available: &[(usize, &StaffMember)],
        split: &HashSet<String>,
        assigned: &mut HashSet<String>,
    ) -> ZoneRoster {
        let mut team: Vec<TeamMember> = Vec::new();
        let mut covered = 0.0;

        for (_, member) in available.iter().filter(|(_, m)| m.is_supervisor()) {
            if assigned.contains(&normalize(&member.name)) {
                continue;
            }
            if member.has_affinity_for(&demand.zone) {
                assigned.insert(normalize(&member.name));
                team.push(TeamMember::new(member.name.clone(), Duty::SupervisorLead));
            }
        }
        if team.is_empty() {
            log::warn!("no supervisor available for zone {}", demand.zone);
        }

        // A zero-demand priority zone still gets one full shift's worth.
        let target = if demand.required_hours > 0.0 {
            demand.required_hours
        } else if plan.is_priority(&demand.zone) {
            FULL_SHIFT_HOURS
        } else {
            0.0
        };

        while covered < target {
            let Some(pick) = best_attendant(&demand.zone, available, assigned) else {
                log::warn!(
                    "attendant pool exhausted for {}: {covered:.1}/{target:.1} h",
                    demand.zone
                );
                break;
            };
            covered += add_with_partners(pick, available, split, assigned, &mut team);
        }

        let workers = team.iter().filter(|m| m.duty != Duty::SupervisorLead).count();
        if workers % 2 == 1 {
            if let Some(pick) = best_attendant(&demand.zone, available, assigned) {
                covered += add_with_partners(pick, available, split, assigned, &mut team);
            }
        }

        log::debug!(
            "zone {}: {covered:.1}/{:.1} h, team of {}",
            demand.zone,
            demand.required_hours,
            team.len()
        );
        ZoneRoster {
            zone: demand.zone.clone(),
            team,
            required_hours: demand.required_hours,
            covered_hours: covered,
        }
    }
}

/// Adds an attendant and follows their partner chain.
///
/// Partner pull-in is an unconditional override of the hour target: once an
/// added attendant names an available, unassigned partner, the partner joins
/// the same team, and the chain continues through each pulled attendant.
/// Returns the covered hours the additions contribute.
fn add_with_partners(
    first: &StaffMember,
    available: &[(usize, &StaffMember)],
    split: &HashSet<String>,
    assigned: &mut HashSet<String>,
    team: &mut Vec<TeamMember>,
) -> f64 {
    let mut added = 0.0;
    let mut cursor = first;
    loop {
        added += add_member(cursor, split, assigned, team);
        if !cursor.is_attendant() {
            break;
        }
        let Some(partner_name) = cursor.preferred_partner.as_deref() else {
            break;
        };
        let partner = available.iter().copied().find(|&(_, m)| {
            same_name(&m.name, partner_name) && !assigned.contains(&normalize(&m.name))
        });
        match partner {
            Some((_, partner)) => cursor = partner,
            None => break, // dangling or already taken, silently skipped
        }
    }
    added
}

/// Marks a member assigned and appends them to the team.
///
/// Returns the member's covered-hour contribution (zero for supervisors).
fn add_member(
    member: &StaffMember,
    split: &HashSet<String>,
    assigned: &mut HashSet<String>,
    team: &mut Vec<TeamMember>,
) -> f64 {
    assigned.insert(normalize(&member.name));
    if member.is_supervisor() {
        team.push(TeamMember::new(member.name.clone(), Duty::SupervisorLead));
        return 0.0;
    }
    let in_split = split.contains(&normalize(&member.name));
    let duty = if in_split {
        Duty::EveningSplit
    } else if member.shift_type == ShiftType::PartTime {
        Duty::PartTime
    } else {
        Duty::Standard
    };
    team.push(TeamMember::new(member.name.clone(), duty));
    member.shift_hours(in_split)
}

/// Best remaining attendant for a zone: lowest `(affinity tier, index)`.
fn best_attendant<'a>(
    zone: &str,
    available: &[(usize, &'a StaffMember)],
    assigned: &HashSet<String>,
) -> Option<&'a StaffMember> {
    available
        .iter()
        .copied()
        .filter(|&(_, m)| m.is_attendant() && !assigned.contains(&normalize(&m.name)))
        .min_by_key(|&(index, m)| (affinity_tier(m, zone), index))
        .map(|(_, m)| m)
}

/// Affinity tier: zone affinity, then declared floaters, then everyone else.
fn affinity_tier(member: &StaffMember, zone: &str) -> u8 {
    if member.has_affinity_for(zone) {
        0
    } else if member.floater {
        1
    } else {
        2
    }
}

/// Zone processing order: priority zones (in plan order), the macro-zone,
/// then the rest by descending required hours, stable for ties.
fn zone_order<'a>(demand: &'a [ZoneDemand], plan: &ZonePlan) -> Vec<&'a ZoneDemand> {
    let mut taken = vec![false; demand.len()];
    let mut order: Vec<&ZoneDemand> = Vec::with_capacity(demand.len());

    let push = |label: &str, taken: &mut Vec<bool>, order: &mut Vec<&'a ZoneDemand>| {
        if let Some(i) = demand.iter().position(|d| same_name(&d.zone, label)) {
            if !taken[i] {
                taken[i] = true;
                order.push(&demand[i]);
            }
        }
    };

    for zone in &plan.priority_zones {
        push(zone, &mut taken, &mut order);
    }
    if let Some((a, b)) = &plan.merge_pair {
        push(&merged_label(a, b), &mut taken, &mut order);
    }

    let mut rest: Vec<usize> = (0..demand.len()).filter(|&i| !taken[i]).collect();
    rest.sort_by(|&i, &j| {
        demand[j]
            .required_hours
            .partial_cmp(&demand[i].required_hours)
            .unwrap_or(Ordering::Equal)
    });
    order.extend(rest.into_iter().map(|i| &demand[i]));
    order
}
