//! Roster (solution) model.
//!
//! A daily roster is the allocator's output: per-zone teams in processing
//! order, the bench of available-but-unassigned staff, and the published
//! evening-split roster. `required_hours` and `covered_hours` are computed
//! independently and never forced equal — under- and over-coverage are
//! reported, not corrected.

use serde::{Deserialize, Serialize};

use super::staff::same_name;

/// Role a member plays in a zone assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duty {
    /// Supervisor leading the zone; contributes no covered hours.
    SupervisorLead,
    /// Full-time attendant, 7.5 hours.
    Standard,
    /// Part-time attendant, 5.0 hours.
    PartTime,
    /// Evening-split pool member, 5.0 hours on the day shift.
    EveningSplit,
}

/// One member of a zone team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Staff member name.
    pub name: String,
    /// Role in this assignment.
    pub duty: Duty,
}

impl TeamMember {
    /// Creates a team member entry.
    pub fn new(name: impl Into<String>, duty: Duty) -> Self {
        Self {
            name: name.into(),
            duty,
        }
    }
}

/// Team and hour accounting for one zone (post-merge).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRoster {
    /// Zone label (a macro-zone carries its merged label).
    pub zone: String,
    /// Assigned members in assignment order.
    pub team: Vec<TeamMember>,
    /// Labour-hour demand computed by the demand calculator.
    pub required_hours: f64,
    /// Sum of the non-supervisor members' hour values.
    pub covered_hours: f64,
}

impl ZoneRoster {
    /// Names of the supervisors leading this zone. May be empty — a
    /// supervisor gap is a visible condition, never an error.
    pub fn supervisors(&self) -> Vec<&str> {
        self.team
            .iter()
            .filter(|m| m.duty == Duty::SupervisorLead)
            .map(|m| m.name.as_str())
            .collect()
    }

    /// Number of non-supervisor members.
    pub fn worker_count(&self) -> usize {
        self.team
            .iter()
            .filter(|m| m.duty != Duty::SupervisorLead)
            .count()
    }

    /// Whether the named member is on this team.
    pub fn contains(&self, name: &str) -> bool {
        self.team.iter().any(|m| same_name(&m.name, name))
    }
}

/// A complete daily roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyRoster {
    /// Zone teams in processing order.
    pub zones: Vec<ZoneRoster>,
    /// Available staff not assigned to any zone, in directory order.
    pub bench: Vec<String>,
    /// The published evening-coverage roster, in directory order.
    pub evening_split: Vec<String>,
}

impl DailyRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a zone's roster by label (normalized comparison).
    pub fn zone(&self, label: &str) -> Option<&ZoneRoster> {
        self.zones.iter().find(|z| same_name(&z.zone, label))
    }

    /// The zone a member is assigned to, if any.
    pub fn assignment_of(&self, name: &str) -> Option<&ZoneRoster> {
        self.zones.iter().find(|z| z.contains(name))
    }

    /// All assigned names across all zones, in roster order.
    pub fn assigned_names(&self) -> Vec<&str> {
        self.zones
            .iter()
            .flat_map(|z| z.team.iter().map(|m| m.name.as_str()))
            .collect()
    }
}
