//! Staff record model.
//!
//! A staff member is either a room attendant or a supervisor, with a set of
//! zone affinities, a shift type that fixes their daily hour value, and the
//! soft-preference fields used during assignment (preferred work partner,
//! evening-split restriction, floater and commuter flags).
//!
//! # Affinity Matching
//! Zone affinity is a *loose* match by design: a normalized (trimmed,
//! case-insensitive) substring containment check in either direction, so the
//! entry "Castello" matches the zone "Hotel Castello" and the entry
//! "Hotel Castello Garden" matches the merged label that contains it. Exact
//! set membership would reject affinity strings the directory has always
//! recorded in short form.

use serde::{Deserialize, Serialize};

use super::StaffRatings;

/// Hours contributed by a full-time member scheduled on the day shift.
pub const FULL_SHIFT_HOURS: f64 = 7.5;

/// Hours contributed by a part-time member, or by anyone selected into the
/// evening-split pool regardless of underlying shift type.
pub const SHORT_SHIFT_HOURS: f64 = 5.0;

/// Staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Performs room-service work; the bulk of every zone team.
    Attendant,
    /// Leads a zone team; assigned first, contributes no covered hours.
    Supervisor,
}

/// Underlying contract shift type.
///
/// Members selected into the evening-split pool are valued at
/// [`SHORT_SHIFT_HOURS`] for the day regardless of this type; the selection
/// is per-run state, not a property of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShiftType {
    /// Full day shift, 7.5 hours.
    #[default]
    FullTime,
    /// Reduced shift, 5.0 hours.
    PartTime,
}

/// A member of the housekeeping staff directory.
///
/// Records are read-only to the core: a roster run never mutates them, it
/// only reads the snapshot handed in by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique name within a run.
    pub name: String,
    /// Attendant or supervisor.
    pub role: Role,
    /// Zones this member is skilled in (supervisors carry at most two by
    /// data-entry convention; the core tolerates more).
    pub zone_affinities: Vec<String>,
    /// Contract shift type.
    pub shift_type: ShiftType,
    /// Soft pairing preference, resolved by name at use time. May dangle.
    pub preferred_partner: Option<String>,
    /// Never placed in the evening-split pool when set.
    pub restricted_from_split: bool,
    /// Explicitly deployable anywhere; preferred over other non-affinity
    /// attendants when a zone's affinity pool runs dry.
    pub floater: bool,
    /// Commutes from outside the resort.
    pub commuter: bool,
    /// Carpool companion, resolved by name at use time. May dangle.
    pub travels_with: Option<String>,
    /// Dashboard performance scores; ignored by the allocator.
    pub ratings: StaffRatings,
}

impl StaffMember {
    fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            zone_affinities: Vec::new(),
            shift_type: ShiftType::FullTime,
            preferred_partner: None,
            restricted_from_split: false,
            floater: false,
            commuter: false,
            travels_with: None,
            ratings: StaffRatings::default(),
        }
    }

    /// Creates a full-time room attendant.
    pub fn attendant(name: impl Into<String>) -> Self {
        Self::new(name, Role::Attendant)
    }

    /// Creates a supervisor.
    pub fn supervisor(name: impl Into<String>) -> Self {
        Self::new(name, Role::Supervisor)
    }

    /// Adds a zone affinity.
    pub fn with_affinity(mut self, zone: impl Into<String>) -> Self {
        self.zone_affinities.push(zone.into());
        self
    }

    /// Marks the member part-time.
    pub fn part_time(mut self) -> Self {
        self.shift_type = ShiftType::PartTime;
        self
    }

    /// Sets the preferred work partner.
    pub fn with_partner(mut self, name: impl Into<String>) -> Self {
        self.preferred_partner = Some(name.into());
        self
    }

    /// Excludes the member from the evening-split pool.
    pub fn no_evening_split(mut self) -> Self {
        self.restricted_from_split = true;
        self
    }

    /// Marks the member a floater.
    pub fn as_floater(mut self) -> Self {
        self.floater = true;
        self
    }

    /// Marks the member a commuter.
    pub fn commuting(mut self) -> Self {
        self.commuter = true;
        self
    }

    /// Marks the member a commuter riding with the named companion.
    pub fn commuting_with(mut self, name: impl Into<String>) -> Self {
        self.commuter = true;
        self.travels_with = Some(name.into());
        self
    }

    /// Sets the dashboard ratings.
    pub fn with_ratings(mut self, ratings: StaffRatings) -> Self {
        self.ratings = ratings;
        self
    }

    /// Whether this member is an attendant.
    #[inline]
    pub fn is_attendant(&self) -> bool {
        self.role == Role::Attendant
    }

    /// Whether this member is a supervisor.
    #[inline]
    pub fn is_supervisor(&self) -> bool {
        self.role == Role::Supervisor
    }

    /// Whether any affinity entry loosely matches the given zone label.
    pub fn has_affinity_for(&self, zone_label: &str) -> bool {
        self.zone_affinities
            .iter()
            .any(|entry| affinity_matches(zone_label, entry))
    }

    /// Hour value of this member's day shift.
    ///
    /// `in_evening_split` is whether the member was selected into the
    /// evening-split pool for this run; pool members are always valued at
    /// [`SHORT_SHIFT_HOURS`].
    pub fn shift_hours(&self, in_evening_split: bool) -> f64 {
        if in_evening_split || self.shift_type == ShiftType::PartTime {
            SHORT_SHIFT_HOURS
        } else {
            FULL_SHIFT_HOURS
        }
    }
}

/// Normalizes a name or zone label for comparison.
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Loose affinity match between a zone label and one affinity entry.
///
/// True when either normalized string contains the other. Empty strings
/// never match.
pub fn affinity_matches(zone_label: &str, affinity_entry: &str) -> bool {
    let zone = normalize(zone_label);
    let entry = normalize(affinity_entry);
    if zone.is_empty() || entry.is_empty() {
        return false;
    }
    zone.contains(&entry) || entry.contains(&zone)
}

/// Whether two names refer to the same member (normalized comparison).
pub fn same_name(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
