//! Carpool manifest.
//!
//! Commuting staff record who they ride with; the planning surface prints a
//! car manifest next to the roster so the desk can check nobody's ride left
//! without them. Grouping follows the travels-with links undirected —
//! either rider naming the other joins the two — and dangling or absent
//! companions are ignored. This is reporting only: carpools never influence
//! zone assignment.

use serde::{Deserialize, Serialize};

use crate::models::{normalize, same_name, StaffMember};

/// One car's riders, in directory order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarpoolGroup {
    /// Member names; a lone commuter forms a group of one.
    pub members: Vec<String>,
}

/// Derives the day's carpool groups from the staff snapshot.
///
/// Only commuters present today are grouped. Groups are ordered by their
/// first member's directory position.
pub fn carpool_groups(staff: &[StaffMember], absences: &[String]) -> Vec<CarpoolGroup> {
    let absent: Vec<String> = absences.iter().map(|n| normalize(n)).collect();
    let commuters: Vec<&StaffMember> = staff
        .iter()
        .filter(|m| m.commuter && !absent.contains(&normalize(&m.name)))
        .collect();

    // Union by index over the small commuter list.
    let mut group_of: Vec<usize> = (0..commuters.len()).collect();
    for (i, member) in commuters.iter().enumerate() {
        let Some(companion) = member.travels_with.as_deref() else {
            continue;
        };
        let Some(j) = commuters.iter().position(|m| same_name(&m.name, companion)) else {
            continue; // dangling or absent companion
        };
        let (from, to) = (group_of[i.max(j)], group_of[i.min(j)]);
        for g in group_of.iter_mut() {
            if *g == from {
                *g = to;
            }
        }
    }

    let mut groups: Vec<CarpoolGroup> = Vec::new();
    let mut seen: Vec<usize> = Vec::new();
    for (i, _) in commuters.iter().enumerate() {
        let root = group_of[i];
        if seen.contains(&root) {
            continue;
        }
        seen.push(root);
        groups.push(CarpoolGroup {
            members: commuters
                .iter()
                .enumerate()
                .filter(|(k, _)| group_of[*k] == root)
                .map(|(_, m)| m.name.clone())
                .collect(),
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StaffMember;

    fn names(group: &CarpoolGroup) -> Vec<&str> {
        group.members.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_groups_follow_links_undirected() {
        let staff = vec![
            StaffMember::attendant("Anna").commuting_with("Beatrice"),
            StaffMember::attendant("Beatrice").commuting(),
            StaffMember::attendant("Carla").commuting(),
            StaffMember::attendant("Dora").commuting_with("Carla"),
        ];
        let groups = carpool_groups(&staff, &[]);

        assert_eq!(groups.len(), 2);
        assert_eq!(names(&groups[0]), vec!["Anna", "Beatrice"]);
        assert_eq!(names(&groups[1]), vec!["Carla", "Dora"]);
    }

    #[test]
    fn test_chained_links_share_a_car() {
        let staff = vec![
            StaffMember::attendant("Anna").commuting_with("Beatrice"),
            StaffMember::attendant("Beatrice").commuting_with("Carla"),
            StaffMember::attendant("Carla").commuting(),
        ];
        let groups = carpool_groups(&staff, &[]);

        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["Anna", "Beatrice", "Carla"]);
    }

    #[test]
    fn test_non_commuters_excluded() {
        let staff = vec![
            StaffMember::attendant("Anna").commuting(),
            StaffMember::attendant("Beatrice"),
        ];
        let groups = carpool_groups(&staff, &[]);

        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["Anna"]);
    }

    #[test]
    fn test_absent_companion_rides_alone_no_more() {
        let staff = vec![
            StaffMember::attendant("Anna").commuting_with("Beatrice"),
            StaffMember::attendant("Beatrice").commuting(),
        ];
        let groups = carpool_groups(&staff, &["Beatrice".to_string()]);

        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["Anna"]);
    }

    #[test]
    fn test_dangling_link_ignored() {
        let staff = vec![StaffMember::attendant("Anna").commuting_with("Ghost")];
        let groups = carpool_groups(&staff, &[]);

        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["Anna"]);
    }
}
