//! Input validation for classes, member registrations, and manual group edits.
//!
//! The grouping engine trusts its inputs. Everything that reaches it is
//! expected to have passed through these checks first. Each check collects
//! every problem it finds instead of stopping at the first one, so a caller
//! can report them all at once.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::{GroupConfig, Member};

const MAX_CLASS_NAME_LEN: usize = 100;
const MAX_GROUPS_LIMIT: usize = 100;
const MAX_MEMBER_NAME_LEN: usize = 100;
const MAX_LOCATION_LEN: usize = 100;
const MAX_SECTOR_LEN: usize = 50;
const MAX_NOTES_LEN: usize = 500;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be {max} characters or less")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be a positive integer")]
    NotPositive { field: &'static str },

    #[error("max groups cannot exceed 100")]
    TooManyGroups,

    #[error("max group size must be greater than or equal to min group size")]
    SizeBoundsInverted,

    #[error("duplicate member id: {0}")]
    DuplicateMember(String),

    #[error("member {id}: {source}")]
    Member {
        id: String,
        #[source]
        source: Box<ValidationError>,
    },

    #[error("each group must have a valid id")]
    MissingGroupId,

    #[error("group {0} must have a name")]
    MissingGroupName(String),

    #[error("group \"{name}\" has {count} members, minimum is {min}")]
    GroupTooSmall { name: String, count: usize, min: usize },

    #[error("group \"{name}\" has {count} members, maximum is {max}")]
    GroupTooLarge { name: String, count: usize, max: usize },

    #[error("group \"{group}\" lists {id}, which is not a member of this class")]
    UnknownMember { group: String, id: String },

    #[error("member {id} in group \"{group}\" is already assigned to group \"{assigned_to}\"")]
    AlreadyAssigned {
        id: String,
        group: String,
        assigned_to: String,
    },
}

/// All failures found by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, err: ValidationError) {
        self.errors.push(err);
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }
}

/// A manually edited group as submitted by an organiser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEdit {
    pub id: String,
    pub name: String,
    pub member_ids: Vec<String>,
}

fn check_text(
    report: &mut ValidationReport,
    field: &'static str,
    value: &str,
    max: usize,
) {
    if value.trim().is_empty() {
        report.push(ValidationError::Required { field });
    } else if value.chars().count() > max {
        report.push(ValidationError::TooLong { field, max });
    }
}

/// Check a class name and its grouping constraints.
pub fn validate_class(name: &str, config: &GroupConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_text(&mut report, "class name", name, MAX_CLASS_NAME_LEN);

    if config.max_groups < 1 {
        report.push(ValidationError::NotPositive { field: "max groups" });
    } else if config.max_groups > MAX_GROUPS_LIMIT {
        report.push(ValidationError::TooManyGroups);
    }

    if config.min_group_size < 1 {
        report.push(ValidationError::NotPositive { field: "min group size" });
    }
    if config.max_group_size < 1 {
        report.push(ValidationError::NotPositive { field: "max group size" });
    }
    if config.max_group_size < config.min_group_size {
        report.push(ValidationError::SizeBoundsInverted);
    }

    report
}

/// Check a single member registration.
pub fn validate_member(member: &Member) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_text(&mut report, "name", &member.name, MAX_MEMBER_NAME_LEN);
    check_text(&mut report, "location", &member.location, MAX_LOCATION_LEN);
    check_text(&mut report, "sector", &member.sector, MAX_SECTOR_LEN);

    if let Some(notes) = &member.notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            report.push(ValidationError::TooLong {
                field: "notes",
                max: MAX_NOTES_LEN,
            });
        }
    }

    report
}

/// Check a whole member list, tagging each failure with its member id.
pub fn validate_members(members: &[Member]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for member in members {
        if member.id.trim().is_empty() {
            report.push(ValidationError::Required { field: "member id" });
        } else if !seen.insert(member.id.as_str()) {
            report.push(ValidationError::DuplicateMember(member.id.clone()));
        }

        for err in validate_member(member).errors {
            report.push(ValidationError::Member {
                id: member.id.clone(),
                source: Box::new(err),
            });
        }
    }

    debug!(
        members = members.len(),
        errors = report.errors.len(),
        "validated member list"
    );
    report
}

/// Check manually edited groups against the class size bounds and roster.
///
/// Every listed id must belong to `roster`, and no member may be listed
/// more than once across all edits.
pub fn validate_group_update(
    edits: &[GroupEdit],
    config: &GroupConfig,
    roster: &[Member],
) -> ValidationReport {
    let mut report = ValidationReport::default();
    let known: HashSet<&str> = roster.iter().map(|m| m.id.as_str()).collect();
    let mut assigned: HashMap<&str, &str> = HashMap::new();

    for edit in edits {
        let label = if edit.id.trim().is_empty() {
            report.push(ValidationError::MissingGroupId);
            "unknown".to_string()
        } else {
            edit.id.clone()
        };

        if edit.name.trim().is_empty() {
            report.push(ValidationError::MissingGroupName(label));
        }

        let count = edit.member_ids.len();
        if count < config.min_group_size {
            report.push(ValidationError::GroupTooSmall {
                name: edit.name.clone(),
                count,
                min: config.min_group_size,
            });
        }
        if count > config.max_group_size {
            report.push(ValidationError::GroupTooLarge {
                name: edit.name.clone(),
                count,
                max: config.max_group_size,
            });
        }

        for id in &edit.member_ids {
            if !known.contains(id.as_str()) {
                report.push(ValidationError::UnknownMember {
                    group: edit.name.clone(),
                    id: id.clone(),
                });
            } else if let Some(first) = assigned.get(id.as_str()) {
                report.push(ValidationError::AlreadyAssigned {
                    id: id.clone(),
                    group: edit.name.clone(),
                    assigned_to: first.to_string(),
                });
            } else {
                assigned.insert(id.as_str(), edit.name.as_str());
            }
        }
    }

    debug!(
        groups = edits.len(),
        errors = report.errors.len(),
        "validated group edits"
    );
    report
}

/// Validate the class config and the member list in one pass.
pub fn validate_input(class_name: &str, config: &GroupConfig, members: &[Member]) -> ValidationReport {
    let mut report = validate_class(class_name, config);
    report.merge(validate_members(members));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_groups: usize, min: usize, max: usize) -> GroupConfig {
        GroupConfig {
            max_groups,
            min_group_size: min,
            max_group_size: max,
        }
    }

    fn roster<S: AsRef<str>>(ids: &[S]) -> Vec<Member> {
        ids.iter()
            .map(|id| Member::new(id.as_ref(), "n", "Tech", "Accra"))
            .collect()
    }

    fn edit(id: &str, name: &str, member_ids: &[&str]) -> GroupEdit {
        GroupEdit {
            id: id.to_string(),
            name: name.to_string(),
            member_ids: member_ids.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn accepts_sane_class() {
        assert!(validate_class("Cohort A", &config(10, 3, 6)).is_valid());
    }

    #[test]
    fn rejects_blank_and_long_class_names() {
        let blank = validate_class("   ", &config(10, 3, 6));
        assert_eq!(
            blank.errors,
            vec![ValidationError::Required { field: "class name" }]
        );

        let long = validate_class(&"x".repeat(101), &config(10, 3, 6));
        assert_eq!(
            long.errors,
            vec![ValidationError::TooLong {
                field: "class name",
                max: 100
            }]
        );
    }

    #[test]
    fn rejects_zero_bounds_and_inversion() {
        let report = validate_class("c", &config(0, 0, 0));
        assert_eq!(report.errors.len(), 3);

        let inverted = validate_class("c", &config(5, 6, 3));
        assert_eq!(inverted.errors, vec![ValidationError::SizeBoundsInverted]);
    }

    #[test]
    fn rejects_too_many_groups() {
        let report = validate_class("c", &config(101, 1, 2));
        assert_eq!(report.errors, vec![ValidationError::TooManyGroups]);
        assert_eq!(report.errors[0].to_string(), "max groups cannot exceed 100");
    }

    #[test]
    fn member_field_limits() {
        let mut member = Member::new("m1", "Ama", "Tech", "Accra");
        assert!(validate_member(&member).is_valid());

        member.sector = "s".repeat(51);
        member.location = " ".to_string();
        member.notes = Some("n".repeat(501));
        let report = validate_member(&member);
        assert_eq!(
            report.errors,
            vec![
                ValidationError::Required { field: "location" },
                ValidationError::TooLong {
                    field: "sector",
                    max: 50
                },
                ValidationError::TooLong {
                    field: "notes",
                    max: 500
                },
            ]
        );
    }

    #[test]
    fn duplicate_member_ids_are_reported() {
        let members = vec![
            Member::new("m1", "Ama", "Tech", "Accra"),
            Member::new("m1", "Kofi", "Tech", "Accra"),
        ];
        let report = validate_members(&members);
        assert_eq!(
            report.errors,
            vec![ValidationError::DuplicateMember("m1".to_string())]
        );
    }

    #[test]
    fn member_errors_carry_the_id() {
        let members = vec![Member::new("m7", "", "Tech", "Accra")];
        let report = validate_members(&members);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].to_string(), "member m7: name is required");
    }

    #[test]
    fn group_update_size_bounds() {
        let edits = vec![
            GroupEdit {
                id: "g1".to_string(),
                name: "Group 1".to_string(),
                member_ids: vec!["a".to_string(), "b".to_string()],
            },
            GroupEdit {
                id: "g2".to_string(),
                name: "Group 2".to_string(),
                member_ids: (0..7).map(|i| format!("m{i}")).collect(),
            },
            GroupEdit {
                id: "g3".to_string(),
                name: "Group 3".to_string(),
                member_ids: (0..4).map(|i| format!("x{i}")).collect(),
            },
        ];
        let ids: Vec<String> = edits.iter().flat_map(|e| e.member_ids.clone()).collect();
        let report = validate_group_update(&edits, &config(10, 3, 6), &roster(&ids));
        let messages: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "group \"Group 1\" has 2 members, minimum is 3",
                "group \"Group 2\" has 7 members, maximum is 6",
            ]
        );
    }

    #[test]
    fn group_update_missing_id_and_name() {
        let edits = vec![GroupEdit {
            id: String::new(),
            name: " ".to_string(),
            member_ids: vec!["a".to_string()],
        }];
        let report = validate_group_update(&edits, &config(10, 1, 6), &roster(&["a"]));
        assert_eq!(
            report.errors,
            vec![
                ValidationError::MissingGroupId,
                ValidationError::MissingGroupName("unknown".to_string()),
            ]
        );
    }

    #[test]
    fn group_update_accepts_disjoint_known_members() {
        let edits = vec![edit("g1", "Group 1", &["a", "b"]), edit("g2", "Group 2", &["c"])];
        let report = validate_group_update(&edits, &config(10, 1, 5), &roster(&["a", "b", "c", "d"]));
        assert!(report.is_valid());
    }

    #[test]
    fn group_update_rejects_unknown_member() {
        let edits = vec![edit("g1", "Group 1", &["a", "ghost"])];
        let report = validate_group_update(&edits, &config(10, 1, 5), &roster(&["a"]));
        assert_eq!(
            report.errors,
            vec![ValidationError::UnknownMember {
                group: "Group 1".to_string(),
                id: "ghost".to_string(),
            }]
        );
        assert_eq!(
            report.errors[0].to_string(),
            "group \"Group 1\" lists ghost, which is not a member of this class"
        );
    }

    #[test]
    fn group_update_rejects_member_in_two_groups() {
        let edits = vec![
            edit("g1", "Group 1", &["a", "b"]),
            edit("g2", "Group 2", &["a", "zzz"]),
        ];
        let report = validate_group_update(&edits, &config(10, 1, 5), &roster(&["a", "b"]));
        assert_eq!(
            report.errors,
            vec![
                ValidationError::AlreadyAssigned {
                    id: "a".to_string(),
                    group: "Group 2".to_string(),
                    assigned_to: "Group 1".to_string(),
                },
                ValidationError::UnknownMember {
                    group: "Group 2".to_string(),
                    id: "zzz".to_string(),
                },
            ]
        );
    }

    #[test]
    fn group_update_rejects_member_listed_twice_in_one_group() {
        let edits = vec![edit("g1", "Group 1", &["a", "a"])];
        let report = validate_group_update(&edits, &config(10, 1, 5), &roster(&["a"]));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].to_string(),
            "member a in group \"Group 1\" is already assigned to group \"Group 1\""
        );
    }

    #[test]
    fn validate_input_merges_reports() {
        let members = vec![Member::new("m1", "Ama", "", "Accra")];
        let report = validate_input("", &config(10, 3, 6), &members);
        assert_eq!(report.errors.len(), 2);
    }
}
