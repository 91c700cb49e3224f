//! Shared types used across the cohort crates.

use serde::{Deserialize, Serialize};

/// Unique identifier for a registered member.
pub type MemberId = String;

/// A registered participant of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Primary grouping key. Free text, original casing is preserved.
    pub sector: String,
    /// Secondary grouping key. Free text, original casing is preserved.
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Member {
    pub fn new(id: &str, name: &str, sector: &str, location: &str) -> Self {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            sector: sector.to_string(),
            location: location.to_string(),
            notes: None,
        }
    }
}

/// Size constraints for one grouping run.
///
/// Callers are expected to have checked these with
/// [`validate_class`](crate::validation::validate_class) first; the engine
/// itself does not re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub max_groups: usize,
    pub min_group_size: usize,
    pub max_group_size: usize,
}

/// Anything the grouping engine can place into a group.
pub trait Grouped {
    fn member_id(&self) -> &str;
    fn sector(&self) -> &str;
    fn location(&self) -> &str;
}

impl Grouped for Member {
    fn member_id(&self) -> &str {
        &self.id
    }

    fn sector(&self) -> &str {
        &self.sector
    }

    fn location(&self) -> &str {
        &self.location
    }
}

/// A named group produced by a grouping run.
///
/// Groups carry no storage identity; whoever persists them assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group<M> {
    pub name: String,
    pub members: Vec<M>,
}

impl<M> Group<M> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Positional display name: `Group 1`, `Group 2`, ...
pub fn group_name(position: usize) -> String {
    format!("Group {}", position + 1)
}
