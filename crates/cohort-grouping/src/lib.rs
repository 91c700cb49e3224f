//! Cohort grouping engine: sector/location bucketing and bin-packing.
//!
//! Splits the members of one class into balanced, named groups. Members
//! sharing a sector are kept together first, then members sharing a
//! location within that sector. The engine is a pure function: it performs
//! no I/O, trusts its [`GroupConfig`] (validate it with
//! `cohort_core::validation` first), and is deterministic for a given input
//! order.
//!
//! # Pipeline
//!
//! ```text
//! members
//!   ├── bucket::by_sector     (trim + lowercase, first-seen order)
//!   ├── bucket::by_location   (per sector, first-seen order)
//!   ├── packer::pack          (largest subgroup first, first-fit)
//!   ├── packer::rebalance     (fold undersized groups into the rest)
//!   └── naming                ("Group 1", "Group 2", ...)
//! ```

pub mod bucket;
pub mod packer;

use serde::Serialize;
use tracing::{info, warn};

use cohort_core::{Group, GroupConfig, Grouped, MemberId, group_name};

/// Result of a grouping run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition<M> {
    pub groups: Vec<Group<M>>,
    /// Members at positions past `max_group_size` in their final group.
    ///
    /// Covers members forced into a full group (overflow distribution or
    /// orphan rebalancing), and also the tail of a first subgroup that was
    /// larger than `max_group_size` on its own, since subgroups are never
    /// split when opening a group. The one-group fallbacks are measured the
    /// same way. Empty for any input that fits the constraints.
    pub overflow: Vec<MemberId>,
}

/// Split `members` into named groups. See [`partition_detailed`].
pub fn partition<M: Grouped + Clone>(members: &[M], config: &GroupConfig) -> Vec<Group<M>> {
    partition_detailed(members, config).groups
}

/// Split `members` into named groups and report any capacity overflow.
///
/// Every member appears in exactly one group. A class smaller than
/// `min_group_size` comes back as a single group in input order.
pub fn partition_detailed<M: Grouped + Clone>(members: &[M], config: &GroupConfig) -> Partition<M> {
    if members.is_empty() {
        return Partition {
            groups: Vec::new(),
            overflow: Vec::new(),
        };
    }

    let packed: Vec<Vec<&M>> = if members.len() < config.min_group_size {
        info!(
            members = members.len(),
            min_group_size = config.min_group_size,
            "class below minimum group size, keeping one group"
        );
        vec![members.iter().collect()]
    } else {
        packer::pack(bucket::subgroups(members), config)
    };

    let overflow: Vec<MemberId> = packed
        .iter()
        .flat_map(|g| g.iter().skip(config.max_group_size))
        .map(|m| m.member_id().to_string())
        .collect();

    if !overflow.is_empty() {
        warn!(
            members = overflow.len(),
            max_group_size = config.max_group_size,
            "groups exceed max group size"
        );
    }

    let groups: Vec<Group<M>> = packed
        .into_iter()
        .enumerate()
        .map(|(position, members)| Group {
            name: group_name(position),
            members: members.into_iter().cloned().collect(),
        })
        .collect();

    info!(
        members = members.len(),
        groups = groups.len(),
        "partitioned class"
    );

    Partition { groups, overflow }
}
