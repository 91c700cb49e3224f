//! Bin-packing of subgroups into groups, followed by the rebalance pass.
//!
//! Groups live in an arena indexed by creation position. Whole subgroups
//! are packed first-fit (largest subgroup first). Once the group budget is
//! spent, the members of a subgroup that fits nowhere are handed out one at
//! a time to the currently smallest group.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use cohort_core::{GroupConfig, Grouped};
use tracing::{debug, warn};

/// Pack subgroups into at most `max_groups` groups, then fold undersized
/// groups into the rest.
pub fn pack<'a, M: Grouped>(mut subgroups: Vec<Vec<&'a M>>, config: &GroupConfig) -> Vec<Vec<&'a M>> {
    // Stable: equal-sized subgroups keep their bucketing order.
    subgroups.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut groups: Vec<Vec<&M>> = Vec::new();

    for subgroup in subgroups {
        if groups.is_empty() {
            groups.push(subgroup);
            continue;
        }

        if let Some(target) = groups
            .iter_mut()
            .find(|g| g.len() + subgroup.len() <= config.max_group_size)
        {
            target.extend(subgroup);
            continue;
        }

        if groups.len() < config.max_groups {
            debug!(group = groups.len() + 1, size = subgroup.len(), "opened group");
            groups.push(subgroup);
        } else {
            debug!(
                size = subgroup.len(),
                "group budget spent, distributing subgroup members"
            );
            distribute(subgroup, &mut groups, config.max_group_size);
        }
    }

    rebalance(groups, config)
}

/// Fold groups below `min_group_size` into the groups that meet it.
///
/// If no group meets the minimum, every member ends up in one group.
pub fn rebalance<'a, M: Grouped>(groups: Vec<Vec<&'a M>>, config: &GroupConfig) -> Vec<Vec<&'a M>> {
    let (mut valid, orphaned): (Vec<_>, Vec<_>) = groups
        .into_iter()
        .partition(|g| g.len() >= config.min_group_size);

    let orphans: Vec<&M> = orphaned.into_iter().flatten().collect();

    if valid.is_empty() {
        if orphans.is_empty() {
            return Vec::new();
        }
        debug!(
            members = orphans.len(),
            "no group reached the minimum size, falling back to one group"
        );
        return vec![orphans];
    }

    if !orphans.is_empty() {
        debug!(
            orphans = orphans.len(),
            groups = valid.len(),
            "redistributing orphans"
        );
        distribute(orphans, &mut valid, config.max_group_size);
    }

    valid.retain(|g| !g.is_empty());
    valid
}

/// Hand members out one at a time, each to the currently smallest group.
///
/// Ties go to the group created first. When every group is already at
/// `max_group_size` the member still goes to the smallest group, so no
/// member is ever dropped.
pub fn distribute<'a, M: Grouped>(members: Vec<&'a M>, arena: &mut [Vec<&'a M>], max_group_size: usize) {
    let mut by_size: BinaryHeap<Reverse<(usize, usize)>> = arena
        .iter()
        .enumerate()
        .map(|(slot, g)| Reverse((g.len(), slot)))
        .collect();

    for member in members {
        let Some(Reverse((len, slot))) = by_size.pop() else {
            warn!(member = member.member_id(), "no group to distribute into");
            return;
        };

        if len >= max_group_size {
            warn!(
                member = member.member_id(),
                group = slot + 1,
                size = len + 1,
                max_group_size,
                "every group is full, exceeding max group size"
            );
        }

        arena[slot].push(member);
        by_size.push(Reverse((len + 1, slot)));
    }
}
