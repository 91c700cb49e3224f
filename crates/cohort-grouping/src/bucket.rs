//! Sector and location bucketing.
//!
//! Members are bucketed by normalized sector, then each sector bucket is
//! split by normalized location. Buckets keep first-insertion order so the
//! same input always yields the same subgroup list.

use std::collections::HashMap;

use cohort_core::Grouped;
use tracing::debug;

/// Bucketing key for a free-text label. Only used for grouping decisions;
/// the member's own value is never rewritten.
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Buckets that iterate in the order their keys were first seen.
struct OrderedBuckets<T> {
    index: HashMap<String, usize>,
    buckets: Vec<Vec<T>>,
}

impl<T> OrderedBuckets<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    fn insert(&mut self, key: String, item: T) {
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].push(item),
            None => {
                self.index.insert(key, self.buckets.len());
                self.buckets.push(vec![item]);
            }
        }
    }

    fn into_buckets(self) -> Vec<Vec<T>> {
        self.buckets
    }
}

/// Bucket members by normalized sector, in first-seen order.
pub fn by_sector<M: Grouped>(members: &[M]) -> Vec<Vec<&M>> {
    let mut sectors = OrderedBuckets::new();
    for member in members {
        sectors.insert(normalize(member.sector()), member);
    }
    sectors.into_buckets()
}

/// Split one sector bucket by normalized location, in first-seen order.
pub fn by_location<'a, M: Grouped>(sector: Vec<&'a M>) -> Vec<Vec<&'a M>> {
    let mut locations = OrderedBuckets::new();
    for member in sector {
        locations.insert(normalize(member.location()), member);
    }
    locations.into_buckets()
}

/// Flat list of (sector, location) subgroups: sectors in first-seen order,
/// locations in first-seen order within each sector.
pub fn subgroups<M: Grouped>(members: &[M]) -> Vec<Vec<&M>> {
    let sectors = by_sector(members);
    let sector_count = sectors.len();

    let subgroups: Vec<Vec<&M>> = sectors.into_iter().flat_map(by_location).collect();

    debug!(
        sectors = sector_count,
        subgroups = subgroups.len(),
        "bucketed members"
    );
    subgroups
}
