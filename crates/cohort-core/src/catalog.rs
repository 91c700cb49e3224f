//! Autocomplete catalog of sectors and locations already registered in a class.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::Member;

/// Distinct sector and location values, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub sectors: Vec<String>,
    pub locations: Vec<String>,
}

impl Catalog {
    /// Distinct values are compared exactly as stored, so `Tech` and
    /// `tech` are both offered.
    pub fn from_members(members: &[Member]) -> Self {
        let sectors: BTreeSet<&str> = members.iter().map(|m| m.sector.as_str()).collect();
        let locations: BTreeSet<&str> = members.iter().map(|m| m.location.as_str()).collect();

        Catalog {
            sectors: sectors.into_iter().map(str::to_string).collect(),
            locations: locations.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn suggest_sectors(&self, query: &str) -> Vec<&str> {
        suggest(&self.sectors, query)
    }

    pub fn suggest_locations(&self, query: &str) -> Vec<&str> {
        suggest(&self.locations, query)
    }
}

/// Case-insensitive substring match, so `accra` also finds `Greater Accra`.
fn suggest<'a>(values: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    values
        .iter()
        .filter(|v| v.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
