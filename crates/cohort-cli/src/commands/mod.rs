pub mod check;
pub mod group;
pub mod init;
pub mod suggest;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use cohort_core::{GroupEdit, Member, ValidationReport};
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {what} in {}", path.display()))
}

pub fn load_members(path: &Path) -> Result<Vec<Member>> {
    read_json(path, "members")
}

pub fn load_edits(path: &Path) -> Result<Vec<GroupEdit>> {
    read_json(path, "group edits")
}

pub fn format_report(report: &ValidationReport) -> String {
    if report.is_valid() {
        return "✓ No problems found".to_string();
    }
    let mut out = format!("✗ {} problem(s):", report.errors.len());
    for err in &report.errors {
        out.push_str(&format!("\n  - {err}"));
    }
    out
}
