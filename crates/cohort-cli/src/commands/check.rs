use std::path::Path;

use anyhow::{Result, bail};
use cohort_core::{ClassConfig, ValidationReport, validation};

use super::{format_report, load_edits, load_members};

/// Check edited groups against the class size bounds and its roster.
pub fn check_files(config_path: &Path, members_path: &Path, groups_path: &Path) -> Result<ValidationReport> {
    let config = ClassConfig::from_file(config_path)?;
    let roster = load_members(members_path)?;
    let edits = load_edits(groups_path)?;

    Ok(validation::validate_group_update(
        &edits,
        &config.group_config(),
        &roster,
    ))
}

pub fn check(config: &str, members: &str, groups: &str) -> Result<()> {
    let report = check_files(Path::new(config), Path::new(members), Path::new(groups))?;
    println!("{}", format_report(&report));
    if !report.is_valid() {
        bail!("{} group edit(s) rejected", report.errors.len());
    }
    Ok(())
}
