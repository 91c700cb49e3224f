use std::path::Path;

use anyhow::{Result, bail};
use cohort_core::{ClassConfig, ValidationReport, validation};

use super::{format_report, load_members};

/// Load the class config and roster and run every input check on them.
pub fn validate_files(config_path: &Path, members_path: &Path) -> Result<ValidationReport> {
    let config = ClassConfig::from_file(config_path)?;
    let members = load_members(members_path)?;
    Ok(validation::validate_input(
        &config.class.name,
        &config.group_config(),
        &members,
    ))
}

pub fn validate(config: &str, members: &str) -> Result<()> {
    let report = validate_files(Path::new(config), Path::new(members))?;
    println!("{}", format_report(&report));
    if !report.is_valid() {
        bail!("validation failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_config_and_member_problems_together() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("class.toml");
        let members = dir.path().join("members.json");
        std::fs::write(
            &config,
            "[class]\nname = \"c\"\n\n[grouping]\nmax_groups = 2\nmin_group_size = 4\nmax_group_size = 3\n",
        )
        .unwrap();
        std::fs::write(
            &members,
            r#"[{"id":"a","name":"A","sector":"","location":"Accra"}]"#,
        )
        .unwrap();

        let report = validate_files(&config, &members).unwrap();
        assert_eq!(report.errors.len(), 2);
        assert!(validate(config.to_str().unwrap(), members.to_str().unwrap()).is_err());
    }
}
