use std::path::Path;

use anyhow::{Result, bail};
use cohort_core::{ClassConfig, Member, validation};
use cohort_grouping::Partition;
use tracing::info;

use super::{format_report, load_members};

/// Validate the inputs, then run the grouping engine over them.
pub fn build_groups(config_path: &Path, members_path: &Path) -> Result<Partition<Member>> {
    let config = ClassConfig::from_file(config_path)?;
    let members = load_members(members_path)?;
    let group_config = config.group_config();

    let report = validation::validate_input(&config.class.name, &group_config, &members);
    if !report.is_valid() {
        eprintln!("{}", format_report(&report));
        bail!("refusing to group: input failed validation");
    }

    info!(class = %config.class.name, members = members.len(), "grouping class");
    Ok(cohort_grouping::partition_detailed(&members, &group_config))
}

pub fn group(config: &str, members: &str, format: &str) -> Result<()> {
    let partition = build_groups(Path::new(config), Path::new(members))?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&partition)?),
        "text" => println!("{}", format_partition(&partition)),
        other => bail!("Unsupported format: {other}. Supported: text, json"),
    }

    Ok(())
}

pub fn format_partition(partition: &Partition<Member>) -> String {
    if partition.groups.is_empty() {
        return "No members to group".to_string();
    }

    let mut lines = Vec::new();
    for group in &partition.groups {
        lines.push(format!("{} ({} members)", group.name, group.len()));
        for member in &group.members {
            lines.push(format!(
                "  - {} [{}] {} / {}",
                member.name, member.id, member.sector, member.location
            ));
        }
    }

    if !partition.overflow.is_empty() {
        lines.push(format!(
            "⚠ {} member(s) placed beyond max group size: {}",
            partition.overflow.len(),
            partition.overflow.join(", ")
        ));
    }

    lines.join("\n")
}
