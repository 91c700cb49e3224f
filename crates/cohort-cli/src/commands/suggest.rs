use std::path::Path;

use anyhow::Result;
use cohort_core::Catalog;

use super::load_members;

pub fn suggest(members: &str, sector: Option<&str>, location: Option<&str>) -> Result<()> {
    let members = load_members(Path::new(members))?;
    let catalog = Catalog::from_members(&members);
    println!("{}", format_suggestions(&catalog, sector, location));
    Ok(())
}

/// Without any query both lists are shown in full.
pub fn format_suggestions(catalog: &Catalog, sector: Option<&str>, location: Option<&str>) -> String {
    let show_all = sector.is_none() && location.is_none();
    let mut sections = Vec::new();

    if show_all || sector.is_some() {
        let sectors = catalog.suggest_sectors(sector.unwrap_or_default());
        sections.push(format!("Sectors: {}", sectors.join(", ")));
    }
    if show_all || location.is_some() {
        let locations = catalog.suggest_locations(location.unwrap_or_default());
        sections.push(format!("Locations: {}", locations.join(", ")));
    }

    sections.join("\n")
}
