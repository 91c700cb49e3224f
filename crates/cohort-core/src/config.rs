//! class.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::GroupConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassConfig {
    pub class: ClassSection,
    pub grouping: GroupingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingSection {
    pub max_groups: usize,
    pub min_group_size: usize,
    pub max_group_size: usize,
}

impl ClassConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Scaffold a class.toml with the default size bounds.
    pub fn scaffold(name: &str) -> Self {
        ClassConfig {
            class: ClassSection {
                name: name.to_string(),
                description: None,
            },
            grouping: GroupingSection {
                max_groups: 10,
                min_group_size: 3,
                max_group_size: 6,
            },
        }
    }

    pub fn group_config(&self) -> GroupConfig {
        GroupConfig {
            max_groups: self.grouping.max_groups,
            min_group_size: self.grouping.min_group_size,
            max_group_size: self.grouping.max_group_size,
        }
    }
}
