//! Configuration file support for fint-dependencies.
//!
//! Provides YAML-based configuration through `fint-dependencies.config.yml`
//! files, including data structures, file loading, and validation. All
//! options live under `fint.dependencies`; other top-level keys are left to
//! the host application and ignored here.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::filesystem::DEFAULT_RESOURCE_DIR;
use crate::report::domain::QueryPath;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "fint-dependencies.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub fint: FintSection,
}

/// The `fint` section.
#[derive(Debug, Deserialize, Default)]
pub struct FintSection {
    #[serde(default)]
    pub dependencies: DependenciesSection,
}

/// The `fint.dependencies` section.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct DependenciesSection {
    pub report_file: Option<String>,
    pub json_path_current: Option<String>,
    pub json_path_outdated: Option<String>,
    /// Nested `json-path: { outdated: ... }` form of `json-path-outdated`.
    pub json_path: Option<JsonPathSection>,
    pub resource_dirs: Option<Vec<PathBuf>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The `fint.dependencies.json-path` section.
#[derive(Debug, Deserialize, Default)]
pub struct JsonPathSection {
    pub outdated: Option<String>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl DependenciesSection {
    /// Configured outdated query; `json-path-outdated` wins over `json-path.outdated`
    pub fn outdated_query(&self) -> Option<&str> {
        self.json_path_outdated.as_deref().or_else(|| {
            self.json_path
                .as_ref()
                .and_then(|nested| nested.outdated.as_deref())
        })
    }
}

impl ConfigFile {
    /// Resource directories to search, in order. Relative entries are
    /// resolved against the working directory.
    pub fn resource_dirs(&self) -> Vec<PathBuf> {
        self.fint
            .dependencies
            .resource_dirs
            .clone()
            .unwrap_or_else(|| vec![PathBuf::from(DEFAULT_RESOURCE_DIR)])
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document is a valid, empty configuration.
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let section = &config.fint.dependencies;
    let nested_outdated = section
        .json_path
        .as_ref()
        .and_then(|nested| nested.outdated.clone());

    let options = [
        ("report-file", &section.report_file),
        ("json-path-current", &section.json_path_current),
        ("json-path-outdated", &section.json_path_outdated),
        ("json-path.outdated", &nested_outdated),
    ];
    for (key, value) in options {
        if let Some(value) = value {
            if value.trim().is_empty() {
                bail!(
                    "Invalid config: fint.dependencies.{} must not be empty.\n\n\
                     💡 Hint: Remove the key to use the default value.",
                    key
                );
            }
        }
    }

    for (key, value) in [
        ("json-path-current", &section.json_path_current),
        ("json-path-outdated", &section.json_path_outdated),
        ("json-path.outdated", &nested_outdated),
    ] {
        if let Some(expression) = value {
            QueryPath::parse(expression).with_context(|| {
                format!(
                    "Invalid config: fint.dependencies.{}\n\n\
                     💡 Hint: Use a path such as \"$.current.dependencies\".",
                    key
                )
            })?;
        }
    }

    if let Some(ref dirs) = section.resource_dirs {
        if dirs.is_empty() {
            bail!(
                "Invalid config: fint.dependencies.resource-dirs must list at least one directory.\n\n\
                 💡 Hint: Remove the key to search the default \"{}\" directory.",
                DEFAULT_RESOURCE_DIR
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let section = &config.fint.dependencies;
    for key in section.unknown_fields.keys() {
        log::warn!(
            "Unknown config field 'fint.dependencies.{}' will be ignored.",
            key
        );
    }
    if let Some(ref nested) = section.json_path {
        for key in nested.unknown_fields.keys() {
            log::warn!(
                "Unknown config field 'fint.dependencies.json-path.{}' will be ignored.",
                key
            );
        }
    }
}
