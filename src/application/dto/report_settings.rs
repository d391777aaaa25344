use crate::config::ConfigFile;

/// Report resource loaded when nothing else is configured
pub const DEFAULT_REPORT_FILE: &str = "report.json";

/// Query selecting the current dependency list
pub const DEFAULT_CURRENT_QUERY: &str = "$.current.dependencies";

/// Query selecting the outdated dependency list
pub const DEFAULT_OUTDATED_QUERY: &str = "$.outdated.dependencies";

/// ReportSettings - what to load and where to look inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Resource name of the report on the resource path
    pub report_file: String,
    /// Query path selecting the current dependencies
    pub current_query: String,
    /// Query path selecting the outdated dependencies
    pub outdated_query: String,
}

impl ReportSettings {
    pub fn new(
        report_file: impl Into<String>,
        current_query: impl Into<String>,
        outdated_query: impl Into<String>,
    ) -> Self {
        Self {
            report_file: report_file.into(),
            current_query: current_query.into(),
            outdated_query: outdated_query.into(),
        }
    }

    /// Overlays the values set in a configuration file on the defaults
    ///
    /// Configured values are trimmed of surrounding whitespace.
    pub fn from_config(config: &ConfigFile) -> Self {
        let section = &config.fint.dependencies;
        let defaults = Self::default();
        let trimmed = |value: Option<&str>, default: String| {
            value.map(|v| v.trim().to_string()).unwrap_or(default)
        };
        Self {
            report_file: trimmed(section.report_file.as_deref(), defaults.report_file),
            current_query: trimmed(section.json_path_current.as_deref(), defaults.current_query),
            outdated_query: trimmed(section.outdated_query(), defaults.outdated_query),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self::new(
            DEFAULT_REPORT_FILE,
            DEFAULT_CURRENT_QUERY,
            DEFAULT_OUTDATED_QUERY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DependenciesSection, FintSection, JsonPathSection};

    fn config_with(dependencies: DependenciesSection) -> ConfigFile {
        ConfigFile {
            fint: FintSection { dependencies },
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = ReportSettings::default();
        assert_eq!(settings.report_file, "report.json");
        assert_eq!(settings.current_query, "$.current.dependencies");
        assert_eq!(settings.outdated_query, "$.outdated.dependencies");
    }

    #[test]
    fn test_from_empty_config_uses_defaults() {
        let settings = ReportSettings::from_config(&ConfigFile::default());
        assert_eq!(settings, ReportSettings::default());
    }

    #[test]
    fn test_from_config_overrides_set_values_only() {
        let config = ConfigFile {
            fint: FintSection {
                dependencies: DependenciesSection {
                    report_file: Some("versions.json".to_string()),
                    json_path_outdated: Some("$.stale".to_string()),
                    ..Default::default()
                },
            },
        };

        let settings = ReportSettings::from_config(&config);
        assert_eq!(settings.report_file, "versions.json");
        assert_eq!(settings.current_query, DEFAULT_CURRENT_QUERY);
        assert_eq!(settings.outdated_query, "$.stale");
    }

    #[test]
    fn test_from_config_trims_values() {
        let config = config_with(DependenciesSection {
            report_file: Some(" report.json ".to_string()),
            json_path_current: Some("  $.current.dependencies".to_string()),
            ..Default::default()
        });

        let settings = ReportSettings::from_config(&config);
        assert_eq!(settings.report_file, "report.json");
        assert_eq!(settings.current_query, "$.current.dependencies");
    }

    #[test]
    fn test_from_config_nested_outdated_query() {
        let config = config_with(DependenciesSection {
            json_path: Some(JsonPathSection {
                outdated: Some("$.stale".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        let settings = ReportSettings::from_config(&config);
        assert_eq!(settings.outdated_query, "$.stale");
    }
}
