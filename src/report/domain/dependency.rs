use serde::{Deserialize, Serialize};

/// Dependency value object - one library's coordinates and version
///
/// `group`, `name` and `version` are required. The versions report also
/// carries a project URL and, for outdated entries, the newer versions on
/// offer; both are kept when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    group: String,
    name: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    available: Option<AvailableVersions>,
}

/// Newer versions published for an outdated dependency
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailableVersions {
    #[serde(default)]
    pub release: Option<String>,
    #[serde(default)]
    pub milestone: Option<String>,
    #[serde(default)]
    pub integration: Option<String>,
}

impl Dependency {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            project_url: None,
            available: None,
        }
    }

    pub fn with_project_url(mut self, project_url: impl Into<String>) -> Self {
        self.project_url = Some(project_url.into());
        self
    }

    pub fn with_available(mut self, available: AvailableVersions) -> Self {
        self.available = Some(available);
        self
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn project_url(&self) -> Option<&str> {
        self.project_url.as_deref()
    }

    pub fn available(&self) -> Option<&AvailableVersions> {
        self.available.as_ref()
    }

    /// Returns true if the group contains `namespace` anywhere
    pub fn is_in_namespace(&self, namespace: &str) -> bool {
        self.group.contains(namespace)
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
