use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identity of a buildable project: groupId, artifactId, version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ProjectCoordinates {
    /// Create new project coordinates
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ProjectCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Identity of a plugin, with an optionally pinned version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
}

impl PluginCoordinates {
    /// Create plugin coordinates without a pinned version
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
        }
    }

    /// Create plugin coordinates with a pinned version
    #[must_use]
    pub fn with_version(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: Some(version.into()),
        }
    }

    /// Version-independent lookup key (groupId:artifactId)
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl fmt::Display for PluginCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{version}", self.group_id, self.artifact_id),
            None => write!(f, "{}:{}", self.group_id, self.artifact_id),
        }
    }
}

/// Type-safe wrapper for packaging types ("jar", "pom", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Packaging(String);

impl Packaging {
    /// Create a new packaging type
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the packaging as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Packaging {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Packaging {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Default for Packaging {
    fn default() -> Self {
        Self("jar".to_string())
    }
}

/// One configured execution of a plugin within a project's build section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginExecution {
    /// Execution identifier, unique within the plugin binding
    pub id: String,
    /// Lifecycle phase this execution is bound to, if any
    pub phase: Option<String>,
    /// Goals to run for this execution, in declaration order
    pub goals: Vec<String>,
    /// Execution-level configuration payload
    pub configuration: Option<Value>,
}

impl PluginExecution {
    /// Create an execution binding the given goals to a phase
    #[must_use]
    pub fn new(id: impl Into<String>, phase: impl Into<String>, goals: Vec<String>) -> Self {
        Self {
            id: id.into(),
            phase: Some(phase.into()),
            goals,
            configuration: None,
        }
    }
}

/// A plugin declared in a project's build configuration, with its executions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginBinding {
    pub plugin: PluginCoordinates,
    pub executions: Vec<PluginExecution>,
}

/// A buildable unit of the reactor.
///
/// Owned by the model-loading layer; the planning core only reads it. The
/// optional execution project is the variant used when resolving a concrete
/// execution plan (it may carry e.g. forked modifications).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    coordinates: ProjectCoordinates,
    packaging: Packaging,
    default_goal: Option<String>,
    plugins: Vec<PluginBinding>,
    execution_project: Option<Box<Project>>,
}

impl Project {
    /// Create a new project with the given identity and packaging
    #[must_use]
    pub fn new(coordinates: ProjectCoordinates, packaging: Packaging) -> Self {
        Self {
            coordinates,
            packaging,
            default_goal: None,
            plugins: Vec::new(),
            execution_project: None,
        }
    }

    /// Set the default goal string (whitespace-separated tokens)
    #[must_use]
    pub fn with_default_goal(mut self, default_goal: impl Into<String>) -> Self {
        self.default_goal = Some(default_goal.into());
        self
    }

    /// Declare a plugin with explicit executions in the build configuration
    #[must_use]
    pub fn with_plugin(mut self, binding: PluginBinding) -> Self {
        self.plugins.push(binding);
        self
    }

    /// Set the execution variant of this project
    #[must_use]
    pub fn with_execution_project(mut self, project: Project) -> Self {
        self.execution_project = Some(Box::new(project));
        self
    }

    /// Project identity
    #[must_use]
    pub fn coordinates(&self) -> &ProjectCoordinates {
        &self.coordinates
    }

    /// Packaging type
    #[must_use]
    pub fn packaging(&self) -> &Packaging {
        &self.packaging
    }

    /// Default goal string, if configured
    #[must_use]
    pub fn default_goal(&self) -> Option<&str> {
        self.default_goal.as_deref()
    }

    /// Plugins declared in the build configuration
    #[must_use]
    pub fn plugins(&self) -> &[PluginBinding] {
        &self.plugins
    }

    /// The variant used for execution-plan resolution; `self` if none is set
    #[must_use]
    pub fn execution_project(&self) -> &Project {
        self.execution_project.as_deref().unwrap_or(self)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinates)
    }
}
