use reactor_core::PluginCoordinates;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Descriptor of one plugin goal implementation.
///
/// Carries the metadata the planners need: the phase the goal binds itself
/// to by default, whether it must run once against the whole reactor, and
/// the dependency scopes its execution requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MojoDescriptor {
    /// Plugin this goal belongs to, version pinned by resolution
    pub plugin: PluginCoordinates,
    /// Goal name within the plugin
    pub goal: String,
    /// Default lifecycle phase this goal binds to, if it declares one
    pub phase: Option<String>,
    /// Whether the goal runs once against the whole reactor
    pub aggregating: bool,
    /// Dependency scope required on the resolved classpath, if any
    pub requires_dependency_resolution: Option<String>,
    /// Dependency scope required for dependency collection, if any
    pub requires_dependency_collection: Option<String>,
    /// Default configuration payload from the plugin descriptor
    pub default_configuration: Option<Value>,
}

impl MojoDescriptor {
    /// Create a descriptor with no phase binding and no scope requirements
    #[must_use]
    pub fn new(plugin: PluginCoordinates, goal: impl Into<String>) -> Self {
        Self {
            plugin,
            goal: goal.into(),
            phase: None,
            aggregating: false,
            requires_dependency_resolution: None,
            requires_dependency_collection: None,
            default_configuration: None,
        }
    }

    /// Set the default phase binding
    #[must_use]
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// Mark the goal as aggregating (runs once against the whole reactor)
    #[must_use]
    pub fn aggregating(mut self) -> Self {
        self.aggregating = true;
        self
    }

    /// Set the required dependency resolution scope
    #[must_use]
    pub fn with_dependency_resolution(mut self, scope: impl Into<String>) -> Self {
        self.requires_dependency_resolution = Some(scope.into());
        self
    }

    /// Set the required dependency collection scope
    #[must_use]
    pub fn with_dependency_collection(mut self, scope: impl Into<String>) -> Self {
        self.requires_dependency_collection = Some(scope.into());
        self
    }

    /// Set the default configuration payload
    #[must_use]
    pub fn with_configuration(mut self, configuration: Value) -> Self {
        self.default_configuration = Some(configuration);
        self
    }

    /// Fully qualified goal identifier (groupId:artifactId:goal)
    #[must_use]
    pub fn qualified_goal(&self) -> String {
        format!("{}:{}", self.plugin.key(), self.goal)
    }
}
