use crate::descriptor::MojoDescriptor;
use crate::task::Task;
use reactor_core::{Error, PluginCoordinates, Project, Result};
use std::collections::HashMap;

/// Capability interface the planners use to turn goal references into
/// concrete mojo descriptors.
///
/// Implementations must be safe for concurrent read access; plan calculation
/// for different projects may run in parallel against one resolver.
pub trait PluginResolver: Send + Sync {
    /// Resolve a goal reference against a project.
    ///
    /// Resolving a `Task::Phase` is an error; phases are expanded by the
    /// execution-plan calculator, not resolved as mojos.
    fn resolve(&self, task: &Task, project: &Project) -> Result<MojoDescriptor>;
}

/// In-memory plugin registry.
///
/// Backs the resolver with prefix and coordinate lookups. Production
/// embedders populate it from downloaded plugin descriptors; tests populate
/// it directly.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    /// prefix -> plugin key (groupId:artifactId)
    prefixes: HashMap<String, String>,
    /// plugin key -> pinned version
    versions: HashMap<String, String>,
    /// (plugin key, goal) -> descriptor
    mojos: HashMap<(String, String), MojoDescriptor>,
}

impl PluginRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin under a prefix together with its goal descriptors.
    ///
    /// The plugin coordinates' version, when present, becomes the pinned
    /// version used for references that do not carry one.
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        plugin: PluginCoordinates,
        descriptors: Vec<MojoDescriptor>,
    ) {
        let key = plugin.key();
        self.prefixes.insert(prefix.into(), key.clone());
        if let Some(version) = &plugin.version {
            self.versions.insert(key.clone(), version.clone());
        }
        for descriptor in descriptors {
            self.mojos
                .insert((key.clone(), descriptor.goal.clone()), descriptor);
        }
    }

    fn lookup_goal(&self, key: &str, goal: &str, version: String) -> Result<MojoDescriptor> {
        let descriptor = self
            .mojos
            .get(&(key.to_string(), goal.to_string()))
            .ok_or_else(|| Error::mojo_not_found(goal, key))?;
        let mut descriptor = descriptor.clone();
        descriptor.plugin.version = Some(version);
        Ok(descriptor)
    }

    fn pinned_version(&self, key: &str, project: &Project) -> Option<String> {
        if let Some(version) = self.versions.get(key) {
            return Some(version.clone());
        }
        // Fall back to a version declared in the project's own build section
        project
            .plugins()
            .iter()
            .find(|binding| binding.plugin.key() == key)
            .and_then(|binding| binding.plugin.version.clone())
    }
}

impl PluginResolver for PluginRegistry {
    fn resolve(&self, task: &Task, project: &Project) -> Result<MojoDescriptor> {
        match task {
            Task::Phase { name } => Err(Error::invalid_task(
                name,
                "a lifecycle phase cannot be resolved as a plugin goal",
            )),
            Task::PrefixedGoal { prefix, goal } => {
                let key = self
                    .prefixes
                    .get(prefix)
                    .ok_or_else(|| Error::no_plugin_for_prefix(prefix.as_str()))?;
                let version = self
                    .pinned_version(key, project)
                    .ok_or_else(|| Error::version_unresolvable(key.as_str()))?;
                self.lookup_goal(key, goal, version)
            }
            Task::QualifiedGoal {
                group_id,
                artifact_id,
                version,
                goal,
            } => {
                let key = format!("{group_id}:{artifact_id}");
                if !self.mojos.keys().any(|(k, _)| k == &key) {
                    return Err(Error::plugin_not_found(key.as_str()));
                }
                let version = match version {
                    Some(version) => version.clone(),
                    None => self
                        .pinned_version(&key, project)
                        .ok_or_else(|| Error::version_unresolvable(key.as_str()))?,
                };
                self.lookup_goal(&key, goal, version)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::parse_task;
    use reactor_core::{Packaging, PluginBinding, ProjectCoordinates};

    fn registry() -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        let plugin = PluginCoordinates::with_version("org.example", "greeter-plugin", "1.4");
        registry.register(
            "greeter",
            plugin.clone(),
            vec![
                MojoDescriptor::new(plugin.clone(), "greet").with_phase("validate"),
                MojoDescriptor::new(plugin, "shout").aggregating(),
            ],
        );
        registry
    }

    fn project() -> Project {
        Project::new(
            ProjectCoordinates::new("org.example", "app", "1.0"),
            Packaging::from("jar"),
        )
    }

    #[test]
    fn prefixed_goal_resolves_with_pinned_version() {
        let descriptor = registry()
            .resolve(&parse_task("greeter:greet").unwrap(), &project())
            .unwrap();
        assert_eq!(descriptor.goal, "greet");
        assert_eq!(descriptor.plugin.version.as_deref(), Some("1.4"));
        assert_eq!(descriptor.phase.as_deref(), Some("validate"));
        assert!(!descriptor.aggregating);
    }

    #[test]
    fn qualified_goal_version_overrides_pinned() {
        let descriptor = registry()
            .resolve(
                &parse_task("org.example:greeter-plugin:2.0:shout").unwrap(),
                &project(),
            )
            .unwrap();
        assert_eq!(descriptor.plugin.version.as_deref(), Some("2.0"));
        assert!(descriptor.aggregating);
    }

    #[test]
    fn unknown_prefix_plugin_and_goal_raise_distinct_errors() {
        let registry = registry();
        let project = project();

        assert!(matches!(
            registry.resolve(&parse_task("mystery:greet").unwrap(), &project),
            Err(Error::NoPluginFoundForPrefix { .. })
        ));
        assert!(matches!(
            registry.resolve(&parse_task("org.example:missing-plugin:run").unwrap(), &project),
            Err(Error::PluginNotFound { .. })
        ));
        assert!(matches!(
            registry.resolve(&parse_task("greeter:vanish").unwrap(), &project),
            Err(Error::MojoNotFound { .. })
        ));
    }

    #[test]
    fn unpinned_version_falls_back_to_project_build_section() {
        let mut registry = PluginRegistry::new();
        let plugin = PluginCoordinates::new("org.example", "greeter-plugin");
        registry.register(
            "greeter",
            plugin.clone(),
            vec![MojoDescriptor::new(plugin, "greet")],
        );

        let task = parse_task("greeter:greet").unwrap();
        assert!(matches!(
            registry.resolve(&task, &project()),
            Err(Error::PluginVersionUnresolvable { .. })
        ));

        let project = project().with_plugin(PluginBinding {
            plugin: PluginCoordinates::with_version("org.example", "greeter-plugin", "3.3"),
            executions: Vec::new(),
        });
        let descriptor = registry.resolve(&task, &project).unwrap();
        assert_eq!(descriptor.plugin.version.as_deref(), Some("3.3"));
    }

    #[test]
    fn phases_are_not_resolvable() {
        assert!(matches!(
            registry().resolve(&parse_task("verify").unwrap(), &project()),
            Err(Error::InvalidTask { .. })
        ));
    }
}
