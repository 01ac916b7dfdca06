use crate::lifecycle::Lifecycle;
use indexmap::IndexMap;
use reactor_core::{Error, Packaging, PluginCoordinates, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One goal a packaging type binds to a lifecycle phase by default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalBinding {
    pub plugin: PluginCoordinates,
    pub goal: String,
    /// Execution identifier distinguishing this binding from other bindings
    /// of the same goal ("default-compile", ...)
    pub execution_id: String,
}

impl GoalBinding {
    /// Create a binding with the conventional `default-<goal>` execution id
    #[must_use]
    pub fn new(plugin: PluginCoordinates, goal: impl Into<String>) -> Self {
        let goal = goal.into();
        Self {
            execution_id: format!("default-{goal}"),
            plugin,
            goal,
        }
    }
}

/// Ordered phase -> ordered goal bindings for one packaging type
pub type PackagingBindings = IndexMap<String, Vec<GoalBinding>>;

/// Registry of lifecycles and per-packaging default goal bindings.
///
/// Read-only during planning; safe for concurrent readers once constructed.
#[derive(Debug, Clone, Default)]
pub struct LifecycleRegistry {
    lifecycles: Vec<Lifecycle>,
    packaging_bindings: HashMap<String, PackagingBindings>,
}

impl LifecycleRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the conventional clean/default/site lifecycles
    /// and default bindings for the `jar` and `pom` packaging types.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register_lifecycle(Lifecycle::new(
            "clean",
            phases(&["pre-clean", "clean", "post-clean"]),
        ));
        registry.register_lifecycle(Lifecycle::new(
            "default",
            phases(&[
                "validate",
                "initialize",
                "generate-sources",
                "process-sources",
                "generate-resources",
                "process-resources",
                "compile",
                "process-classes",
                "generate-test-sources",
                "process-test-sources",
                "generate-test-resources",
                "process-test-resources",
                "test-compile",
                "process-test-classes",
                "test",
                "prepare-package",
                "package",
                "pre-integration-test",
                "integration-test",
                "post-integration-test",
                "verify",
                "install",
                "deploy",
            ]),
        ));
        registry.register_lifecycle(Lifecycle::new(
            "site",
            phases(&["pre-site", "site", "post-site", "site-deploy"]),
        ));

        let mut jar = PackagingBindings::new();
        jar.insert(
            "clean".to_string(),
            vec![GoalBinding::new(standard_plugin("clean-plugin"), "clean")],
        );
        jar.insert(
            "process-resources".to_string(),
            vec![GoalBinding::new(
                standard_plugin("resources-plugin"),
                "resources",
            )],
        );
        jar.insert(
            "compile".to_string(),
            vec![GoalBinding::new(standard_plugin("compiler-plugin"), "compile")],
        );
        jar.insert(
            "process-test-resources".to_string(),
            vec![GoalBinding::new(
                standard_plugin("resources-plugin"),
                "testResources",
            )],
        );
        jar.insert(
            "test-compile".to_string(),
            vec![GoalBinding::new(
                standard_plugin("compiler-plugin"),
                "testCompile",
            )],
        );
        jar.insert(
            "test".to_string(),
            vec![GoalBinding::new(standard_plugin("surefire-plugin"), "test")],
        );
        jar.insert(
            "package".to_string(),
            vec![GoalBinding::new(standard_plugin("jar-plugin"), "jar")],
        );
        jar.insert(
            "install".to_string(),
            vec![GoalBinding::new(standard_plugin("install-plugin"), "install")],
        );
        jar.insert(
            "deploy".to_string(),
            vec![GoalBinding::new(standard_plugin("deploy-plugin"), "deploy")],
        );
        jar.insert(
            "site".to_string(),
            vec![GoalBinding::new(standard_plugin("site-plugin"), "site")],
        );
        jar.insert(
            "site-deploy".to_string(),
            vec![GoalBinding::new(standard_plugin("site-plugin"), "deploy")],
        );
        registry.register_packaging(Packaging::from("jar"), jar);

        let mut pom = PackagingBindings::new();
        pom.insert(
            "clean".to_string(),
            vec![GoalBinding::new(standard_plugin("clean-plugin"), "clean")],
        );
        pom.insert(
            "install".to_string(),
            vec![GoalBinding::new(standard_plugin("install-plugin"), "install")],
        );
        pom.insert(
            "deploy".to_string(),
            vec![GoalBinding::new(standard_plugin("deploy-plugin"), "deploy")],
        );
        pom.insert(
            "site".to_string(),
            vec![GoalBinding::new(standard_plugin("site-plugin"), "site")],
        );
        registry.register_packaging(Packaging::from("pom"), pom);

        registry
    }

    /// Register a lifecycle. A lifecycle with the same id is replaced.
    pub fn register_lifecycle(&mut self, lifecycle: Lifecycle) {
        if let Some(existing) = self
            .lifecycles
            .iter_mut()
            .find(|l| l.id() == lifecycle.id())
        {
            *existing = lifecycle;
        } else {
            self.lifecycles.push(lifecycle);
        }
    }

    /// Register default bindings for a packaging type
    pub fn register_packaging(&mut self, packaging: Packaging, bindings: PackagingBindings) {
        self.packaging_bindings
            .insert(packaging.as_str().to_string(), bindings);
    }

    /// All registered lifecycles, in registration order
    #[must_use]
    pub fn lifecycles(&self) -> &[Lifecycle] {
        &self.lifecycles
    }

    /// Look up a lifecycle by id
    pub fn lifecycle(&self, id: &str) -> Result<&Lifecycle> {
        self.lifecycles
            .iter()
            .find(|l| l.id() == id)
            .ok_or_else(|| Error::lifecycle_not_found(id))
    }

    /// The lifecycle containing the given phase, if any
    #[must_use]
    pub fn lifecycle_for_phase(&self, phase: &str) -> Option<&Lifecycle> {
        self.lifecycles.iter().find(|l| l.has_phase(phase))
    }

    /// Ordinal of a phase within a named lifecycle
    pub fn phase_ordinal(&self, lifecycle_id: &str, phase: &str) -> Result<usize> {
        self.lifecycle(lifecycle_id)?
            .phase_ordinal(phase)
            .ok_or_else(|| Error::phase_not_found(phase))
    }

    /// Default phase -> goal bindings for a packaging type.
    ///
    /// An unknown packaging yields no default bindings; phase tokens then
    /// schedule only the project's explicit bindings.
    #[must_use]
    pub fn default_bindings(&self, packaging: &Packaging) -> PackagingBindings {
        match self.packaging_bindings.get(packaging.as_str()) {
            Some(bindings) => bindings.clone(),
            None => {
                tracing::warn!(
                    packaging = %packaging,
                    "no default lifecycle bindings registered for packaging"
                );
                PackagingBindings::new()
            }
        }
    }
}

fn phases(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

fn standard_plugin(artifact_id: &str) -> PluginCoordinates {
    PluginCoordinates::with_version("org.reactor.plugins", artifact_id, "1.0")
}
