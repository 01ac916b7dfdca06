use reactor_core::PluginCoordinates;
use reactor_plugin::MojoDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Execution id for goals scheduled directly from the requested task list
pub const DEFAULT_CLI_EXECUTION_ID: &str = "default-cli";

/// One concrete, configured invocation of a plugin goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MojoExecution {
    pub plugin: PluginCoordinates,
    pub goal: String,
    /// Distinguishes multiple bindings of the same goal
    pub execution_id: String,
    /// Configuration payload for this invocation
    pub configuration: Option<Value>,
    /// The resolved descriptor backing this invocation
    pub descriptor: MojoDescriptor,
}

impl MojoExecution {
    /// Create an execution from a resolved descriptor, taking the
    /// descriptor's default configuration
    #[must_use]
    pub fn new(descriptor: MojoDescriptor, execution_id: impl Into<String>) -> Self {
        Self {
            plugin: descriptor.plugin.clone(),
            goal: descriptor.goal.clone(),
            execution_id: execution_id.into(),
            configuration: descriptor.default_configuration.clone(),
            descriptor,
        }
    }
}

impl fmt::Display for MojoExecution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.plugin, self.goal, self.execution_id)
    }
}

/// A mojo execution positioned within a lifecycle.
///
/// For standalone goal references the phase is metadata only: it records
/// where the goal would have bound, without having triggered that phase's
/// other bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPlanItem {
    pub execution: MojoExecution,
    /// Owning lifecycle for phase-scheduled items
    pub lifecycle: Option<String>,
    /// Phase this execution is positioned at
    pub phase: Option<String>,
}

/// The ordered execution plan for one project and one task segment.
///
/// Item order is execution order. The scope sets are the union over all
/// descriptors' declared dependency scope needs, used by the engine to
/// decide which classpaths to realize before running the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPlan {
    items: Vec<ExecutionPlanItem>,
    required_resolution_scopes: BTreeSet<String>,
    required_collection_scopes: BTreeSet<String>,
}

impl ExecutionPlan {
    /// Create a plan from ordered items, deriving the scope sets
    #[must_use]
    pub fn new(items: Vec<ExecutionPlanItem>) -> Self {
        let mut required_resolution_scopes = BTreeSet::new();
        let mut required_collection_scopes = BTreeSet::new();
        for item in &items {
            if let Some(scope) = &item.execution.descriptor.requires_dependency_resolution {
                required_resolution_scopes.insert(scope.clone());
            }
            if let Some(scope) = &item.execution.descriptor.requires_dependency_collection {
                required_collection_scopes.insert(scope.clone());
            }
        }
        Self {
            items,
            required_resolution_scopes,
            required_collection_scopes,
        }
    }

    /// Number of mojo executions in the plan
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the plan schedules nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in execution order
    #[must_use]
    pub fn items(&self) -> &[ExecutionPlanItem] {
        &self.items
    }

    /// Iterate over items in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionPlanItem> {
        self.items.iter()
    }

    /// Flattened mojo executions, for engines that do not need phase
    /// structure
    pub fn mojo_executions(&self) -> impl Iterator<Item = &MojoExecution> {
        self.items.iter().map(|item| &item.execution)
    }

    /// Scopes the engine must resolve on the classpath
    #[must_use]
    pub fn required_resolution_scopes(&self) -> &BTreeSet<String> {
        &self.required_resolution_scopes
    }

    /// Scopes the engine must collect dependency metadata for
    #[must_use]
    pub fn required_collection_scopes(&self) -> &BTreeSet<String> {
        &self.required_collection_scopes
    }
}

impl<'a> IntoIterator for &'a ExecutionPlan {
    type Item = &'a ExecutionPlanItem;
    type IntoIter = std::slice::Iter<'a, ExecutionPlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
