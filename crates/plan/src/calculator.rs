use crate::execution::{
    ExecutionPlan, ExecutionPlanItem, MojoExecution, DEFAULT_CLI_EXECUTION_ID,
};
use reactor_core::{Error, Project, Result, Session};
use reactor_lifecycle::LifecycleRegistry;
use reactor_plugin::{PluginResolver, Task};
use std::collections::HashSet;
use std::sync::Arc;

/// Key identifying one scheduled binding within a plan
type ScheduledKey = (String, String, String);

/// Resolves one project and one task segment's tasks into a concrete,
/// ordered execution plan.
///
/// Stateless across invocations; plan calculation for different projects is
/// independent and may run in parallel.
#[derive(Clone)]
pub struct ExecutionPlanCalculator {
    registry: Arc<LifecycleRegistry>,
    resolver: Arc<dyn PluginResolver>,
}

impl ExecutionPlanCalculator {
    /// Create a calculator over the given lifecycle registry and resolver
    #[must_use]
    pub fn new(registry: Arc<LifecycleRegistry>, resolver: Arc<dyn PluginResolver>) -> Self {
        Self { registry, resolver }
    }

    /// Calculate the execution plan for one project and an ordered task list.
    ///
    /// Phase tokens expand to every binding of every phase up to and
    /// including the requested one, in lifecycle-ordinal order; goal tokens
    /// schedule a single standalone execution. Identical inputs always yield
    /// identical plan ordering. Any resolution failure aborts the whole
    /// plan.
    pub fn calculate_execution_plan(
        &self,
        session: &Session,
        project: &Project,
        tasks: &[Task],
    ) -> Result<ExecutionPlan> {
        let project = project.execution_project();
        tracing::debug!(
            project = %project,
            current = ?session.current_project(),
            tasks = tasks.len(),
            "calculating execution plan"
        );

        let mut items = Vec::new();
        let mut scheduled: HashSet<ScheduledKey> = HashSet::new();

        for task in tasks {
            match task {
                Task::Phase { name } => {
                    self.schedule_phase(project, name, &mut items, &mut scheduled)?;
                }
                goal_ref => {
                    let descriptor = self.resolver.resolve(goal_ref, project)?;
                    // The declared phase is positioning metadata only; it
                    // does not pull in the phase's other bindings.
                    let phase = descriptor.phase.clone();
                    let lifecycle = phase
                        .as_deref()
                        .and_then(|p| self.registry.lifecycle_for_phase(p))
                        .map(|l| l.id().to_string());
                    items.push(ExecutionPlanItem {
                        execution: MojoExecution::new(descriptor, DEFAULT_CLI_EXECUTION_ID),
                        lifecycle,
                        phase,
                    });
                }
            }
        }

        Ok(ExecutionPlan::new(items))
    }

    /// Schedule every not-yet-scheduled binding of every phase up to and
    /// including `phase`, default bindings first, then the project's
    /// explicit bindings, per phase.
    fn schedule_phase(
        &self,
        project: &Project,
        phase: &str,
        items: &mut Vec<ExecutionPlanItem>,
        scheduled: &mut HashSet<ScheduledKey>,
    ) -> Result<()> {
        let lifecycle = self
            .registry
            .lifecycle_for_phase(phase)
            .ok_or_else(|| Error::phase_not_found(phase))?;
        let ordinal = lifecycle
            .phase_ordinal(phase)
            .ok_or_else(|| Error::phase_not_found(phase))?;

        let defaults = self.registry.default_bindings(project.packaging());

        for current_phase in &lifecycle.phases()[..=ordinal] {
            if let Some(bindings) = defaults.get(current_phase) {
                for binding in bindings {
                    let key = (
                        binding.plugin.key(),
                        binding.goal.clone(),
                        binding.execution_id.clone(),
                    );
                    if !scheduled.insert(key) {
                        continue;
                    }
                    let task = Task::QualifiedGoal {
                        group_id: binding.plugin.group_id.clone(),
                        artifact_id: binding.plugin.artifact_id.clone(),
                        version: binding.plugin.version.clone(),
                        goal: binding.goal.clone(),
                    };
                    let descriptor = self.resolver.resolve(&task, project)?;
                    items.push(ExecutionPlanItem {
                        execution: MojoExecution::new(descriptor, binding.execution_id.clone()),
                        lifecycle: Some(lifecycle.id().to_string()),
                        phase: Some(current_phase.clone()),
                    });
                }
            }

            for plugin_binding in project.plugins() {
                for execution in &plugin_binding.executions {
                    if execution.phase.as_deref() != Some(current_phase.as_str()) {
                        continue;
                    }
                    for goal in &execution.goals {
                        let key = (
                            plugin_binding.plugin.key(),
                            goal.clone(),
                            execution.id.clone(),
                        );
                        if !scheduled.insert(key) {
                            continue;
                        }
                        let task = Task::QualifiedGoal {
                            group_id: plugin_binding.plugin.group_id.clone(),
                            artifact_id: plugin_binding.plugin.artifact_id.clone(),
                            version: plugin_binding.plugin.version.clone(),
                            goal: goal.clone(),
                        };
                        let descriptor = self.resolver.resolve(&task, project)?;
                        let mut mojo_execution =
                            MojoExecution::new(descriptor, execution.id.clone());
                        if let Some(configuration) = &execution.configuration {
                            mojo_execution.configuration = Some(configuration.clone());
                        }
                        items.push(ExecutionPlanItem {
                            execution: mojo_execution,
                            lifecycle: Some(lifecycle.id().to_string()),
                            phase: Some(current_phase.clone()),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
