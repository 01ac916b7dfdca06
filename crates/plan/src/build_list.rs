use crate::segment::{TaskSegment, TaskSegmentCalculator};
use reactor_core::{Error, Project, Result, Session};

/// One unit of build work: a project, the task segment to run against it,
/// and an exclusively owned session context.
///
/// The session is a clone of the planning session with the current project
/// set; the worker assigned this segment may mutate it freely without
/// affecting any other segment.
#[derive(Debug, Clone)]
pub struct ProjectSegment {
    project: Project,
    task_segment: TaskSegment,
    session: Session,
}

impl ProjectSegment {
    /// The project this unit builds
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The tasks to run against the project
    #[must_use]
    pub fn task_segment(&self) -> &TaskSegment {
        &self.task_segment
    }

    /// The isolated session context
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access for the executing worker
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

/// The ordered sequence of project segments the execution engine consumes.
///
/// Task-segment order is outer, project order inner; the engine relies on
/// this to sequence aggregator work against per-module work.
#[derive(Debug, Clone, Default)]
pub struct ProjectBuildList {
    segments: Vec<ProjectSegment>,
}

impl ProjectBuildList {
    /// Create a build list from already ordered segments
    #[must_use]
    pub fn new(segments: Vec<ProjectSegment>) -> Self {
        Self { segments }
    }

    /// Number of project segments
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at the given position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProjectSegment> {
        self.segments.get(index)
    }

    /// Iterate over segments in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSegment> {
        self.segments.iter()
    }
}

impl IntoIterator for ProjectBuildList {
    type Item = ProjectSegment;
    type IntoIter = std::vec::IntoIter<ProjectSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectBuildList {
    type Item = &'a ProjectSegment;
    type IntoIter = std::slice::Iter<'a, ProjectSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Decides what will be built: expands task segments across the selected
/// projects, applying aggregation rules and constructing an isolated session
/// per unit. No mojo resolution happens here.
#[derive(Clone)]
pub struct BuildListCalculator {
    segment_calculator: TaskSegmentCalculator,
}

impl BuildListCalculator {
    /// Create a calculator delegating classification to the given
    /// segment calculator
    #[must_use]
    pub fn new(segment_calculator: TaskSegmentCalculator) -> Self {
        Self { segment_calculator }
    }

    /// Derive the task segments for a session.
    ///
    /// Falls back to the root project's default goal, split on whitespace,
    /// when the session requests no goals.
    pub fn calculate_task_segments(&self, session: &Session) -> Result<Vec<TaskSegment>> {
        let mut goals: Vec<String> = session.goals().to_vec();

        if goals.is_empty() {
            if let Some(default_goal) = session.top_level_project().default_goal() {
                goals = default_goal.split_whitespace().map(str::to_string).collect();
                tracing::debug!(
                    project = %session.top_level_project(),
                    default_goal,
                    "no goals requested, using the root project's default goal"
                );
            }
        }

        if goals.is_empty() {
            return Err(Error::configuration(
                "no goals have been specified for this build",
            ));
        }

        self.segment_calculator
            .calculate_task_segments(session, &goals)
    }

    /// Expand task segments into the ordered project build list.
    ///
    /// An aggregating segment selects exactly the root project; any other
    /// segment selects every project of the session, in topological order.
    pub fn calculate_project_builds(
        &self,
        session: &Session,
        task_segments: &[TaskSegment],
    ) -> ProjectBuildList {
        let mut project_builds = Vec::new();
        let root = session.top_level_project();

        for task_segment in task_segments {
            let projects: Vec<&Project> = if task_segment.is_aggregating() {
                vec![root]
            } else {
                session.projects().iter().collect()
            };
            for project in projects {
                // Advisory handoff hint for the downstream concurrent
                // executor; carries no locking semantics.
                tracing::debug!(
                    project = %project,
                    aggregating = task_segment.is_aggregating(),
                    "queueing project build"
                );
                let mut copied_session = session.clone();
                copied_session.set_current_project(project.coordinates().clone());
                project_builds.push(ProjectSegment {
                    project: project.clone(),
                    task_segment: task_segment.clone(),
                    session: copied_session,
                });
            }
        }
        ProjectBuildList::new(project_builds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactor_core::{Packaging, PluginCoordinates, ProjectCoordinates};
    use reactor_plugin::{MojoDescriptor, PluginRegistry};
    use std::sync::Arc;

    fn project(artifact_id: &str) -> Project {
        Project::new(
            ProjectCoordinates::new("org.example", artifact_id, "1.0"),
            Packaging::from("jar"),
        )
    }

    fn calculator() -> BuildListCalculator {
        let mut registry = PluginRegistry::new();
        let plugin = PluginCoordinates::with_version("org.example", "reactor-report-plugin", "1.0");
        registry.register(
            "report",
            plugin.clone(),
            vec![MojoDescriptor::new(plugin, "aggregate").aggregating()],
        );
        BuildListCalculator::new(TaskSegmentCalculator::new(Arc::new(registry)))
    }

    fn session(goals: &[&str]) -> Session {
        let projects = vec![project("root"), project("module-a"), project("module-b")];
        Session::new(
            projects,
            0,
            goals.iter().map(|g| (*g).to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn default_goal_fallback_splits_on_whitespace() {
        let root = project("root").with_default_goal("clean install");
        let session = Session::new(vec![root], 0, vec![]).unwrap();

        let segments = calculator().calculate_task_segments(&session).unwrap();
        let tasks: Vec<String> = segments
            .iter()
            .flat_map(|s| s.tasks().iter().map(ToString::to_string))
            .collect();
        assert_eq!(tasks, vec!["clean", "install"]);
    }

    #[test]
    fn no_goals_anywhere_is_a_configuration_error() {
        let session = session(&[]);
        let result = calculator().calculate_task_segments(&session);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn aggregating_segment_binds_only_the_root() {
        let calculator = calculator();
        let session = session(&["report:aggregate"]);
        let segments = calculator.calculate_task_segments(&session).unwrap();

        let builds = calculator.calculate_project_builds(&session, &segments);
        assert_eq!(builds.len(), 1);
        assert_eq!(builds.get(0).unwrap().project().coordinates().artifact_id, "root");
    }

    #[test]
    fn per_module_segment_covers_all_projects_in_order() {
        let calculator = calculator();
        let session = session(&["install"]);
        let segments = calculator.calculate_task_segments(&session).unwrap();

        let builds = calculator.calculate_project_builds(&session, &segments);
        let order: Vec<&str> = builds
            .iter()
            .map(|b| b.project().coordinates().artifact_id.as_str())
            .collect();
        assert_eq!(order, vec!["root", "module-a", "module-b"]);
    }

    #[test]
    fn segment_order_is_outer_project_order_inner() {
        let calculator = calculator();
        let session = session(&["clean", "report:aggregate", "install"]);
        let segments = calculator.calculate_task_segments(&session).unwrap();
        assert_eq!(segments.len(), 3);

        let builds = calculator.calculate_project_builds(&session, &segments);
        // 3 projects + 1 aggregator + 3 projects
        assert_eq!(builds.len(), 7);
        assert_eq!(builds.get(3).unwrap().project().coordinates().artifact_id, "root");
        assert!(builds.get(3).unwrap().task_segment().is_aggregating());
    }

    #[test]
    fn each_project_segment_owns_an_isolated_session() {
        let calculator = calculator();
        let session = session(&["install"]);
        let segments = calculator.calculate_task_segments(&session).unwrap();

        let mut builds: Vec<ProjectSegment> = calculator
            .calculate_project_builds(&session, &segments)
            .into_iter()
            .collect();

        for build in &builds {
            assert_eq!(
                build.session().current_project(),
                Some(build.project().coordinates())
            );
        }

        // Mutating one context must not leak into any other
        let hijack = ProjectCoordinates::new("org.example", "elsewhere", "9.9");
        builds[0].session_mut().set_current_project(hijack);
        assert_eq!(
            builds[1].session().current_project().unwrap().artifact_id,
            "module-a"
        );
        assert!(session.current_project().is_none());
    }
}
