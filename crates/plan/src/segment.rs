use reactor_core::{Result, Session};
use reactor_plugin::{parse_task, PluginResolver, Task};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A contiguous run of requested tasks sharing one aggregation classification.
///
/// Aggregating segments run once against the root project; non-aggregating
/// segments run once per selected project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSegment {
    tasks: Vec<Task>,
    aggregating: bool,
}

impl TaskSegment {
    fn new(first: Task, aggregating: bool) -> Self {
        Self {
            tasks: vec![first],
            aggregating,
        }
    }

    /// Tasks in original request order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether this segment runs once against the whole reactor
    #[must_use]
    pub fn is_aggregating(&self) -> bool {
        self.aggregating
    }
}

/// Classifies a flat list of requested goal tokens into ordered task
/// segments, homogeneous in aggregation behavior.
#[derive(Clone)]
pub struct TaskSegmentCalculator {
    resolver: Arc<dyn PluginResolver>,
}

impl TaskSegmentCalculator {
    /// Create a calculator classifying goals through the given resolver
    #[must_use]
    pub fn new(resolver: Arc<dyn PluginResolver>) -> Self {
        Self { resolver }
    }

    /// Split the requested goals into segments.
    ///
    /// A bare phase never aggregates; a goal reference aggregates iff its
    /// resolved descriptor says so (a provisional resolve against the root
    /// project). A new segment starts whenever the classification changes;
    /// tokens keep their original relative order throughout.
    pub fn calculate_task_segments(
        &self,
        session: &Session,
        goals: &[String],
    ) -> Result<Vec<TaskSegment>> {
        let root = session.top_level_project();

        let mut segments: Vec<TaskSegment> = Vec::new();
        for raw in goals {
            let task = parse_task(raw)?;
            let aggregating = match &task {
                Task::Phase { .. } => false,
                goal_ref => self.resolver.resolve(goal_ref, root)?.aggregating,
            };
            match segments.last_mut() {
                Some(segment) if segment.aggregating == aggregating => {
                    segment.tasks.push(task);
                }
                _ => segments.push(TaskSegment::new(task, aggregating)),
            }
        }
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactor_core::{
        Error, Packaging, PluginCoordinates, Project, ProjectCoordinates, Session,
    };
    use reactor_plugin::{MojoDescriptor, PluginRegistry};

    fn session() -> Session {
        let root = Project::new(
            ProjectCoordinates::new("org.example", "root", "1.0"),
            Packaging::from("pom"),
        );
        Session::new(vec![root], 0, vec![]).unwrap()
    }

    fn calculator() -> TaskSegmentCalculator {
        let mut registry = PluginRegistry::new();
        let plugin = PluginCoordinates::with_version("org.example", "mixed-plugin", "1.0");
        registry.register(
            "mixed",
            plugin.clone(),
            vec![
                MojoDescriptor::new(plugin.clone(), "report").aggregating(),
                MojoDescriptor::new(plugin, "touch"),
            ],
        );
        TaskSegmentCalculator::new(Arc::new(registry))
    }

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn phases_never_aggregate() {
        let segments = calculator()
            .calculate_task_segments(&session(), &strings(&["clean", "install"]))
            .unwrap();
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_aggregating());
        assert_eq!(segments[0].tasks().len(), 2);
    }

    #[test]
    fn classification_change_starts_a_new_segment() {
        let segments = calculator()
            .calculate_task_segments(
                &session(),
                &strings(&["clean", "mixed:report", "mixed:touch", "install"]),
            )
            .unwrap();
        assert_eq!(segments.len(), 3);
        assert!(!segments[0].is_aggregating());
        assert!(segments[1].is_aggregating());
        assert!(!segments[2].is_aggregating());
        assert_eq!(segments[1].tasks()[0].to_string(), "mixed:report");
    }

    #[test]
    fn concatenated_segments_equal_the_input() {
        let goals = strings(&["validate", "mixed:report", "mixed:report", "mixed:touch"]);
        let segments = calculator()
            .calculate_task_segments(&session(), &goals)
            .unwrap();
        let flattened: Vec<String> = segments
            .iter()
            .flat_map(|s| s.tasks().iter().map(ToString::to_string))
            .collect();
        assert_eq!(flattened, goals);
    }

    #[test]
    fn resolution_failures_propagate_unmodified() {
        let result =
            calculator().calculate_task_segments(&session(), &strings(&["unknown:goal"]));
        assert!(matches!(
            result,
            Err(Error::NoPluginFoundForPrefix { .. })
        ));
    }
}
