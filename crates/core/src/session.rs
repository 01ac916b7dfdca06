use crate::errors::{Error, Result};
use crate::project::{Project, ProjectCoordinates};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of building one project, recorded by the execution engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildOutcome {
    Succeeded,
    Failed,
    Skipped,
}

/// Per-invocation build state.
///
/// Holds the selected projects in topological order, the designated root,
/// the requested goal tokens, and mutable build state (current project,
/// recorded results). Isolation between concurrently executed project
/// segments is achieved by cloning: a cloned session shares no mutable
/// state with its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    projects: Vec<Project>,
    root: usize,
    goals: Vec<String>,
    current_project: Option<ProjectCoordinates>,
    results: HashMap<String, BuildOutcome>,
}

impl Session {
    /// Create a session over an already topologically ordered project list.
    ///
    /// `root` indexes the designated root project within `projects`.
    pub fn new(projects: Vec<Project>, root: usize, goals: Vec<String>) -> Result<Self> {
        if projects.is_empty() {
            return Err(Error::configuration("session requires at least one project"));
        }
        if root >= projects.len() {
            return Err(Error::configuration(format!(
                "root project index {root} is out of bounds for {} projects",
                projects.len()
            )));
        }
        Ok(Self {
            projects,
            root,
            goals,
            current_project: None,
            results: HashMap::new(),
        })
    }

    /// The designated root project of the reactor
    #[must_use]
    pub fn top_level_project(&self) -> &Project {
        &self.projects[self.root]
    }

    /// All projects selected for this invocation, in topological order
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The raw requested goal tokens
    #[must_use]
    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// Set the project this session is currently building
    pub fn set_current_project(&mut self, coordinates: ProjectCoordinates) {
        self.current_project = Some(coordinates);
    }

    /// The project this session is currently building, if any
    #[must_use]
    pub fn current_project(&self) -> Option<&ProjectCoordinates> {
        self.current_project.as_ref()
    }

    /// Record the build outcome for a project
    pub fn record_result(&mut self, coordinates: &ProjectCoordinates, outcome: BuildOutcome) {
        self.results.insert(coordinates.to_string(), outcome);
    }

    /// Look up the recorded outcome for a project
    #[must_use]
    pub fn result_of(&self, coordinates: &ProjectCoordinates) -> Option<BuildOutcome> {
        self.results.get(&coordinates.to_string()).copied()
    }
}
