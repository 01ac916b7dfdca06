use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, ordered sequence of phases.
///
/// Phase order is the execution order contract: a goal bound to an earlier
/// phase must never be scheduled after a goal bound to a later one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lifecycle {
    id: String,
    phases: Vec<String>,
}

impl Lifecycle {
    /// Create a lifecycle from an ordered phase list
    #[must_use]
    pub fn new(id: impl Into<String>, phases: Vec<String>) -> Self {
        Self {
            id: id.into(),
            phases,
        }
    }

    /// Lifecycle identifier ("clean", "default", "site", ...)
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Phases in execution order
    #[must_use]
    pub fn phases(&self) -> &[String] {
        &self.phases
    }

    /// Ordinal position of a phase within this lifecycle
    #[must_use]
    pub fn phase_ordinal(&self, phase: &str) -> Option<usize> {
        self.phases.iter().position(|p| p == phase)
    }

    /// Whether this lifecycle contains the given phase
    #[must_use]
    pub fn has_phase(&self, phase: &str) -> bool {
        self.phase_ordinal(phase).is_some()
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
