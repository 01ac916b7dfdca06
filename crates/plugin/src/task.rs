use reactor_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single requested build task, as entered by the user.
///
/// The three textual forms are kept as distinct variants so every call site
/// matches on the kind instead of re-sniffing the string:
/// - `"package"` — a bare lifecycle phase
/// - `"compiler:compile"` — a plugin-prefix goal reference
/// - `"org.example:some-plugin:1.0:run"` — a fully qualified goal reference
///   (the version segment may be omitted: `"org.example:some-plugin:run"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// A lifecycle phase name
    Phase { name: String },
    /// A goal addressed through a plugin prefix
    PrefixedGoal { prefix: String, goal: String },
    /// A goal addressed by full plugin coordinates
    QualifiedGoal {
        group_id: String,
        artifact_id: String,
        version: Option<String>,
        goal: String,
    },
}

impl Task {
    /// Whether this task is a bare lifecycle phase
    #[must_use]
    pub fn is_phase(&self) -> bool {
        matches!(self, Self::Phase { .. })
    }

    /// The goal name for goal references, `None` for phases
    #[must_use]
    pub fn goal(&self) -> Option<&str> {
        match self {
            Self::Phase { .. } => None,
            Self::PrefixedGoal { goal, .. } => Some(goal),
            Self::QualifiedGoal { goal, .. } => Some(goal),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phase { name } => write!(f, "{name}"),
            Self::PrefixedGoal { prefix, goal } => write!(f, "{prefix}:{goal}"),
            Self::QualifiedGoal {
                group_id,
                artifact_id,
                version: Some(version),
                goal,
            } => write!(f, "{group_id}:{artifact_id}:{version}:{goal}"),
            Self::QualifiedGoal {
                group_id,
                artifact_id,
                version: None,
                goal,
            } => write!(f, "{group_id}:{artifact_id}:{goal}"),
        }
    }
}

impl std::str::FromStr for Task {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        parse_task(input)
    }
}

/// Parse a task token into its tagged form.
///
/// Formats:
/// - "phase" -> Phase
/// - "prefix:goal" -> PrefixedGoal
/// - "groupId:artifactId:goal" -> QualifiedGoal without version
/// - "groupId:artifactId:version:goal" -> QualifiedGoal with version
pub fn parse_task(input: &str) -> Result<Task> {
    if input.is_empty() {
        return Err(Error::invalid_task(input, "task cannot be empty"));
    }

    let parts: Vec<&str> = input.split(':').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(Error::invalid_task(
            input,
            "task contains empty components",
        ));
    }

    match parts.as_slice() {
        [name] => Ok(Task::Phase {
            name: (*name).to_string(),
        }),
        [prefix, goal] => Ok(Task::PrefixedGoal {
            prefix: (*prefix).to_string(),
            goal: (*goal).to_string(),
        }),
        [group_id, artifact_id, goal] => Ok(Task::QualifiedGoal {
            group_id: (*group_id).to_string(),
            artifact_id: (*artifact_id).to_string(),
            version: None,
            goal: (*goal).to_string(),
        }),
        [group_id, artifact_id, version, goal] => Ok(Task::QualifiedGoal {
            group_id: (*group_id).to_string(),
            artifact_id: (*artifact_id).to_string(),
            version: Some((*version).to_string()),
            goal: (*goal).to_string(),
        }),
        _ => Err(Error::invalid_task(
            input,
            "expected phase, prefix:goal, or groupId:artifactId[:version]:goal",
        )),
    }
}
