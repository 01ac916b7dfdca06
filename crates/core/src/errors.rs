/// Result type alias for reactor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the planning core.
///
/// Every failure kind the planning calculators can surface is a distinct
/// variant so that callers can report "which goal, for which project, failed
/// to resolve" without string matching.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A named lifecycle is not registered
    #[error("lifecycle '{name}' is unknown")]
    LifecycleNotFound { name: String },

    /// A phase token does not exist in any registered lifecycle
    #[error("lifecycle phase '{phase}' is unknown; specify a valid phase or a plugin goal")]
    LifecyclePhaseNotFound { phase: String },

    /// The plugin backing a goal could not be located
    #[error("plugin '{plugin}' could not be found")]
    PluginNotFound { plugin: String },

    /// The plugin was located but resolving it failed
    #[error("plugin '{plugin}' could not be resolved: {message}")]
    PluginResolution { plugin: String, message: String },

    /// No version could be pinned for the plugin
    #[error("no version could be determined for plugin '{plugin}'")]
    PluginVersionUnresolvable { plugin: String },

    /// The resolved plugin descriptor is malformed
    #[error("descriptor for plugin '{plugin}' is invalid: {message}")]
    PluginDescriptorInvalid { plugin: String, message: String },

    /// The plugin resolved but declares no such goal
    #[error("goal '{goal}' does not exist in plugin '{plugin}'")]
    MojoNotFound { goal: String, plugin: String },

    /// A `prefix:goal` token's prefix maps to no known plugin
    #[error("no plugin found for prefix '{prefix}'")]
    NoPluginFoundForPrefix { prefix: String },

    /// A task token does not parse as a phase or goal reference
    #[error("invalid task '{task}': {message}")]
    InvalidTask { task: String, message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::Configuration {
            message: format!("An internal error occurred: {error}"),
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a lifecycle-not-found error
    #[must_use]
    pub fn lifecycle_not_found(name: impl Into<String>) -> Self {
        Error::LifecycleNotFound { name: name.into() }
    }

    /// Create a phase-not-found error
    #[must_use]
    pub fn phase_not_found(phase: impl Into<String>) -> Self {
        Error::LifecyclePhaseNotFound {
            phase: phase.into(),
        }
    }

    /// Create a plugin-not-found error
    #[must_use]
    pub fn plugin_not_found(plugin: impl Into<String>) -> Self {
        Error::PluginNotFound {
            plugin: plugin.into(),
        }
    }

    /// Create a plugin resolution error
    #[must_use]
    pub fn plugin_resolution(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Error::PluginResolution {
            plugin: plugin.into(),
            message: message.into(),
        }
    }

    /// Create a version-unresolvable error
    #[must_use]
    pub fn version_unresolvable(plugin: impl Into<String>) -> Self {
        Error::PluginVersionUnresolvable {
            plugin: plugin.into(),
        }
    }

    /// Create an invalid-descriptor error
    #[must_use]
    pub fn descriptor_invalid(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Error::PluginDescriptorInvalid {
            plugin: plugin.into(),
            message: message.into(),
        }
    }

    /// Create a mojo-not-found error
    #[must_use]
    pub fn mojo_not_found(goal: impl Into<String>, plugin: impl Into<String>) -> Self {
        Error::MojoNotFound {
            goal: goal.into(),
            plugin: plugin.into(),
        }
    }

    /// Create a no-plugin-for-prefix error
    #[must_use]
    pub fn no_plugin_for_prefix(prefix: impl Into<String>) -> Self {
        Error::NoPluginFoundForPrefix {
            prefix: prefix.into(),
        }
    }

    /// Create an invalid-task error
    #[must_use]
    pub fn invalid_task(task: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidTask {
            task: task.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}

// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Configuration {
                message: format!("{}: {}", message.into(), base_error),
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Configuration {
                message: format!("{}: {}", f(), base_error),
            }
        })
    }
}
