//! Core domain types and errors for the `reactor` planning core.
//!
//! This crate establishes the foundational data structures and error handling
//! used throughout the workspace.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all planning failure modes for predictable error handling.
//! - **`project`**: The read-only project model consumed by the planners:
//!   coordinates, packaging, and explicit plugin bindings.
//! - **`session`**: Per-invocation build state; cloning a session is the
//!   isolation mechanism between concurrently executed project segments.

pub mod errors;
pub mod project;
pub mod session;

pub use self::{
    errors::{Error, Result, ResultExt},
    project::{
        Packaging, PluginBinding, PluginCoordinates, PluginExecution, Project, ProjectCoordinates,
    },
    session::{BuildOutcome, Session},
};
