//! Plugin resolution for the `reactor` planning core.
//!
//! This crate models the user-facing task tokens (phase, `prefix:goal`,
//! fully qualified goal), the mojo descriptors resolution produces, and the
//! `PluginResolver` capability interface the planners depend on. Actual
//! artifact download and descriptor parsing live outside the planning core;
//! the in-memory `PluginRegistry` is the seam where they plug in.

pub mod descriptor;
pub mod resolver;
pub mod task;

pub use self::{
    descriptor::MojoDescriptor,
    resolver::{PluginRegistry, PluginResolver},
    task::{parse_task, Task},
};
