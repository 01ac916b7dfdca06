//! Lifecycle model for the `reactor` planning core.
//!
//! A lifecycle is a named, ordered sequence of phases; the registry maps
//! phase names to their ordinal position and supplies each packaging type's
//! default phase-to-goal bindings. The registry is consumed read-only by the
//! planners and is safe to share across worker threads.

pub mod lifecycle;
pub mod registry;

pub use self::{
    lifecycle::Lifecycle,
    registry::{GoalBinding, LifecycleRegistry, PackagingBindings},
};
