//! Build-plan calculation for the `reactor` orchestrator.
//!
//! This crate turns raw requested goal tokens into the work the execution
//! engine runs, in three stages:
//!
//! 1. [`TaskSegmentCalculator`] groups the tokens into segments homogeneous
//!    in aggregation behavior.
//! 2. [`BuildListCalculator`] expands the segments across the selected
//!    projects into a [`ProjectBuildList`], one isolated session per unit.
//! 3. [`ExecutionPlanCalculator`] resolves one project and one segment's
//!    tasks into an ordered, phase-bound [`ExecutionPlan`].
//!
//! Planning is single-threaded; its outputs are designed for concurrent
//! consumption (each [`ProjectSegment`] owns its session, the registries are
//! read-only).

pub mod build_list;
pub mod calculator;
pub mod execution;
pub mod segment;

pub use self::{
    build_list::{BuildListCalculator, ProjectBuildList, ProjectSegment},
    calculator::ExecutionPlanCalculator,
    execution::{
        ExecutionPlan, ExecutionPlanItem, MojoExecution, DEFAULT_CLI_EXECUTION_ID,
    },
    segment::{TaskSegment, TaskSegmentCalculator},
};
