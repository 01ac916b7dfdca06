//! End-to-end planning tests: raw goal tokens through segment calculation,
//! build-list expansion, and execution-plan resolution.

use reactor_core::{Packaging, PluginCoordinates, Project, ProjectCoordinates, Session};
use reactor_lifecycle::LifecycleRegistry;
use reactor_plan::{
    BuildListCalculator, ExecutionPlanCalculator, ProjectBuildList, TaskSegmentCalculator,
};
use reactor_plugin::{MojoDescriptor, PluginRegistry};
use std::sync::Arc;

/// Resolver covering every plugin the standard registry binds by default,
/// plus one aggregating reporting plugin.
fn resolver() -> Arc<PluginRegistry> {
    let mut registry = PluginRegistry::new();

    let plugins: &[(&str, &str, &[(&str, Option<&str>)])] = &[
        ("clean", "clean-plugin", &[("clean", None)]),
        (
            "resources",
            "resources-plugin",
            &[("resources", None), ("testResources", None)],
        ),
        (
            "compiler",
            "compiler-plugin",
            &[("compile", Some("compile")), ("testCompile", Some("test"))],
        ),
        ("surefire", "surefire-plugin", &[("test", Some("test"))]),
        ("jar", "jar-plugin", &[("jar", None)]),
        ("install", "install-plugin", &[("install", None)]),
        ("deploy", "deploy-plugin", &[("deploy", None)]),
        ("site", "site-plugin", &[("site", None), ("deploy", None)]),
    ];
    for (prefix, artifact_id, mojos) in plugins {
        let plugin = PluginCoordinates::with_version("org.reactor.plugins", *artifact_id, "1.0");
        let descriptors = mojos
            .iter()
            .map(|(goal, scope)| {
                let mut descriptor = MojoDescriptor::new(plugin.clone(), *goal);
                descriptor.requires_dependency_resolution = scope.map(str::to_string);
                descriptor
            })
            .collect();
        registry.register(*prefix, plugin, descriptors);
    }

    let reporting = PluginCoordinates::with_version("org.example", "reactor-report-plugin", "1.0");
    registry.register(
        "report",
        reporting.clone(),
        vec![MojoDescriptor::new(reporting, "aggregate").aggregating()],
    );

    Arc::new(registry)
}

fn project(artifact_id: &str) -> Project {
    Project::new(
        ProjectCoordinates::new("org.example", artifact_id, "1.0"),
        Packaging::from("jar"),
    )
}

fn plan_all(session: &Session) -> (ProjectBuildList, Vec<usize>) {
    let resolver = resolver();
    let build_lists = BuildListCalculator::new(TaskSegmentCalculator::new(resolver.clone()));
    let plans = ExecutionPlanCalculator::new(Arc::new(LifecycleRegistry::standard()), resolver);

    let segments = build_lists.calculate_task_segments(session).unwrap();
    let builds = build_lists.calculate_project_builds(session, &segments);

    let sizes = builds
        .iter()
        .map(|build| {
            plans
                .calculate_execution_plan(
                    build.session(),
                    build.project(),
                    build.task_segment().tasks(),
                )
                .unwrap()
                .size()
        })
        .collect();
    (builds, sizes)
}

#[test]
fn validate_to_package_schedules_every_binding_up_to_package() {
    let session = Session::new(
        vec![project("app")],
        0,
        vec!["validate".to_string(), "package".to_string()],
    )
    .unwrap();

    let resolver = resolver();
    let build_lists = BuildListCalculator::new(TaskSegmentCalculator::new(resolver.clone()));
    let plans = ExecutionPlanCalculator::new(Arc::new(LifecycleRegistry::standard()), resolver);

    let segments = build_lists.calculate_task_segments(&session).unwrap();
    assert_eq!(segments.len(), 1);

    let builds = build_lists.calculate_project_builds(&session, &segments);
    assert_eq!(builds.len(), 1);

    let build = builds.get(0).unwrap();
    let plan = plans
        .calculate_execution_plan(build.session(), build.project(), build.task_segment().tasks())
        .unwrap();

    let goals: Vec<&str> = plan.mojo_executions().map(|e| e.goal.as_str()).collect();
    assert_eq!(
        goals,
        vec![
            "resources",
            "compile",
            "testResources",
            "testCompile",
            "test",
            "jar"
        ]
    );
    assert_eq!(plan.size(), goals.len());

    // The plan ends with the package-phase goal
    let last = plan.items().last().unwrap();
    assert_eq!(last.phase.as_deref(), Some("package"));
    assert_eq!(last.execution.execution_id, "default-jar");
}

#[test]
fn default_goal_drives_the_whole_pipeline() {
    let root = project("root").with_default_goal("clean install");
    let session = Session::new(vec![root, project("module-a")], 0, vec![]).unwrap();

    let (builds, sizes) = plan_all(&session);

    // One non-aggregating segment across both projects
    assert_eq!(builds.len(), 2);
    for build in &builds {
        let tasks: Vec<String> = build
            .task_segment()
            .tasks()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tasks, vec!["clean", "install"]);
    }
    // clean + everything through install, identically for both jar modules
    assert_eq!(sizes[0], sizes[1]);
    assert!(sizes[0] > 2);
}

#[test]
fn aggregator_goal_between_phases_splits_the_build_list() {
    let session = Session::new(
        vec![project("root"), project("module-a"), project("module-b")],
        0,
        vec![
            "clean".to_string(),
            "report:aggregate".to_string(),
            "install".to_string(),
        ],
    )
    .unwrap();

    let (builds, sizes) = plan_all(&session);

    // 3 projects for "clean", 1 root for the aggregator, 3 for "install"
    assert_eq!(builds.len(), 7);
    assert!(builds.get(3).unwrap().task_segment().is_aggregating());
    assert_eq!(
        builds.get(3).unwrap().project().coordinates().artifact_id,
        "root"
    );
    // The aggregator segment schedules exactly its one goal
    assert_eq!(sizes[3], 1);

    // Every per-module session is pinned to its own project
    for build in &builds {
        assert_eq!(
            build.session().current_project(),
            Some(build.project().coordinates())
        );
    }
}

#[test]
fn plan_ordering_is_stable_across_pipeline_runs() {
    let session = Session::new(
        vec![project("app")],
        0,
        vec!["verify".to_string()],
    )
    .unwrap();

    let (_, first) = plan_all(&session);
    let (_, second) = plan_all(&session);
    assert_eq!(first, second);
}
