// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn descriptor_requires_name() {
    let descriptor = ProjectDescriptor::builder().name("   ").build();
    assert_eq!(descriptor.validate(), Err(DescriptorError::MissingName));
}

#[yare::parameterized(
    absent = { None },
    blank  = { Some(Brief::new("  ")) },
)]
fn descriptor_requires_brief(brief: Option<Brief>) {
    let descriptor = ProjectDescriptor::builder().brief(brief).build();
    assert_eq!(descriptor.validate(), Err(DescriptorError::MissingBrief));
}

#[test]
fn brief_with_only_objectives_is_present() {
    let brief = Brief { objectives: vec!["ship it".into()], ..Brief::default() };
    let descriptor = ProjectDescriptor::builder().brief(Some(brief)).build();
    assert!(descriptor.validate().is_ok());
}

#[test]
fn queued_project_keeps_supplied_id() {
    let descriptor = ProjectDescriptor::builder().with_id("p1").priority(4).build();
    let project = QueuedProject::from_descriptor(descriptor, 42);
    assert_eq!(project.id, "p1");
    assert_eq!(project.priority, 4);
    assert_eq!(project.status, ProjectStatus::Queued);
    assert_eq!(project.retries, 0);
    assert_eq!(project.workflow, "default");
    assert_eq!(project.queued_at_ms, 42);
}

#[test]
fn queued_project_generates_missing_id() {
    let project = QueuedProject::from_descriptor(ProjectDescriptor::builder().build(), 0);
    assert!(project.id.as_str().starts_with(ProjectId::PREFIX));
}

#[test]
fn begin_resets_run_state() {
    let mut project = QueuedProject::from_descriptor(ProjectDescriptor::builder().build(), 0);
    project.retries = 2;
    project.phase = Some(Phase::Test);
    project.begin();
    assert_eq!(project.status, ProjectStatus::InProgress);
    assert_eq!(project.retries, 0);
    assert_eq!(project.phase, None);
}

#[test]
fn descriptor_deserializes_with_defaults() {
    let json = r#"{
        "name": "shop",
        "brief": { "overview": "online shop" },
        "features": [{ "name": "cart" }],
        "tech_stack": { "frontend": "react" }
    }"#;
    let descriptor: ProjectDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(descriptor.priority, 0);
    assert_eq!(descriptor.features[0].complexity, "medium");
    assert_eq!(descriptor.tech_stack.get("frontend").map(String::as_str), Some("react"));
}
