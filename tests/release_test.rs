// tests/release_test.rs
use draft_release::config::{parse_categories, Category};
use draft_release::context::Inputs;
use draft_release::host::MockHost;
use draft_release::release::run_release_workflow;

fn categories() -> Vec<Category> {
    parse_categories(
        r#"
changelog:
  categories:
    - title: 🚀 Features
      labels:
        - enhancement
    - title: 🐛 Bug Fixes
      labels:
        - bug
    - title: 💣 Breaking Changes
      labels:
        - change
"#,
    )
    .unwrap()
}

fn inputs() -> Inputs {
    Inputs {
        major_label: "change".to_string(),
        minor_label: "enhancement".to_string(),
        header: "header".to_string(),
        footer: "footer".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_workflow_creates_a_new_draft() {
    let mut host = MockHost::new("main", "### 🐛 Bug Fixes\n* fix A");
    host.add_release(1, "v1.0.0", "main", false);

    let summary = run_release_workflow(&host, &inputs(), &categories()).unwrap();

    assert_eq!(summary.next_release, "v1.0.1");
    assert_eq!(summary.previous_release, "v1.0.0");
    assert!(!summary.updated_existing);

    let created = host.created_requests();
    assert_eq!(created.len(), 1);
    assert!(host.updated_requests().is_empty());
    assert_eq!(created[0].tag_name, "v1.0.1");
    assert_eq!(created[0].target_commitish, "main");
    assert!(created[0].draft);
    assert!(created[0].body.contains("### 🐛 Bug Fixes"));
    assert!(created[0].body.starts_with("header\n\n"));
    assert!(created[0].body.ends_with("\n\nfooter"));
}

#[test]
fn test_workflow_updates_an_existing_draft() {
    let mut host = MockHost::new("main", "### 🐛 Bug Fixes\n* fix A");
    host.add_release(2, "v1.0.1", "main", true);
    host.add_release(1, "v1.0.0", "main", false);

    let summary = run_release_workflow(&host, &inputs(), &categories()).unwrap();

    assert_eq!(summary.next_release, "v1.0.1");
    assert!(summary.updated_existing);

    let updated = host.updated_requests();
    assert_eq!(updated.len(), 1);
    assert!(host.created_requests().is_empty());
    assert_eq!(updated[0].0, 2);
    assert_eq!(updated[0].1.tag_name, "v1.0.1");
}

#[test]
fn test_workflow_minor_bump_from_feature_section() {
    let mut host = MockHost::new("main", "### 🚀 Features\n* feature 1");
    host.add_release(1, "v1.0.0", "main", false);

    let summary = run_release_workflow(&host, &inputs(), &categories()).unwrap();
    assert_eq!(summary.next_release, "v1.1.0");
}

#[test]
fn test_workflow_major_bump_from_breaking_section() {
    let mut host = MockHost::new(
        "main",
        "### 💣 Breaking Changes\n* breaking\n### 🐛 Bug Fixes\n* fix",
    );
    host.add_release(1, "v1.2.3", "main", false);

    let summary = run_release_workflow(&host, &inputs(), &categories()).unwrap();
    assert_eq!(summary.next_release, "v2.0.0");
}

#[test]
fn test_workflow_first_release_starts_from_sentinel() {
    let host = MockHost::new("main", "### 🐛 Bug Fixes\n* fix A");

    let summary = run_release_workflow(&host, &inputs(), &categories()).unwrap();
    assert_eq!(summary.previous_release, "v0.0.0");
    assert_eq!(summary.next_release, "v0.0.1");
}

#[test]
fn test_workflow_resolves_latest_for_target_branch() {
    let mut host = MockHost::new("main", "### 🐛 Bug Fixes\n* fix A");
    host.add_release(3, "v1.0.2", "dev", false);
    host.add_release(2, "v1.0.1", "main", false);
    host.add_release(1, "v1.0.0", "main", false);

    let summary = run_release_workflow(&host, &inputs(), &categories()).unwrap();
    assert_eq!(summary.previous_release, "v1.0.1");
    assert_eq!(summary.next_release, "v1.0.2");
}

#[test]
fn test_workflow_sections_in_summary() {
    let mut host = MockHost::new("main", "### 🐛 Bug Fixes\n* fix A\n* fix B");
    host.add_release(1, "v1.0.0", "main", false);

    let summary = run_release_workflow(&host, &inputs(), &categories()).unwrap();
    assert_eq!(summary.sections.get("bug").unwrap().len(), 2);
    assert!(summary.sections.get("enhancement").unwrap().is_empty());
    assert!(summary.sections.get("change").unwrap().is_empty());
}

#[test]
fn test_workflow_template_failure_still_drafts() {
    let mut host = MockHost::new("main", "### 🐛 Bug Fixes\n* fix A");
    host.add_release(1, "v1.0.0", "main", false);

    let bad_inputs = Inputs {
        header: "broken {{version".to_string(),
        ..Default::default()
    };

    let summary = run_release_workflow(&host, &bad_inputs, &categories()).unwrap();
    assert!(summary.notes.warning.is_some());

    // The draft is still created with the best-effort body.
    let created = host.created_requests();
    assert_eq!(created.len(), 1);
    assert!(created[0].body.contains("### 🐛 Bug Fixes"));
    assert!(!created[0].body.contains("broken"));
}
