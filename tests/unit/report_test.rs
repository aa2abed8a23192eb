//! Tests for full validation runs through the library API

use projcheck::config::ValidatorConfig;
use projcheck::core::models::{BuildConfigOutcome, PathKind, Summary};
use projcheck::core::services::{path_exists, structure, validate};

use crate::common::{COMPLETE_GRADLE, ProjectBuilder};

fn render(project: &ProjectBuilder) -> (String, u8) {
    let report = validate(project.path(), &ValidatorConfig::default());
    let mut buf = Vec::new();
    report.write_human(&mut buf, false).unwrap();
    (String::from_utf8(buf).unwrap(), report.exit_code())
}

// =============================================================================
// Existence
// =============================================================================

#[test]
fn existence_matches_filesystem() {
    let project = ProjectBuilder::complete();
    let config = ValidatorConfig::default();
    for item in config.expected_items() {
        assert!(path_exists(&project.path().join(&item.path), item.kind), "{}", item.path);
    }

    let empty = ProjectBuilder::empty();
    for item in config.expected_items() {
        assert!(!path_exists(&empty.path().join(&item.path), item.kind), "{}", item.path);
    }
}

#[test]
fn directory_kind_is_not_satisfied_by_file() {
    let project = ProjectBuilder::empty().file("app/src/main/res", "");
    assert!(!path_exists(&project.path().join("app/src/main/res"), PathKind::Directory));
    assert!(path_exists(&project.path().join("app/src/main/res"), PathKind::File));
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn empty_project_reports_everything_missing() {
    let project = ProjectBuilder::empty();
    let report = validate(project.path(), &ValidatorConfig::default());

    assert!(report.structure.iter().all(|r| !r.exists));
    assert!(!report.summary.structure_ok);
    assert!(report.sources.is_empty());
    assert!(matches!(report.build, BuildConfigOutcome::DescriptorMissing { .. }));
    assert_eq!(report.exit_code(), 1);

    let (text, _) = render(&project);
    let expected = ValidatorConfig::default().expected_items().count();
    assert_eq!(text.matches("[MISSING]").count(), expected);
    assert!(text.contains(Summary::FAIL_MESSAGE));
}

#[test]
fn complete_project_passes() {
    let project = ProjectBuilder::complete();
    let (text, code) = render(&project);

    assert_eq!(code, 0);
    assert!(!text.contains("[MISSING]"));
    assert!(!text.contains("[WARNING]"));
    assert!(text.contains("validation passed"));
    assert_eq!(text.matches("heuristic check passed").count(), 5);
}

#[test]
fn missing_dependency_is_the_only_warning() {
    let gradle = COMPLETE_GRADLE.replace("androidx.room:room-runtime", "androidx.room:room-ktx");
    let project = ProjectBuilder::complete().file("build.gradle", &gradle);
    let report = validate(project.path(), &ValidatorConfig::default());

    assert_eq!(
        report.build,
        BuildConfigOutcome::Checked {
            path: "build.gradle".to_string(),
            missing_plugins: vec![],
            missing_dependencies: vec!["androidx.room:room-runtime".to_string()],
        }
    );
    assert!(report.summary.structure_ok);
    assert!(report.summary.syntax_ok);
    assert!(!report.summary.config_ok);

    let (text, code) = render(&project);
    assert_eq!(code, 1);
    assert_eq!(text.matches("[WARNING]").count(), 1);
    assert!(text.contains("Missing dependencies: [androidx.room:room-runtime]"));
}

#[test]
fn missing_source_is_not_scanned() {
    let project = ProjectBuilder::complete()
        .remove("app/src/main/java/com/audioplayer/ui/AudioPlayerApp.kt");
    let report = validate(project.path(), &ValidatorConfig::default());

    assert!(!report.summary.structure_ok);
    assert!(report.summary.syntax_ok);
    assert_eq!(report.sources.len(), 4);
}

#[test]
fn structure_only_ignores_sources_and_descriptor() {
    let project = ProjectBuilder::complete()
        .file("build.gradle", "")
        .file("app/src/main/java/com/audioplayer/MainActivity.kt", "{{{");
    let report = structure(project.path(), &ValidatorConfig::default());

    assert!(report.structure_ok);
    assert_eq!(report.missing_count(), 0);
    assert_eq!(report.groups.len(), 5);
}
