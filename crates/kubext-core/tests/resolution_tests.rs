//! Three-tier resolution across the whole settings catalog.

use std::path::{Path, PathBuf};

use kubext_blocks::{Block, Value};
use kubext_core::settings::keys;
use kubext_core::{CATALOG, Error, SettingKind, SettingSpec};
use kubext_test_utils::TestProject;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{Value as Json, json};

/// Resolve everything and return it keyed by block field name.
fn effective(project: &TestProject, block: &Block) -> Json {
    let mut extension = project.extension();
    extension.apply_block(block).unwrap();
    serde_json::to_value(extension.resolve_all().unwrap()).unwrap()
}

fn path_json(path: PathBuf) -> Json {
    json!(path.to_string_lossy())
}

/// Expand the `<base>`/`<build>`/`<output>` placeholders of a catalog default.
fn expected_default(spec: &SettingSpec, root: &Path) -> Json {
    match (spec.kind, spec.default) {
        (SettingKind::Boolean, raw) => json!(raw == "true"),
        (SettingKind::Integer, raw) => json!(raw.parse::<i64>().unwrap()),
        (_, "-") => Json::Null,
        (_, "<registry>") => json!("docker.io"),
        (SettingKind::Path, raw) => {
            let output = root.join("build").join("classes").join("java").join("main");
            let expanded = raw
                .replace("<output>", &output.to_string_lossy())
                .replace("<build>", &root.join("build").to_string_lossy())
                .replace("<base>", &root.to_string_lossy());
            path_json(PathBuf::from(expanded))
        }
        (_, raw) => json!(raw),
    }
}

/// A value to declare in the block for `spec`, and what it resolves to.
fn declared_sample(spec: &SettingSpec) -> (Value, Json) {
    match spec.kind {
        SettingKind::Boolean => {
            let flipped = spec.default != "true";
            (Value::Boolean(flipped), json!(flipped))
        }
        SettingKind::Integer => (Value::Integer(42), json!(42)),
        SettingKind::String => (Value::from("declared"), json!("declared")),
        SettingKind::Path => (Value::from("/declared/dir"), json!("/declared/dir")),
        SettingKind::Enumeration if spec.name == "buildStrategy" => (Value::from("s2i"), json!("s2i")),
        SettingKind::Enumeration => (Value::from("json"), json!("json")),
    }
}

/// A property value for `spec`, and what it resolves to.
fn property_sample(spec: &SettingSpec, root: &Path) -> (&'static str, Json) {
    match spec.kind {
        SettingKind::Boolean if spec.default == "true" => ("true", json!(true)),
        SettingKind::Boolean => ("false", json!(false)),
        SettingKind::Integer => ("7", json!(7)),
        SettingKind::String => ("override", json!("override")),
        SettingKind::Path => ("out/override", path_json(root.join("out/override"))),
        SettingKind::Enumeration if spec.name == "buildStrategy" => ("jib", json!("jib")),
        SettingKind::Enumeration => ("yaml", json!("yaml")),
    }
}

#[test]
fn test_every_setting_falls_back_to_its_default() {
    let project = TestProject::new();
    let resolved = effective(&project, &Block::new());
    for spec in CATALOG {
        assert_eq!(
            resolved[spec.name],
            expected_default(spec, project.root()),
            "default of {}",
            spec.key
        );
    }
}

#[test]
fn test_every_declared_value_beats_the_default() {
    let project = TestProject::new();
    for spec in CATALOG {
        let (value, expected) = declared_sample(spec);
        let resolved = effective(&project, &Block::new().with(spec.name, value));
        assert_eq!(resolved[spec.name], expected, "declared {}", spec.name);
    }
}

#[test]
fn test_every_property_beats_the_declared_value() {
    for spec in CATALOG {
        let probe = TestProject::new();
        let (raw, expected) = property_sample(spec, probe.root());
        let project = probe.property(spec.key, raw);
        let (declared, _) = declared_sample(spec);
        let resolved = effective(&project, &Block::new().with(spec.name, declared));
        assert_eq!(resolved[spec.name], expected, "property {}", spec.key);
    }
}

#[test]
fn test_pull_registry_defaults_to_effective_registry() {
    let project = TestProject::new().property(keys::REGISTRY, "quay.io");
    let resolved = effective(&project, &Block::new());
    assert_eq!(resolved["pullRegistry"], json!("quay.io"));

    let project = TestProject::new();
    let resolved = effective(&project, &Block::new().with("registry", "ghcr.io"));
    assert_eq!(resolved["pullRegistry"], json!("ghcr.io"));
}

#[test]
fn test_path_property_is_joined_onto_base_directory() {
    let project = TestProject::new().property(keys::KUBERNETES_MANIFEST, "out/m.yml");
    let mut extension = project.extension();
    extension
        .apply_block(&Block::new().with("kubernetesManifest", "/somewhere/else.yml"))
        .unwrap();
    assert_eq!(
        extension.kubernetes_manifest_or_default(),
        project.root().join("out").join("m.yml")
    );
}

#[test]
fn test_absolute_path_property_replaces_base_directory() {
    let project = TestProject::new().property(keys::WORK_DIR, "/tmp/jkube-work");
    assert_eq!(
        project.extension().work_directory_or_default(),
        PathBuf::from("/tmp/jkube-work")
    );
}

#[test]
fn test_declared_relative_path_is_returned_literally() {
    let project = TestProject::new();
    let mut extension = project.extension();
    extension
        .apply_block(&Block::new().with("jsonLogDir", "logs/apply"))
        .unwrap();
    assert_eq!(extension.json_log_dir_or_default(), PathBuf::from("logs/apply"));
}

#[rstest]
#[case(keys::PUSH_RETRIES, "abc", "integer")]
#[case(keys::MAX_CONNECTIONS, "1.5", "integer")]
#[case(keys::SERVICE_URL_WAIT_SECONDS, " 5", "integer")]
#[case(keys::BUILD_STRATEGY, "JIB", "build strategy")]
#[case(keys::RESOURCE_TYPE, "yml", "resource file type")]
fn test_malformed_property_is_a_parse_error(
    #[case] key: &str,
    #[case] raw: &str,
    #[case] expected_kind: &str,
) {
    let project = TestProject::new().property(key, raw);
    let err = project.extension().resolve_all().unwrap_err();
    match err {
        Error::Parse { key: k, value, kind } => {
            assert_eq!(k, key);
            assert_eq!(value, raw);
            assert_eq!(kind, expected_kind);
        }
        other => panic!("expected parse error, got: {other}"),
    }
}

#[test]
fn test_push_retries_parse_error_does_not_fall_back() {
    let project = TestProject::new().property(keys::PUSH_RETRIES, "abc");
    let err = project.extension().push_retries_or_default().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Property jkube.docker.push.retries has invalid integer value 'abc'"
    );
}

#[rstest]
#[case("jib", false)]
#[case("docker", true)]
#[case("s2i", true)]
#[case("buildpacks", true)]
fn test_docker_access_follows_build_strategy_property(
    #[case] strategy: &str,
    #[case] required: bool,
) {
    let project = TestProject::new().property(keys::BUILD_STRATEGY, strategy);
    assert_eq!(
        project.extension().is_docker_access_required().unwrap(),
        required
    );
}

#[test]
fn test_build_strategy_field_used_without_property() {
    let project = TestProject::new();
    let mut extension = project.extension();
    extension.set_build_strategy(kubext_core::BuildStrategy::Jib);
    assert!(!extension.is_docker_access_required().unwrap());
}

#[rstest]
#[case("TRUE", true)]
#[case("False", false)]
#[case("true", true)]
#[case("yes", false)]
#[case("1", false)]
#[case("on", false)]
fn test_boolean_property_is_true_only_for_true(#[case] raw: &str, #[case] expected: bool) {
    let project = TestProject::new().property(keys::SKIP, raw);
    assert_eq!(project.extension().skip_or_default().unwrap(), expected);
}

proptest! {
    #[test]
    fn test_blank_property_never_overrides(blank in "[ \t]{0,8}") {
        let project = TestProject::new().property(keys::OFFLINE, &blank);
        let mut extension = project.extension();
        extension.apply_block(&Block::new().with("offline", true)).unwrap();
        prop_assert!(extension.offline_or_default().unwrap());
    }

    #[test]
    fn test_string_property_is_returned_verbatim(raw in "[a-zA-Z0-9 ._-]{0,16}[a-zA-Z0-9]") {
        let project = TestProject::new().property(keys::NAMESPACE, &raw);
        prop_assert_eq!(project.extension().namespace_or_default().unwrap(), Some(raw));
    }
}
