//! Loading extension documents and the collection merge policy.

use kubext_blocks::Block;
use kubext_core::{BuildStrategy, Error, KubernetesExtension, ResourceFileType};
use kubext_test_utils::TestProject;
use pretty_assertions::assert_eq;

fn image_names(extension: &KubernetesExtension) -> Vec<String> {
    extension
        .images()
        .unwrap_or_default()
        .iter()
        .filter_map(|i| i.name.clone())
        .collect()
}

#[test]
fn test_toml_document_binds_scalars_and_sub_blocks() {
    let project = TestProject::new();
    let path = project.write_document(
        "kubext.toml",
        r#"
[kubernetes]
offline = true
namespace = "dev"
pushRetries = 2
buildStrategy = "jib"
resourceFileType = "json"

[kubernetes.access]
masterUrl = "https://cluster:6443"
noProxy = ["localhost"]

[kubernetes.enricher]
excludes = ["jkube-expose"]

[kubernetes.enricher.config.jkube-service]
type = "NodePort"

[kubernetes.images.app]
name = "acme/app:1.0"

[kubernetes.images.app.build]
from = "eclipse-temurin:17"
ports = [8080, "9090/udp"]
"#,
    );
    let extension = project.load(&path);

    assert!(extension.offline_or_default().unwrap());
    assert_eq!(extension.namespace_or_default().unwrap().as_deref(), Some("dev"));
    assert_eq!(extension.push_retries_or_default().unwrap(), 2);
    assert_eq!(extension.build_strategy(), BuildStrategy::Jib);
    assert_eq!(extension.resource_file_type(), ResourceFileType::Json);
    assert_eq!(
        extension.access().unwrap().master_url.as_deref(),
        Some("https://cluster:6443")
    );
    let enricher = extension.enricher().unwrap();
    assert!(!enricher.is_enabled("jkube-expose"));
    assert_eq!(enricher.options("jkube-service").unwrap()["type"], "NodePort");

    let images = extension.images().unwrap();
    assert_eq!(images.len(), 1);
    let build = images[0].build.as_ref().unwrap();
    assert_eq!(build.ports, vec!["8080", "9090/udp"]);
}

#[test]
fn test_yaml_document_binds_like_toml() {
    let project = TestProject::new();
    let toml = project.write_document(
        "kubext.toml",
        "[kubernetes]\nnamespace = \"dev\"\n[kubernetes.images.a]\nname = \"a:1\"\n[kubernetes.images.b]\nname = \"b:1\"\n",
    );
    let yaml = project.write_document(
        "kubext.yml",
        "kubernetes:\n  namespace: dev\n  images:\n    a:\n      name: a:1\n    b:\n      name: b:1\n",
    );

    let from_toml = project.load(&toml).resolve_all().unwrap();
    let from_yaml = project.load(&yaml).resolve_all().unwrap();
    assert_eq!(from_toml, from_yaml);
}

#[test]
fn test_named_blocks_and_list_produce_identical_images() {
    let project = TestProject::new();
    let named = project.write_document(
        "named.toml",
        "[kubernetes.images.first]\nname = \"one\"\n[kubernetes.images.second]\nname = \"two\"\n",
    );
    let listed = project.write_document(
        "listed.toml",
        "[[kubernetes.images]]\nname = \"one\"\n[[kubernetes.images]]\nname = \"two\"\n",
    );

    let named = project.load(&named);
    let listed = project.load(&listed);
    assert_eq!(named.images(), listed.images());
    assert_eq!(image_names(&listed), vec!["one", "two"]);
}

#[test]
fn test_plural_declaration_discards_earlier_singular_images() {
    let project = TestProject::new();
    let mut extension = project.extension();
    extension.declare_image(&Block::new().with("name", "a")).unwrap();
    extension.declare_image(&Block::new().with("name", "b")).unwrap();
    extension
        .declare_images(&Block::new().with("only", Block::new().with("name", "c")))
        .unwrap();

    assert_eq!(image_names(&extension), vec!["c"]);
}

#[test]
fn test_singular_images_nested_in_plural_block_append() {
    let project = TestProject::new();
    let path = project.write_document(
        "nested.yml",
        "kubernetes:\n  image:\n    name: a\n  images:\n    image:\n      - name: b\n      - name: c\n",
    );
    let extension = project.load(&path);
    assert_eq!(image_names(&extension), vec!["a", "b", "c"]);
}

#[test]
fn test_rejected_plural_block_keeps_earlier_images() {
    let project = TestProject::new();
    let mut extension = project.extension();
    extension.declare_image(&Block::new().with("name", "z")).unwrap();

    let plural = Block::new()
        .with("image", Block::new().with("name", "a"))
        .with("bad", Block::new().with("nmae", "x"));
    let err = extension.declare_images(&plural).unwrap_err();

    assert!(matches!(err, Error::Binding(_)), "got: {err}");
    assert_eq!(image_names(&extension), vec!["z"]);
}

#[test]
fn test_empty_plural_block_keeps_collection_as_is() {
    let project = TestProject::new();
    let mut extension = project.extension();
    extension.declare_images(&Block::new()).unwrap();
    assert!(extension.images().is_none());

    extension.declare_image(&Block::new().with("name", "a")).unwrap();
    extension.declare_images(&Block::new()).unwrap();
    assert_eq!(image_names(&extension), vec!["a"]);
}

#[test]
fn test_mappings_are_bound_from_array_of_tables() {
    let project = TestProject::new();
    let path = project.write_document(
        "mappings.toml",
        "[[kubernetes.mapping]]\nkind = \"Var\"\nfilenameTypes = \"foo, bar\"\n[[kubernetes.mapping]]\nkind = \"Secret\"\nfilenameTypes = \"creds\"\n",
    );
    let extension = project.load(&path);
    let mappings = extension.mappings().unwrap();
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0].filenames(), vec!["foo", "bar"]);
    assert!(mappings.iter().all(|m| m.is_valid()));
}

#[test]
fn test_unknown_fields_abort_loading() {
    let project = TestProject::new();
    let path = project.write_document(
        "typo.toml",
        "[kubernetes]\nofline = true\nnamespce = \"dev\"\n",
    );
    let err = KubernetesExtension::load(project.project(), &path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown field(s) in kubernetes block: ofline, namespce"
    );
}

#[test]
fn test_type_mismatch_names_field_and_kinds() {
    let project = TestProject::new();
    let path = project.write_document("mismatch.toml", "[kubernetes]\npushRetries = \"three\"\n");
    let err = KubernetesExtension::load(project.project(), &path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Field 'pushRetries' in kubernetes block expects integer, found string"
    );
}

#[test]
fn test_unknown_field_in_sub_block_is_reported_with_its_kind() {
    let project = TestProject::new();
    let path = project.write_document(
        "access.yml",
        "kubernetes:\n  access:\n    masterURL: https://x\n",
    );
    let err = KubernetesExtension::load(project.project(), &path).unwrap_err();
    assert!(matches!(err, Error::Binding(_)), "got: {err}");
    assert_eq!(err.to_string(), "Unknown field(s) in access block: masterURL");
}

#[test]
fn test_document_without_kubernetes_block_is_rejected() {
    let project = TestProject::new();
    let path = project.write_document("other.toml", "[openshift]\noffline = true\n");
    let err = KubernetesExtension::load(project.project(), &path).unwrap_err();
    assert!(matches!(err, Error::MissingBlock { .. }), "got: {err}");
}

#[test]
fn test_effective_settings_serialize_declared_sub_configurations() {
    let project = TestProject::new();
    let path = project.write_document(
        "auth.toml",
        "[kubernetes.authConfig]\nusername = \"bot\"\n[kubernetes.authConfig.push]\npassword = \"s3cret\"\n",
    );
    let settings = project.load(&path).resolve_all().unwrap();
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["authConfig"]["username"], "bot");
    assert_eq!(json["authConfig"]["push"]["password"], "s3cret");
    assert!(json.get("images").is_none());
}
