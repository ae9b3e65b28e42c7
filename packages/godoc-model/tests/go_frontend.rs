//! End-to-end tests: Go sources on disk → tree-sitter front-end → Package

mod common;

use common::*;
use godoc_model::{
    DocError, DocModelConfig, Documented, Function, LoadPackageUseCase, PackageAssembler,
    PackageSource, SpanBase, TreeSitterGoFrontend, Variable,
};
use godoc_model::config::ConfigError;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn use_case(root: &TempDir, config: DocModelConfig) -> LoadPackageUseCase<TreeSitterGoFrontend> {
    LoadPackageUseCase::new(
        TreeSitterGoFrontend::new(root.path()).with_config(config.clone()),
        PackageAssembler::new(config),
    )
}

fn buffer_package(root: &TempDir) {
    write_package(
        root.path(),
        "example.com/buf",
        &[
            ("buffer.go", BUFFER_SRC),
            ("buffer_test.go", BUFFER_TEST_SRC),
            ("example_test.go", BUFFER_XTEST_SRC),
            ("_scratch.go", "package buf\n\nfunc Broken( {\n"),
        ],
    );
    std::fs::create_dir_all(root.path().join("example.com/buf/internal")).unwrap();
    std::fs::create_dir_all(root.path().join("example.com/buf/.git")).unwrap();
}

#[test]
fn test_const_block_and_error_variable_from_source() {
    let root = TempDir::new().unwrap();
    write_package(root.path(), "example.com/shapes", &[("shapes.go", CONST_AND_ERROR_SRC)]);

    let package = use_case(&root, DocModelConfig::default())
        .execute("example.com/shapes")
        .unwrap();

    assert_eq!(package.name(), "shapes");
    assert_eq!(package.doc(), "Package shapes draws shapes.\n");
    assert_eq!(package.imports(), ["errors"]);

    let consts = &package.constant_blocks()[0];
    assert_eq!(consts.type_name(), "");
    assert_eq!(consts.doc(), "Limits.\n");
    assert_eq!(consts.source(), Some("const (\n\tA = 1\n\tB = 2\n)"));

    let vars = &package.variable_blocks()[0];
    let errors: Vec<&str> = vars.errors().map(Variable::name).collect();
    assert_eq!(errors, ["ErrX"]);
    assert_eq!(vars.source(), Some("var ErrX = errors.New(\"x\")"));
}

#[test]
fn test_buffer_package() {
    let root = TempDir::new().unwrap();
    buffer_package(&root);

    let package = use_case(&root, DocModelConfig::default())
        .execute("example.com/buf")
        .unwrap();

    assert_eq!(package.files(), ["_scratch.go", "buffer.go"]);
    assert_eq!(package.test_files(), ["buffer_test.go", "example_test.go"]);
    assert_eq!(package.subdirectories(), ["internal"]);
    assert_eq!(package.imports(), ["errors", "io", "strings"]);
    assert_eq!(package.test_imports(), ["example.com/buf", "testing"]);

    let type_names: Vec<&str> = package.types().iter().map(|t| t.name()).collect();
    assert_eq!(type_names, ["Mode", "Buffer"]);

    let buffer = package.type_named("Buffer").unwrap();
    assert_eq!(buffer.doc(), "Buffer is a growable byte buffer.\n");
    assert!(buffer.source().unwrap().starts_with("type Buffer struct {"));

    let constructors: Vec<&str> = buffer.functions().iter().map(Function::name).collect();
    assert_eq!(constructors, ["NewBuffer"]);

    let methods: Vec<(&str, bool)> = buffer
        .methods()
        .iter()
        .map(|m| (m.name(), m.pointer_receiver()))
        .collect();
    assert_eq!(methods, [("Write", true), ("Len", false)]);

    let write = buffer.method_named("Write").unwrap();
    assert_eq!(write.inputs()[0].type_name(), "[]byte");
    let outputs: Vec<(&str, &str)> = write
        .outputs()
        .iter()
        .map(|p| (p.name(), p.type_name()))
        .collect();
    assert_eq!(outputs, [("n", "int"), ("err", "error")]);

    // Package-level functions are the ones no type claims; unexported ones are dropped
    let functions: Vec<&str> = package.functions().iter().map(Function::name).collect();
    assert_eq!(functions, ["Join", "Copy"]);

    let join = package.function_named("Join").unwrap();
    let rest = &join.inputs()[1];
    assert_eq!(rest.type_name(), "...string");
    assert!(!rest.pointer());
    assert!(package.function_named("Copy").unwrap().inputs()[1].pointer());
}

#[test]
fn test_typed_constants_follow_their_type() {
    let root = TempDir::new().unwrap();
    buffer_package(&root);

    let package = use_case(&root, DocModelConfig::default())
        .execute("example.com/buf")
        .unwrap();

    let blocks: Vec<(&str, Vec<&str>)> = package
        .constant_blocks()
        .iter()
        .map(|b| (b.type_name(), b.constants().iter().map(|c| c.name()).collect()))
        .collect();
    assert_eq!(blocks, [("Mode", vec!["Linear", "Doubling"])]);

    let vars = &package.variable_blocks()[0];
    let variables: Vec<&str> = vars.variables().iter().map(Variable::name).collect();
    let errors: Vec<&str> = vars.errors().map(Variable::name).collect();
    assert_eq!(variables, ["ErrFull", "DefaultSize"]);
    assert_eq!(errors, ["ErrFull"]);
}

#[test]
fn test_unexported_declarations_on_request() {
    let root = TempDir::new().unwrap();
    buffer_package(&root);

    let config = DocModelConfig::default().with_exported_only(false);
    let package = use_case(&root, config).execute("example.com/buf").unwrap();

    assert!(package.function_named("helper").is_some());
}

#[test]
fn test_one_based_front_end_round_trip() {
    let root = TempDir::new().unwrap();
    write_package(root.path(), "example.com/shapes", &[("shapes.go", CONST_AND_ERROR_SRC)]);

    let config = DocModelConfig::default().with_span_base(SpanBase::OneBased);
    let package = use_case(&root, config).execute("example.com/shapes").unwrap();

    assert_eq!(
        package.constant_blocks()[0].source(),
        Some("const (\n\tA = 1\n\tB = 2\n)")
    );
}

#[test]
fn test_missing_import_path_is_upstream_failure() {
    let root = TempDir::new().unwrap();

    let err = use_case(&root, DocModelConfig::default())
        .execute("example.com/nowhere")
        .unwrap_err();

    assert!(matches!(err, DocError::UpstreamParse { .. }));
    assert_eq!(err.import_path(), Some("example.com/nowhere"));
}

#[test]
fn test_directory_without_sources_is_missing_package() {
    let root = TempDir::new().unwrap();
    write_package(
        root.path(),
        "example.com/onlytests",
        &[("a_test.go", BUFFER_TEST_SRC), ("README.md", "# docs\n")],
    );

    let err = TreeSitterGoFrontend::new(root.path())
        .load("example.com/onlytests")
        .unwrap_err();

    assert!(matches!(err, DocError::MissingPackage { .. }));
}

#[test]
fn test_syntax_error_is_upstream_failure() {
    let root = TempDir::new().unwrap();
    write_package(
        root.path(),
        "example.com/bad",
        &[("bad.go", "package bad\n\nfunc Broken( {\n")],
    );

    let err = TreeSitterGoFrontend::new(root.path())
        .load("example.com/bad")
        .unwrap_err();

    assert!(matches!(err, DocError::UpstreamParse { .. }));
    assert!(err.to_string().contains("bad.go"));
}

#[test]
fn test_batch_keeps_order_and_isolates_failures() {
    let root = TempDir::new().unwrap();
    buffer_package(&root);
    write_package(root.path(), "example.com/shapes", &[("shapes.go", CONST_AND_ERROR_SRC)]);

    let paths = vec![
        "example.com/shapes".to_string(),
        "example.com/nowhere".to_string(),
        "example.com/buf".to_string(),
    ];
    let results = use_case(&root, DocModelConfig::default()).execute_batch(&paths);

    assert_eq!(results[0].as_ref().unwrap().name(), "shapes");
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().name(), "buf");
}

#[test]
fn test_use_case_from_config_file() {
    let root = TempDir::new().unwrap();
    buffer_package(&root);
    let config_path = root.path().join("godoc.yaml");
    std::fs::write(&config_path, "version: 1\nexported_only: false\ncomment_width: 40\n").unwrap();

    let use_case = LoadPackageUseCase::from_config_file(root.path(), &config_path).unwrap();
    let package = use_case.execute("example.com/buf").unwrap();

    assert!(package.function_named("helper").is_some());
}

#[test]
fn test_invalid_config_file_is_config_error() {
    let root = TempDir::new().unwrap();
    let config_path = root.path().join("godoc.yaml");
    std::fs::write(&config_path, "comment_width: 40\n").unwrap();

    let err = LoadPackageUseCase::from_config_file(root.path(), &config_path)
        .err()
        .unwrap();
    assert!(matches!(err, DocError::Config(ConfigError::MissingVersion)));

    let missing = LoadPackageUseCase::from_config_file(root.path(), root.path().join("absent.yaml"))
        .err()
        .unwrap();
    assert!(matches!(missing, DocError::Config(ConfigError::Io(_))));
}
