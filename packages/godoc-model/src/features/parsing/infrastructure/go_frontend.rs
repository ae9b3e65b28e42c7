//! Tree-sitter Go front-end
//!
//! Resolves an import path to `<root>/<import path>`, parses every `.go`
//! file in that directory with tree-sitter-go and reports the package as a
//! `ParsedPackage`.
//!
//! File classes:
//! - names starting with `_` or `.` are ignored (listed, never parsed)
//! - test-suffixed files in a `*_test` package are external tests
//! - other test-suffixed files are same-package tests
//! - everything else is a source file; only source files contribute declarations

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use tree_sitter::{Node, Parser, Tree};
use walkdir::WalkDir;

use super::tree_sitter_utils::{
    children_by_field, doc_comment, field_text, find_child_by_kind, find_error_node, is_exported,
    node_span, node_text_owned, unquote,
};
use crate::config::DocModelConfig;
use crate::errors::{DocError, Result};
use crate::features::parsing::domain::{
    DeclSpan, FieldGroup, ParsedPackage, RawFuncDecl, RawTypeDecl, RawValueDecl,
};
use crate::features::parsing::ports::PackageSource;
use crate::shared::models::SpanBase;
use crate::shared::utils::{base_type_name, VARIADIC_MARKER};

const GO_EXTENSION: &str = ".go";
const XTEST_PACKAGE_SUFFIX: &str = "_test";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileClass {
    Source,
    Test,
    XTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Const,
    Var,
}

/// Directory entries relevant to a package
#[derive(Debug, Default)]
struct Listing {
    go_files: Vec<String>,
    subdirectories: Vec<String>,
}

/// `PackageSource` backed by a directory tree of Go sources
#[derive(Debug, Clone)]
pub struct TreeSitterGoFrontend {
    root: PathBuf,
    config: DocModelConfig,
}

impl TreeSitterGoFrontend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: DocModelConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DocModelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory an import path resolves to
    pub fn package_dir(&self, import_path: &str) -> PathBuf {
        self.root.join(import_path)
    }

    fn list_directory(&self, import_path: &str, dir: &Path) -> Result<Listing> {
        let mut listing = Listing::default();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| DocError::upstream(import_path, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if entry.file_type().is_dir() {
                if self.config.include_subdirectories && !name.starts_with('.') {
                    listing.subdirectories.push(name);
                }
            } else if name.ends_with(GO_EXTENSION) {
                listing.go_files.push(name);
            }
        }

        Ok(listing)
    }
}

impl PackageSource for TreeSitterGoFrontend {
    fn load(&self, import_path: &str) -> Result<ParsedPackage> {
        let dir = self.package_dir(import_path);
        if !dir.is_dir() {
            warn!("Package directory not found: {}", dir.display());
            return Err(DocError::upstream(
                import_path,
                format!("directory {} does not exist", dir.display()),
            ));
        }

        let listing = self.list_directory(import_path, &dir)?;
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| DocError::upstream(import_path, format!("failed to load Go grammar: {e}")))?;

        let mut parsed = ParsedPackage::new("", import_path);
        parsed.subdirectories = listing.subdirectories;

        let mut imports = BTreeSet::new();
        let mut test_imports = BTreeSet::new();
        let mut xtest_imports = BTreeSet::new();
        let mut decls = Declarations::new(self.config.span_base);

        for name in listing.go_files {
            if is_ignored(&name) {
                debug!("Ignoring {}", name);
                parsed.files.ignored_go_files.push(name);
                continue;
            }

            let path = dir.join(&name);
            let bytes =
                fs::read(&path).map_err(|e| DocError::upstream(import_path, format!("{name}: {e}")))?;
            let text = String::from_utf8(bytes)
                .map_err(|_| DocError::upstream(import_path, format!("{name}: not valid UTF-8")))?;
            let tree = parse_file(&mut parser, import_path, &name, &text)?;
            let root = tree.root_node();

            let package_name = package_name(&root, &text);
            let class = if !name.ends_with(&self.config.test_file_suffix) {
                FileClass::Source
            } else if package_name.ends_with(XTEST_PACKAGE_SUFFIX) {
                FileClass::XTest
            } else {
                FileClass::Test
            };
            debug!("Parsed {} as {:?} file of package {}", name, class, package_name);

            let file_imports = file_imports(&root, &text);
            match class {
                FileClass::Source => {
                    if parsed.name.is_empty() {
                        parsed.name = package_name;
                    } else if parsed.name != package_name {
                        return Err(DocError::upstream(
                            import_path,
                            format!(
                                "found packages {} and {} in {}",
                                parsed.name,
                                package_name,
                                dir.display()
                            ),
                        ));
                    }
                    if parsed.doc.is_empty() {
                        if let Some(clause) = find_child_by_kind(&root, "package_clause") {
                            parsed.doc = doc_comment(&clause, &text);
                        }
                    }
                    imports.extend(file_imports);
                    decls.collect(&root, &text, &name);
                    parsed.files.go_files.push(name.clone());
                }
                FileClass::Test => {
                    test_imports.extend(file_imports);
                    parsed.files.test_go_files.push(name.clone());
                }
                FileClass::XTest => {
                    xtest_imports.extend(file_imports);
                    parsed.files.xtest_go_files.push(name.clone());
                }
            }

            parsed.sources.insert(name, text);
        }

        if parsed.files.go_files.is_empty() {
            warn!("No buildable Go source files in {}", dir.display());
            return Err(DocError::missing_package(import_path, dir));
        }

        parsed.imports = imports.into_iter().collect();
        parsed.test_imports = test_imports.into_iter().collect();
        parsed.xtest_imports = xtest_imports.into_iter().collect();
        decls.finish(&mut parsed, self.config.exported_only);

        info!(
            "Loaded package {} from {}: {} files, {} types, {} funcs",
            import_path,
            dir.display(),
            parsed.files.go_files.len(),
            parsed.types.len(),
            parsed.funcs.len()
        );
        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "tree-sitter-go"
    }
}

fn is_ignored(file_name: &str) -> bool {
    file_name.starts_with('_') || file_name.starts_with('.')
}

fn parse_file(parser: &mut Parser, import_path: &str, name: &str, text: &str) -> Result<Tree> {
    let tree = parser
        .parse(text, None)
        .ok_or_else(|| DocError::upstream(import_path, format!("{name}: parser returned no tree")))?;

    if let Some(error) = find_error_node(&tree.root_node()) {
        let pos = error.start_position();
        return Err(DocError::upstream(
            import_path,
            format!("{}:{}:{}: syntax error", name, pos.row + 1, pos.column + 1),
        ));
    }
    Ok(tree)
}

fn package_name(root: &Node, source: &str) -> String {
    find_child_by_kind(root, "package_clause")
        .and_then(|clause| find_child_by_kind(&clause, "package_identifier"))
        .map(|id| node_text_owned(&id, source))
        .unwrap_or_default()
}

fn file_imports(root: &Node, source: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        if decl.kind() != "import_declaration" {
            continue;
        }
        let mut specs = Vec::new();
        let mut decl_cursor = decl.walk();
        for child in decl.named_children(&mut decl_cursor) {
            match child.kind() {
                "import_spec" => specs.push(child),
                "import_spec_list" => {
                    let mut list_cursor = child.walk();
                    specs.extend(
                        child
                            .named_children(&mut list_cursor)
                            .filter(|s| s.kind() == "import_spec"),
                    );
                }
                _ => {}
            }
        }
        paths.extend(
            specs
                .iter()
                .filter_map(|spec| field_text(spec, "path", source))
                .map(|path| unquote(&path)),
        );
    }
    paths
}

/// Declarations gathered across the source files of one package
#[derive(Debug)]
struct Declarations {
    base: SpanBase,
    /// Const groups with the type every spec declares, if they agree
    consts: Vec<(RawValueDecl, Option<String>)>,
    vars: Vec<(RawValueDecl, Option<String>)>,
    funcs: Vec<RawFuncDecl>,
    types: Vec<RawTypeDecl>,
}

impl Declarations {
    fn new(base: SpanBase) -> Self {
        Self {
            base,
            consts: Vec::new(),
            vars: Vec::new(),
            funcs: Vec::new(),
            types: Vec::new(),
        }
    }

    fn collect(&mut self, root: &Node, source: &str, file: &str) {
        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            match node.kind() {
                "const_declaration" => {
                    let group = self.value_group(&node, ValueKind::Const, source, file);
                    self.consts.push(group);
                }
                "var_declaration" => {
                    let group = self.value_group(&node, ValueKind::Var, source, file);
                    self.vars.push(group);
                }
                "function_declaration" | "method_declaration" => {
                    if let Some(func) = self.func(&node, source, file) {
                        self.funcs.push(func);
                    }
                }
                "type_declaration" => {
                    let types = self.type_decls(&node, source, file);
                    self.types.extend(types);
                }
                _ => {}
            }
        }
    }

    fn span(&self, node: &Node, file: &str) -> DeclSpan {
        DeclSpan {
            file: file.to_string(),
            span: node_span(node, self.base),
        }
    }

    fn value_group(
        &self,
        node: &Node,
        kind: ValueKind,
        source: &str,
        file: &str,
    ) -> (RawValueDecl, Option<String>) {
        let (spec_kind, list_kind) = match kind {
            ValueKind::Const => ("const_spec", "const_spec_list"),
            ValueKind::Var => ("var_spec", "var_spec_list"),
        };

        let mut specs = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == spec_kind {
                specs.push(child);
            } else if child.kind() == list_kind {
                let mut list_cursor = child.walk();
                specs.extend(
                    child
                        .named_children(&mut list_cursor)
                        .filter(|s| s.kind() == spec_kind),
                );
            }
        }

        let mut names = Vec::new();
        let mut spec_types = Vec::with_capacity(specs.len());
        let mut previous: Option<String> = None;
        for spec in &specs {
            names.extend(
                children_by_field(spec, "name")
                    .iter()
                    .map(|n| node_text_owned(n, source)),
            );

            // A const spec without type or value repeats the previous spec
            let declared = field_text(spec, "type", source);
            let spec_type = match (declared, kind) {
                (Some(t), _) => Some(t),
                (None, ValueKind::Const) if spec.child_by_field_name("value").is_none() => {
                    previous.clone()
                }
                _ => None,
            };
            previous = spec_type.clone();
            spec_types.push(spec_type);
        }

        let owner = match spec_types.split_first() {
            Some((Some(first), rest)) if rest.iter().all(|t| t.as_ref() == Some(first)) => {
                Some(first.clone())
            }
            _ => None,
        };

        let decl = RawValueDecl {
            names,
            doc: doc_comment(node, source),
            span: self.span(node, file),
        };
        (decl, owner)
    }

    fn func(&self, node: &Node, source: &str, file: &str) -> Option<RawFuncDecl> {
        let name = field_text(node, "name", source)?;

        let receiver = node
            .child_by_field_name("receiver")
            .and_then(|list| field_groups(&list, source).into_iter().next());
        let params = node
            .child_by_field_name("parameters")
            .map(|list| field_groups(&list, source))
            .unwrap_or_default();
        let results = match node.child_by_field_name("result") {
            Some(result) if result.kind() == "parameter_list" => field_groups(&result, source),
            Some(result) => vec![FieldGroup::unnamed(node_text_owned(&result, source))],
            None => Vec::new(),
        };

        Some(RawFuncDecl {
            name,
            doc: doc_comment(node, source),
            span: self.span(node, file),
            receiver,
            params,
            results,
        })
    }

    fn type_decls(&self, node: &Node, source: &str, file: &str) -> Vec<RawTypeDecl> {
        let mut cursor = node.walk();
        let specs: Vec<Node> = node
            .named_children(&mut cursor)
            .filter(|c| matches!(c.kind(), "type_spec" | "type_alias"))
            .collect();
        let single = specs.len() == 1;

        specs
            .iter()
            .filter_map(|spec| {
                let name = field_text(spec, "name", source)?;
                let mut type_expr = field_text(spec, "type", source).unwrap_or_default();
                if spec.kind() == "type_alias" {
                    type_expr.insert_str(0, "= ");
                }
                // A lone spec is documented and quoted as the whole declaration
                let (doc, span) = if single {
                    (doc_comment(node, source), self.span(node, file))
                } else {
                    (doc_comment(spec, source), self.span(spec, file))
                };
                Some(RawTypeDecl {
                    name,
                    doc,
                    span,
                    type_expr,
                    consts: Vec::new(),
                    vars: Vec::new(),
                })
            })
            .collect()
    }

    /// Apply the export filter and attach typed groups to their types
    fn finish(self, parsed: &mut ParsedPackage, exported_only: bool) {
        let keep = |name: &str| !exported_only || is_exported(name);

        let mut types: Vec<RawTypeDecl> = self.types.into_iter().filter(|t| keep(t.name.as_str())).collect();
        let type_names: HashSet<String> = types.iter().map(|t| t.name.clone()).collect();

        for (kind, groups) in [(ValueKind::Const, self.consts), (ValueKind::Var, self.vars)] {
            for (mut decl, owner) in groups {
                decl.names.retain(|n| keep(n.as_str()));
                if decl.names.is_empty() {
                    continue;
                }
                let target = match owner.filter(|o| type_names.contains(o)) {
                    Some(owner) => types.iter_mut().find(|t| t.name == owner).map(|t| match kind {
                        ValueKind::Const => &mut t.consts,
                        ValueKind::Var => &mut t.vars,
                    }),
                    None => None,
                };
                match (target, kind) {
                    (Some(list), _) => list.push(decl),
                    (None, ValueKind::Const) => parsed.consts.push(decl),
                    (None, ValueKind::Var) => parsed.vars.push(decl),
                }
            }
        }

        parsed.funcs = self
            .funcs
            .into_iter()
            .filter(|f| {
                keep(f.name.as_str())
                    && f.receiver
                        .as_ref()
                        .map_or(true, |r| {
                            base_type_name(&r.type_expr).is_some_and(|name| keep(name))
                        })
            })
            .collect();
        parsed.types = types;
    }
}

/// Field groups of a `parameter_list` node
fn field_groups(list: &Node, source: &str) -> Vec<FieldGroup> {
    let mut groups = Vec::new();
    let mut cursor = list.walk();
    for child in list.named_children(&mut cursor) {
        let variadic = match child.kind() {
            "parameter_declaration" => false,
            "variadic_parameter_declaration" => true,
            _ => continue,
        };
        let names: Vec<String> = children_by_field(&child, "name")
            .iter()
            .map(|n| node_text_owned(n, source))
            .collect();
        let mut type_expr = field_text(&child, "type", source).unwrap_or_default();
        if variadic {
            type_expr.insert_str(0, VARIADIC_MARKER);
        }
        groups.push(FieldGroup::new(names, type_expr));
    }
    groups
}
