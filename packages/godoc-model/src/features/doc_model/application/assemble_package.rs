//! Assemble package use case
//!
//! Single synchronous pass from a `ParsedPackage` to an immutable `Package`.
//! Assembly never fails: unreadable spans leave a `None` source on the one
//! entity they belong to and the rest of the package is still built.

use std::time::Instant;

use tracing::{debug, info};

use super::render_comments::CommentRenderer;
use crate::config::DocModelConfig;
use crate::features::doc_model::domain::{
    ConstantBlock, Function, Method, Package, Type, VariableBlock,
};
use crate::features::doc_model::infrastructure::{
    returns_type, BlockBuilder, ErrorNameClassifier, FunctionBuilder, SourceResolver,
    TypeAssembler,
};
use crate::features::parsing::domain::{PackageFiles, ParsedPackage};

/// Builds the documentation model of one parsed package
#[derive(Debug, Clone, Default)]
pub struct PackageAssembler {
    config: DocModelConfig,
    classifier: ErrorNameClassifier,
}

impl PackageAssembler {
    pub fn new(config: DocModelConfig) -> Self {
        Self {
            config,
            classifier: ErrorNameClassifier::new(),
        }
    }

    pub fn with_classifier(mut self, classifier: ErrorNameClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &DocModelConfig {
        &self.config
    }

    /// Comment renderer at the configured `comment_width`
    pub fn comment_renderer(&self) -> CommentRenderer {
        CommentRenderer::from_config(&self.config)
    }

    pub fn assemble(&self, parsed: &ParsedPackage) -> Package {
        let start = Instant::now();
        let resolver = SourceResolver::new(&parsed.sources, self.config.span_base);

        let (files, test_files) = partition_files(&parsed.files, &self.config.test_file_suffix);

        let (constant_blocks, variable_blocks) = self.blocks(parsed, resolver);

        // Functions and methods first: every type binds against the full lists
        let functions = FunctionBuilder::new(resolver);
        let mut all_functions: Vec<Function> = Vec::new();
        let mut all_methods: Vec<Method> = Vec::new();
        for decl in &parsed.funcs {
            if decl.is_method() {
                all_methods.extend(functions.method(decl));
            } else {
                all_functions.push(functions.function(decl));
            }
        }

        let assembler = TypeAssembler::new(resolver);
        let types: Vec<Type> = parsed
            .types
            .iter()
            .map(|decl| assembler.assemble(decl, &all_functions, &all_methods))
            .collect();

        let functions: Vec<Function> = all_functions
            .into_iter()
            .filter(|f| !types.iter().any(|t| returns_type(f, t.name())))
            .collect();

        let package = Package {
            name: parsed.name.clone(),
            import_path: parsed.import_path.clone(),
            doc: parsed.doc.clone(),
            files,
            test_files,
            subdirectories: sorted_unique(parsed.subdirectories.iter().cloned()),
            imports: sorted_unique(parsed.imports.iter().cloned()),
            test_imports: sorted_unique(
                parsed
                    .test_imports
                    .iter()
                    .chain(&parsed.xtest_imports)
                    .cloned(),
            ),
            constant_blocks,
            variable_blocks,
            functions,
            types,
        };

        info!(
            "Assembled package {} ({}): {} const blocks, {} var blocks, {} functions, {} types in {:?}",
            package.import_path,
            package.name,
            package.constant_blocks.len(),
            package.variable_blocks.len(),
            package.functions.len(),
            package.types.len(),
            start.elapsed()
        );

        package
    }

    /// Package-level blocks in declared order, then each type's blocks in type order
    fn blocks(
        &self,
        parsed: &ParsedPackage,
        resolver: SourceResolver<'_>,
    ) -> (Vec<ConstantBlock>, Vec<VariableBlock>) {
        let builder = BlockBuilder::new(resolver, &self.classifier);

        let mut consts: Vec<ConstantBlock> = parsed
            .consts
            .iter()
            .filter_map(|decl| builder.constants(decl, None))
            .collect();
        let mut vars: Vec<VariableBlock> = parsed
            .vars
            .iter()
            .filter_map(|decl| builder.variables(decl, None))
            .collect();

        for ty in &parsed.types {
            let owner = Some(ty.name.as_str());
            consts.extend(ty.consts.iter().filter_map(|d| builder.constants(d, owner)));
            vars.extend(ty.vars.iter().filter_map(|d| builder.variables(d, owner)));
        }

        debug!(
            package = %parsed.import_path,
            consts = consts.len(),
            vars = vars.len(),
            "built declaration blocks"
        );
        (consts, vars)
    }
}

/// Split every discovered file into (source files, test files) by name suffix
///
/// The group a file was discovered in does not matter; only the suffix does.
pub fn partition_files(files: &PackageFiles, test_suffix: &str) -> (Vec<String>, Vec<String>) {
    let (tests, sources): (Vec<&String>, Vec<&String>) =
        files.all().partition(|name| name.ends_with(test_suffix));
    (
        sorted_unique(sources.into_iter().cloned()),
        sorted_unique(tests.into_iter().cloned()),
    )
}

fn sorted_unique(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut items: Vec<String> = items.into_iter().collect();
    items.sort();
    items.dedup();
    items
}
