//! Load package use case

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::info;

use super::assemble_package::PackageAssembler;
use crate::config::DocModelConfig;
use crate::errors::Result;
use crate::features::doc_model::domain::Package;
use crate::features::parsing::infrastructure::TreeSitterGoFrontend;
use crate::features::parsing::ports::PackageSource;

/// Front-end load followed by assembly
///
/// A front-end failure aborts before assembly starts; no partial `Package`
/// is ever returned.
pub struct LoadPackageUseCase<S: PackageSource> {
    source: S,
    assembler: PackageAssembler,
}

impl<S: PackageSource> LoadPackageUseCase<S> {
    pub fn new(source: S, assembler: PackageAssembler) -> Self {
        Self { source, assembler }
    }

    /// Execute for one import path
    pub fn execute(&self, import_path: &str) -> Result<Package> {
        let parsed = self.source.load(import_path)?;
        Ok(self.assembler.assemble(&parsed))
    }

    /// Execute for multiple import paths in parallel
    ///
    /// Each package is loaded and assembled independently; results keep the
    /// order of `import_paths`.
    pub fn execute_batch(&self, import_paths: &[String]) -> Vec<Result<Package>> {
        import_paths
            .par_iter()
            .map(|path| self.execute(path))
            .collect()
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}

impl LoadPackageUseCase<TreeSitterGoFrontend> {
    /// Tree-sitter front-end under `root`, both stages configured from a YAML file
    pub fn from_config_file(root: impl Into<PathBuf>, config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config = DocModelConfig::from_yaml(config_path)?;
        info!("Loaded doc model config from {}", config_path.display());

        Ok(Self::new(
            TreeSitterGoFrontend::new(root).with_config(config.clone()),
            PackageAssembler::new(config),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DocError;
    use crate::features::parsing::domain::{ParsedPackage, RawValueDecl};

    // Mock front-end for testing
    struct MockSource;

    impl PackageSource for MockSource {
        fn load(&self, import_path: &str) -> Result<ParsedPackage> {
            if import_path.starts_with("missing/") {
                return Err(DocError::upstream(import_path, "directory not found"));
            }
            let mut parsed = ParsedPackage::new("demo", import_path);
            parsed.consts.push(RawValueDecl {
                names: vec!["A".into()],
                ..Default::default()
            });
            Ok(parsed)
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[test]
    fn test_execute() {
        let use_case = LoadPackageUseCase::new(MockSource, PackageAssembler::default());

        let package = use_case.execute("example.com/demo").unwrap();
        assert_eq!(package.import_path(), "example.com/demo");
        assert_eq!(package.constant_blocks().len(), 1);
        assert_eq!(use_case.source_name(), "mock");
    }

    #[test]
    fn test_upstream_failure_yields_no_package() {
        let use_case = LoadPackageUseCase::new(MockSource, PackageAssembler::default());

        let err = use_case.execute("missing/pkg").unwrap_err();
        assert!(matches!(err, DocError::UpstreamParse { .. }));
        assert_eq!(err.import_path(), Some("missing/pkg"));
    }

    #[test]
    fn test_execute_batch_keeps_order() {
        let use_case = LoadPackageUseCase::new(MockSource, PackageAssembler::default());
        let paths: Vec<String> = vec!["a/one".into(), "missing/two".into(), "a/three".into()];

        let results = use_case.execute_batch(&paths);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().import_path(), "a/one");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().import_path(), "a/three");
    }
}
