//! Language loaders: resolve a language code to a freshly built
//! `LanguageModule`.
//!
//! A loader does no caching of its own; `LanguageRegistry` owns the cache and
//! calls `load` at most once per successfully loaded code.

use crate::languages::builtin::{find_builtin, BUILTIN_UNITS};
use crate::languages::{LanguageModule, LoadError, UnitValidator};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// File extension of directory-backed language units.
pub const UNIT_EXTENSION: &str = "json";

/// Load-by-name service for language units.
pub trait LanguageLoader: Send + Sync {
    /// Load the unit named by `code`.
    ///
    /// # Returns
    /// * `Ok(module)` with `module.code() == code`
    /// * `Err(LoadError::NotFound)` if no such unit exists
    /// * any other `LoadError` if the unit exists but is broken
    fn load(&self, code: &str) -> Result<LanguageModule, LoadError>;

    /// Codes this loader can offer, without loading them.
    fn available(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<L: LanguageLoader + ?Sized> LanguageLoader for Box<L> {
    fn load(&self, code: &str) -> Result<LanguageModule, LoadError> {
        (**self).load(code)
    }

    fn available(&self) -> Vec<String> {
        (**self).available()
    }
}

// ==================== Built-in Units ====================

/// Loader over the compile-time registration table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLoader;

impl LanguageLoader for BuiltinLoader {
    fn load(&self, code: &str) -> Result<LanguageModule, LoadError> {
        find_builtin(code)
            .map(|unit| unit.to_module())
            .ok_or_else(|| LoadError::not_found(code))
    }

    fn available(&self) -> Vec<String> {
        BUILTIN_UNITS.iter().map(|unit| unit.code.to_string()).collect()
    }
}

// ==================== Directory Search Path ====================

/// Loader over a search path of directories holding `<code>.json` units.
///
/// Directories are searched in order; the first one containing the unit
/// wins. Entries that are not readable directories are skipped, so only a
/// unit file that exists but cannot be read is reported as `LoadError::Io`.
#[derive(Debug, Clone, Default)]
pub struct DirectoryLoader {
    search_path: Vec<PathBuf>,
}

impl DirectoryLoader {
    pub fn new<I, P>(search_path: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_path: search_path.into_iter().map(Into::into).collect(),
        }
    }

    /// Map a code to a file name, refusing anything that is not a single
    /// plain path component.
    fn file_name(code: &str) -> Option<String> {
        let mut components = Path::new(code).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !code.contains(['/', '\\', '\0']) => {
                Some(format!("{}.{}", code, UNIT_EXTENSION))
            }
            _ => None,
        }
    }

    fn read_unit(path: &Path, code: &str) -> Result<LanguageModule, LoadError> {
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut module: LanguageModule =
            serde_json::from_str(&contents).map_err(|source| LoadError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let mut report = UnitValidator::validate(&module);
        if !module.code().is_empty() && module.code() != code {
            report.errors.push(format!(
                "Unit declares code {:?} but is stored as {:?}",
                module.code(),
                code
            ));
        }
        if report.has_errors() {
            return Err(LoadError::Invalid {
                code: code.to_string(),
                errors: report.errors,
            });
        }
        if report.has_warnings() {
            warn!(
                "Language unit {} loaded with warnings: {:?}",
                path.display(),
                report.warnings
            );
        }

        module.set_code(code);
        Ok(module)
    }
}

impl LanguageLoader for DirectoryLoader {
    fn load(&self, code: &str) -> Result<LanguageModule, LoadError> {
        let Some(file_name) = Self::file_name(code) else {
            debug!("Refusing language code {:?}: not a plain name", code);
            return Err(LoadError::not_found(code));
        };

        for dir in &self.search_path {
            if !dir.is_dir() {
                debug!("Skipping language path entry {}: not a directory", dir.display());
                continue;
            }
            let path = dir.join(&file_name);
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => {
                    debug!("Loading language unit {}", path.display());
                    return Self::read_unit(&path, code);
                }
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            }
        }

        Err(LoadError::not_found(code))
    }

    fn available(&self) -> Vec<String> {
        let mut codes = BTreeSet::new();
        for dir in &self.search_path {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some(UNIT_EXTENSION) {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    codes.insert(stem.to_string());
                }
            }
        }
        codes.into_iter().collect()
    }
}

// ==================== Chain ====================

/// Ordered list of loaders.
///
/// `NotFound` falls through to the next loader. Any other error stops the
/// search, so a broken unit early in the chain is never shadowed by a later
/// one.
#[derive(Default)]
pub struct LoaderChain {
    loaders: Vec<Box<dyn LanguageLoader>>,
}

impl LoaderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a loader to the end of the chain.
    pub fn with(mut self, loader: impl LanguageLoader + 'static) -> Self {
        self.loaders.push(Box::new(loader));
        self
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl LanguageLoader for LoaderChain {
    fn load(&self, code: &str) -> Result<LanguageModule, LoadError> {
        for loader in &self.loaders {
            match loader.load(code) {
                Err(e) if e.is_not_found() => continue,
                result => return result,
            }
        }
        Err(LoadError::not_found(code))
    }

    fn available(&self) -> Vec<String> {
        let codes: BTreeSet<String> = self
            .loaders
            .iter()
            .flat_map(|loader| loader.available())
            .collect();
        codes.into_iter().collect()
    }
}

impl std::fmt::Debug for LoaderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderChain")
            .field("loaders", &self.loaders.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_unit(dir: &Path, code: &str, contents: &str) {
        fs::write(dir.join(format!("{}.json", code)), contents).expect("Failed to write unit");
    }

    // ==================== BuiltinLoader Tests ====================

    #[test]
    fn test_builtin_load_english() {
        let module = BuiltinLoader.load("en").expect("Should load");
        assert_eq!(module.code(), "en");
        assert_eq!(module.directive("note"), Some("note"));
    }

    #[test]
    fn test_builtin_load_unknown() {
        let err = BuiltinLoader.load("xx").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_builtin_available() {
        let codes = BuiltinLoader.available();
        assert!(codes.contains(&"en".to_string()));
        assert!(codes.contains(&"fr".to_string()));
    }

    // ==================== DirectoryLoader Tests ====================

    #[test]
    fn test_file_name_plain_code() {
        assert_eq!(DirectoryLoader::file_name("pt-br").as_deref(), Some("pt-br.json"));
    }

    #[test]
    fn test_file_name_rejects_paths() {
        assert_eq!(DirectoryLoader::file_name("../en"), None);
        assert_eq!(DirectoryLoader::file_name("a/b"), None);
        assert_eq!(DirectoryLoader::file_name("a\\b"), None);
        assert_eq!(DirectoryLoader::file_name("e\0n"), None);
        assert_eq!(DirectoryLoader::file_name(".."), None);
        assert_eq!(DirectoryLoader::file_name(""), None);
    }

    #[test]
    fn test_directory_load_sets_code_from_file_name() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "it", r#"{"directives": {"nota": "note"}}"#);

        let module = DirectoryLoader::new([dir.path()]).load("it").expect("Should load");
        assert_eq!(module.code(), "it");
        assert_eq!(module.directive("nota"), Some("note"));
    }

    #[test]
    fn test_directory_load_missing() {
        let dir = TempDir::new().unwrap();
        let err = DirectoryLoader::new([dir.path()]).load("it").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_directory_load_skips_missing_directories() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "it", r#"{"roles": {"enfasi": "emphasis"}}"#);

        let loader = DirectoryLoader::new([dir.path().join("nope"), dir.path().to_path_buf()]);
        assert!(loader.load("it").is_ok());
    }

    #[test]
    fn test_directory_load_skips_file_entries() {
        let dir = TempDir::new().unwrap();
        let not_a_dir = dir.path().join("languages.txt");
        fs::write(&not_a_dir, "not a directory").unwrap();
        write_unit(dir.path(), "it", r#"{"directives": {"nota": "note"}}"#);

        let loader = DirectoryLoader::new([not_a_dir.clone(), dir.path().to_path_buf()]);
        assert!(loader.load("it").is_ok());

        let only_file = DirectoryLoader::new([not_a_dir]);
        assert!(only_file.load("it").unwrap_err().is_not_found());
    }

    #[test]
    fn test_directory_load_nul_code_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = DirectoryLoader::new([dir.path()]).load("e\0n").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_directory_load_first_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_unit(first.path(), "it", r#"{"directives": {"nota": "note"}}"#);
        write_unit(second.path(), "it", r#"{"directives": {"nota": "tip"}}"#);

        let loader = DirectoryLoader::new([first.path(), second.path()]);
        assert_eq!(loader.load("it").unwrap().directive("nota"), Some("note"));
    }

    #[test]
    fn test_directory_load_malformed() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "it", "{ not json");

        let err = DirectoryLoader::new([dir.path()]).load("it").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_directory_load_invalid() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "it", r#"{"directives": {"nota": "footnote"}}"#);

        let err = DirectoryLoader::new([dir.path()]).load("it").unwrap_err();
        match err {
            LoadError::Invalid { code, errors } => {
                assert_eq!(code, "it");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_load_code_mismatch() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "it", r#"{"code": "pt", "directives": {"nota": "note"}}"#);

        let err = DirectoryLoader::new([dir.path()]).load("it").unwrap_err();
        assert!(err.to_string().contains("declares code"));
    }

    #[test]
    fn test_directory_load_refuses_traversal() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_unit(dir.path(), "secret", r#"{"directives": {"nota": "note"}}"#);

        let err = DirectoryLoader::new([&nested]).load("../secret").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_directory_available() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "it", "{}");
        write_unit(dir.path(), "nl", "{}");
        fs::write(dir.path().join("README.txt"), "not a unit").unwrap();

        let codes = DirectoryLoader::new([dir.path()]).available();
        assert_eq!(codes, vec!["it".to_string(), "nl".to_string()]);
    }

    // ==================== LoaderChain Tests ====================

    #[test]
    fn test_chain_falls_through_not_found() {
        let dir = TempDir::new().unwrap();
        let chain = LoaderChain::new()
            .with(DirectoryLoader::new([dir.path()]))
            .with(BuiltinLoader);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.load("fr").unwrap().code(), "fr");
    }

    #[test]
    fn test_chain_directory_overrides_builtin() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "en", r#"{"directives": {"remark": "note"}}"#);

        let chain = LoaderChain::new()
            .with(DirectoryLoader::new([dir.path()]))
            .with(BuiltinLoader);

        let module = chain.load("en").unwrap();
        assert_eq!(module.directive("remark"), Some("note"));
        assert_eq!(module.directive("warning"), None);
    }

    #[test]
    fn test_chain_broken_unit_is_not_masked() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "en", "42");

        let chain = LoaderChain::new()
            .with(DirectoryLoader::new([dir.path()]))
            .with(BuiltinLoader);

        let err = chain.load("en").unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_chain_file_entry_does_not_mask_builtins() {
        let dir = TempDir::new().unwrap();
        let not_a_dir = dir.path().join("languages.txt");
        fs::write(&not_a_dir, "not a directory").unwrap();

        let chain = LoaderChain::new()
            .with(DirectoryLoader::new([not_a_dir]))
            .with(BuiltinLoader);

        assert_eq!(chain.load("en").unwrap().code(), "en");
        assert!(chain.load("xx").unwrap_err().is_not_found());
    }

    #[test]
    fn test_chain_empty() {
        let chain = LoaderChain::new();
        assert!(chain.is_empty());
        assert!(chain.load("en").unwrap_err().is_not_found());
    }

    #[test]
    fn test_chain_available_is_sorted_and_unique() {
        let dir = TempDir::new().unwrap();
        write_unit(dir.path(), "en", "{}");
        write_unit(dir.path(), "it", "{}");

        let chain = LoaderChain::new()
            .with(DirectoryLoader::new([dir.path()]))
            .with(BuiltinLoader);

        assert_eq!(chain.available(), vec!["de", "en", "es", "fr", "it"]);
    }
}
