use crate::languages::{BuiltinLoader, DirectoryLoader, LanguageRegistry, LoaderChain};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Directories searched for `<code>.json` units, in order
    pub language_path: Vec<PathBuf>,

    // Whether built-in units are consulted after the search path
    pub builtin_languages: bool,

    // Code used when the caller does not name one
    pub default_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_path: Vec::new(),
            builtin_languages: true,
            default_language: "en".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Platform path-list syntax (':' on Unix, ';' on Windows)
            language_path: std::env::var_os("RST_LANGUAGE_PATH")
                .map(|paths| {
                    std::env::split_paths(&paths)
                        .filter(|path| !path.as_os_str().is_empty())
                        .collect()
                })
                .unwrap_or_default(),

            builtin_languages: match std::env::var("RST_BUILTIN_LANGUAGES") {
                Ok(value) => value.trim().parse::<bool>().with_context(|| {
                    format!("RST_BUILTIN_LANGUAGES must be true or false, got {:?}", value)
                })?,
                Err(_) => true,
            },

            default_language: std::env::var("RST_DEFAULT_LANGUAGE")
                .ok()
                .filter(|code| !code.is_empty())
                .unwrap_or_else(|| "en".to_string()),
        })
    }

    /// Build the loader chain described by this configuration: the search
    /// path first, then the built-in units.
    pub fn loader(&self) -> LoaderChain {
        let mut chain = LoaderChain::new();
        if !self.language_path.is_empty() {
            chain = chain.with(DirectoryLoader::new(self.language_path.iter().cloned()));
        }
        if self.builtin_languages {
            chain = chain.with(BuiltinLoader);
        }
        chain
    }

    pub fn build_registry(&self) -> LanguageRegistry<LoaderChain> {
        LanguageRegistry::new(self.loader())
    }
}
