//! Language-specific word lists for the markup parser.
//!
//! The parser recognises directives and roles by their canonical (English)
//! names. A language module maps the localized names an author writes onto
//! those canonical names.
//!
//! # Architecture
//!
//! - `registry`: Lazily loads and caches language modules by code
//! - `loader`: Load-by-name services (built-in table, directory search path, chain)
//! - `builtin`: Compile-time registration table of built-in language units
//! - `module`: The `LanguageModule` value type
//! - `validator`: Structural checks for units loaded from disk
//! - `metrics`: Per-registry cache and load counters
//!
//! # Example
//!
//! ```rust
//! use rst_languages::languages::LanguageRegistry;
//!
//! let registry = LanguageRegistry::builtin();
//!
//! let french = registry.get_language("fr").expect("French is built in");
//! assert_eq!(french.directive("avertissement"), Some("warning"));
//!
//! // Unknown codes are simply absent
//! assert!(registry.get_language("xx").is_none());
//! ```

pub mod builtin;
mod error;
mod loader;
mod metrics;
mod module;
mod registry;
mod validator;

pub use error::LoadError;
pub use loader::{BuiltinLoader, DirectoryLoader, LanguageLoader, LoaderChain, UNIT_EXTENSION};
pub use metrics::{MetricsReport, RegistryMetrics};
pub use module::LanguageModule;
pub use registry::LanguageRegistry;
pub use validator::{UnitValidator, ValidationReport};
