pub mod config;
pub mod languages;

pub use languages::{LanguageModule, LanguageRegistry, LoadError};
