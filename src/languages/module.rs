//! Language module: the word lists for one language.
//!
//! A `LanguageModule` maps localized directive and role names onto the
//! canonical (English) names the parser dispatches on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Localized directive and role names for a single language.
///
/// Lookups are case-insensitive: names are lowercased before they hit the
/// tables, so table keys are expected to be lowercase already.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageModule {
    /// Language code this module was loaded for (e.g. "en", "fr").
    /// Optional in unit files; the loader fills it in from the file name.
    #[serde(default)]
    code: String,

    /// Localized directive name -> canonical directive name
    #[serde(default)]
    directives: BTreeMap<String, String>,

    /// Localized role name -> canonical role name
    #[serde(default)]
    roles: BTreeMap<String, String>,
}

impl LanguageModule {
    /// Create a module from owned tables.
    pub fn new(
        code: impl Into<String>,
        directives: BTreeMap<String, String>,
        roles: BTreeMap<String, String>,
    ) -> Self {
        Self {
            code: code.into(),
            directives,
            roles,
        }
    }

    /// Create a module from static `(localized, canonical)` pairs.
    pub fn from_pairs(
        code: impl Into<String>,
        directives: &[(&str, &str)],
        roles: &[(&str, &str)],
    ) -> Self {
        fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
            pairs
                .iter()
                .map(|(local, canonical)| (local.to_string(), canonical.to_string()))
                .collect()
        }
        Self::new(code, to_map(directives), to_map(roles))
    }

    /// The language code of this module.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub(crate) fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
    }

    /// Resolve a localized directive name to its canonical name.
    ///
    /// # Returns
    /// * `Some(canonical)` if the name is known in this language
    /// * `None` otherwise
    pub fn directive(&self, name: &str) -> Option<&str> {
        self.directives
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// Resolve a localized role name to its canonical name.
    pub fn role(&self, name: &str) -> Option<&str> {
        self.roles.get(&name.to_lowercase()).map(String::as_str)
    }

    /// All directive mappings, ordered by localized name.
    pub fn directives(&self) -> &BTreeMap<String, String> {
        &self.directives
    }

    /// All role mappings, ordered by localized name.
    pub fn roles(&self) -> &BTreeMap<String, String> {
        &self.roles
    }
}
