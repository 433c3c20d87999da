//! Language unit validation.
//!
//! Units loaded from disk are checked before they enter a registry cache, so
//! that a unit which exists but is broken is reported as such instead of
//! silently resolving nothing.

use crate::languages::builtin::{CANONICAL_DIRECTIVES, CANONICAL_ROLES};
use crate::languages::LanguageModule;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a language unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the unit unusable
    pub errors: Vec<String>,

    /// Problems that make part of the unit unreachable
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for language units.
pub struct UnitValidator;

// A localized name is a single token: no whitespace, colons or backticks,
// since those delimit directive and role markup.
static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

impl UnitValidator {
    /// Validate a language module.
    ///
    /// This function checks that:
    /// - every directive maps onto a known canonical directive
    /// - every role maps onto a known canonical role
    /// - every localized name is a single markup token
    /// - every localized name is lowercase (warning only)
    /// - the unit is not empty (warning only)
    pub fn validate(module: &LanguageModule) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::check_table(
            "directive",
            module.directives(),
            CANONICAL_DIRECTIVES,
            &mut report,
        );
        Self::check_table("role", module.roles(), CANONICAL_ROLES, &mut report);

        if module.directives().is_empty() && module.roles().is_empty() {
            report
                .warnings
                .push("Unit defines no directives and no roles".to_string());
        }

        report
    }

    fn check_table(
        kind: &str,
        table: &BTreeMap<String, String>,
        canonical: &[&str],
        report: &mut ValidationReport,
    ) {
        for (local, target) in table {
            if !Self::is_valid_name(local) {
                report
                    .errors
                    .push(format!("Invalid {} name {:?}", kind, local));
            }
            if !canonical.contains(&target.as_str()) {
                report.errors.push(format!(
                    "{} {:?} maps to unknown canonical name {:?}",
                    capitalize(kind),
                    local,
                    target
                ));
            }
            if local.to_lowercase() != *local {
                report.warnings.push(format!(
                    "{} {:?} is not lowercase and can never be looked up",
                    capitalize(kind),
                    local
                ));
            }
        }
    }

    /// Check that a localized name is a single markup token.
    fn is_valid_name(name: &str) -> bool {
        let regex = NAME_REGEX.get_or_init(|| Regex::new(r"^[^\s:`]+$").unwrap());
        regex.is_match(name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::builtin::BUILTIN_UNITS;

    // ==================== Name Tests ====================

    #[test]
    fn test_is_valid_name_simple() {
        assert!(UnitValidator::is_valid_name("note"));
        assert!(UnitValidator::is_valid_name("table-des-matières"));
        assert!(UnitValidator::is_valid_name("t"));
    }

    #[test]
    fn test_is_valid_name_rejects_whitespace() {
        assert!(!UnitValidator::is_valid_name("nota bene"));
        assert!(!UnitValidator::is_valid_name("note\t"));
    }

    #[test]
    fn test_is_valid_name_rejects_markup_delimiters() {
        assert!(!UnitValidator::is_valid_name("note:"));
        assert!(!UnitValidator::is_valid_name("`emphasis`"));
    }

    #[test]
    fn test_is_valid_name_rejects_empty() {
        assert!(!UnitValidator::is_valid_name(""));
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_builtin_units_are_clean() {
        for unit in BUILTIN_UNITS {
            let report = UnitValidator::validate(&unit.to_module());
            assert!(report.is_clean(), "{}: {:?}", unit.code, report);
        }
    }

    #[test]
    fn test_validate_unknown_canonical_directive() {
        let module = LanguageModule::from_pairs("xx", &[("blah", "no-such-directive")], &[]);
        let report = UnitValidator::validate(&module);

        assert!(report.has_errors());
        assert!(report.errors[0].contains("Directive"));
        assert!(report.errors[0].contains("no-such-directive"));
    }

    #[test]
    fn test_validate_unknown_canonical_role() {
        let module = LanguageModule::from_pairs("xx", &[], &[("fett", "bold")]);
        let report = UnitValidator::validate(&module);

        assert!(report.has_errors());
        assert!(report.errors[0].contains("Role"));
    }

    #[test]
    fn test_validate_directive_target_is_not_a_role() {
        // "emphasis" is a role, not a directive
        let module = LanguageModule::from_pairs("xx", &[("betonung", "emphasis")], &[]);
        let report = UnitValidator::validate(&module);
        assert!(report.has_errors());
    }

    #[test]
    fn test_validate_invalid_name() {
        let module = LanguageModule::from_pairs("xx", &[("nota bene", "note")], &[]);
        let report = UnitValidator::validate(&module);

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Invalid directive name"));
    }

    #[test]
    fn test_validate_uppercase_name_warns() {
        let module = LanguageModule::from_pairs("xx", &[("Nota", "note")], &[]);
        let report = UnitValidator::validate(&module);

        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("not lowercase"));
    }

    #[test]
    fn test_validate_empty_unit_warns() {
        let report = UnitValidator::validate(&LanguageModule::default());

        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("no directives"));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("directive"), "Directive");
        assert_eq!(capitalize(""), "");
    }
}
