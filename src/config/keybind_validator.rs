//! Keybind validator
//!
//! Validates that all critical key roles have keybinds assigned
//! and checks for duplicate bindings.

use crate::config::Keybinds;
use crate::core::key_roles::{normalize_keybind, KeyRole};
use std::collections::BTreeMap;

/// Roles the setup screens can't be driven without
const CRITICAL_ROLES: [KeyRole; 6] = [
    KeyRole::Up,
    KeyRole::Down,
    KeyRole::Confirm,
    KeyRole::Cancel,
    KeyRole::ConfirmYes,
    KeyRole::ConfirmNo,
];

#[derive(Debug, Clone)]
pub enum ValidationIssue {
    MissingCriticalBinding {
        role: KeyRole,
        default: String,
    },
    DuplicateBinding {
        keybind: String,
        roles: Vec<KeyRole>,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::MissingCriticalBinding { .. } => ValidationSeverity::Error,
            ValidationIssue::DuplicateBinding { .. } => ValidationSeverity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::MissingCriticalBinding { role, default } => {
                format!(
                    "Critical key '{}' has no keybind! Default: {}",
                    role.config_name(),
                    default
                )
            }
            ValidationIssue::DuplicateBinding { keybind, roles } => {
                let names: Vec<&str> = roles.iter().map(|r| r.config_name()).collect();
                format!(
                    "Keybind '{}' is assigned to multiple keys: {}",
                    keybind,
                    names.join(", ")
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Warning))
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Error))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Warning))
            .collect()
    }
}

/// Validate the `[keybinds]` table
pub fn validate_keybinds(keybinds: &Keybinds) -> ValidationResult {
    let mut issues = Vec::new();

    for role in CRITICAL_ROLES {
        if keybinds.binding(role).trim().is_empty() {
            issues.push(ValidationIssue::MissingCriticalBinding {
                role,
                default: Keybinds::default_binding(role).to_string(),
            });
        }
    }

    check_duplicates(&mut issues, keybinds);

    ValidationResult { issues }
}

/// Check for duplicate keybind assignments (compared after normalization,
/// so `Y` and `y` collide)
fn check_duplicates(issues: &mut Vec<ValidationIssue>, keybinds: &Keybinds) {
    let mut keybind_map: BTreeMap<String, Vec<KeyRole>> = BTreeMap::new();

    for role in KeyRole::ALL {
        let bound = keybinds.binding(role);
        if !bound.trim().is_empty() {
            keybind_map
                .entry(normalize_keybind(bound))
                .or_default()
                .push(role);
        }
    }

    for (keybind, roles) in keybind_map {
        if roles.len() > 1 {
            issues.push(ValidationIssue::DuplicateBinding { keybind, roles });
        }
    }
}

/// Auto-fix validation issues by restoring defaults
pub fn auto_fix_keybinds(keybinds: &mut Keybinds, issues: &[ValidationIssue]) -> usize {
    let mut fixed_count = 0;

    for issue in issues {
        if let ValidationIssue::MissingCriticalBinding { role, default } = issue {
            *keybinds.binding_mut(*role) = default.clone();
            fixed_count += 1;
        }
    }

    fixed_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keybinds() {
        let keybinds = Keybinds::default();
        let result = validate_keybinds(&keybinds);
        assert!(result.is_valid());
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_missing_critical_binding() {
        let mut keybinds = Keybinds::default();
        keybinds.cancel = String::new();

        let result = validate_keybinds(&keybinds);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].message().contains("cancel"));
    }

    #[test]
    fn test_optional_binding_may_be_empty() {
        let mut keybinds = Keybinds::default();
        keybinds.help = String::new();
        keybinds.quick_save = "  ".to_string();

        let result = validate_keybinds(&keybinds);
        assert!(result.is_valid());
    }

    #[test]
    fn test_duplicate_binding_ignores_case() {
        let mut keybinds = Keybinds::default();
        keybinds.confirm_no = "Y".to_string();

        let result = validate_keybinds(&keybinds);
        assert!(result.is_valid());
        assert!(result.has_warnings());
        match result.warnings()[0] {
            ValidationIssue::DuplicateBinding { keybind, roles } => {
                assert_eq!(keybind, "y");
                assert_eq!(roles, &vec![KeyRole::ConfirmYes, KeyRole::ConfirmNo]);
            }
            other => panic!("unexpected issue {:?}", other),
        }
    }

    #[test]
    fn test_auto_fix() {
        let mut keybinds = Keybinds::default();
        keybinds.cancel = String::new();
        keybinds.up = String::new();

        let result = validate_keybinds(&keybinds);
        assert_eq!(result.errors().len(), 2);

        let fixed = auto_fix_keybinds(&mut keybinds, &result.issues);
        assert_eq!(fixed, 2);
        assert_eq!(keybinds.cancel, "Esc");
        assert_eq!(keybinds.up, "Up");

        // Validate again - should be clean
        let result2 = validate_keybinds(&keybinds);
        assert!(result2.is_valid());
    }
}
