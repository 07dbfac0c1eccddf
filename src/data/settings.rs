//! Settings store and value domain table
//!
//! The catalog is built once from the static table in `catalog.rs`; the store
//! holds the session's current value for every setting.

use super::catalog::{SettingSpec, SETTINGS};
use std::collections::HashMap;

/// Help text shown for rows with no setting behind them
pub const NO_HELP: &str = "No help available for this setting.";

/// Legal values and help text for one setting
#[derive(Debug, Clone, Copy)]
pub struct SettingRecord {
    pub default: &'static str,
    pub domain: &'static [&'static str],
    pub help: &'static str,
}

impl SettingRecord {
    /// A setting can be edited when there is something to cycle to
    pub fn is_editable(&self) -> bool {
        self.domain.len() > 1
    }
}

/// Value domain table keyed by setting identifier
#[derive(Debug, Clone)]
pub struct SettingCatalog {
    records: HashMap<&'static str, SettingRecord>,
    order: Vec<&'static str>,
}

impl SettingCatalog {
    pub fn new() -> Self {
        Self::from_specs(SETTINGS)
    }

    pub fn from_specs(specs: &[SettingSpec]) -> Self {
        let mut records = HashMap::with_capacity(specs.len());
        let mut order = Vec::with_capacity(specs.len());

        for spec in specs {
            if records
                .insert(
                    spec.id,
                    SettingRecord {
                        default: spec.default,
                        domain: spec.domain,
                        help: spec.help,
                    },
                )
                .is_some()
            {
                tracing::warn!("Duplicate setting id in catalog: {}", spec.id);
                continue;
            }
            order.push(spec.id);
        }

        Self { records, order }
    }

    pub fn get(&self, id: &str) -> Option<&SettingRecord> {
        self.records.get(id)
    }

    /// Legal values for a setting (empty when undeclared or read-only)
    pub fn domain(&self, id: &str) -> &'static [&'static str] {
        self.records.get(id).map(|r| r.domain).unwrap_or(&[])
    }

    pub fn help(&self, id: &str) -> &'static str {
        self.records.get(id).map(|r| r.help).unwrap_or(NO_HELP)
    }

    pub fn is_editable(&self, id: &str) -> bool {
        self.records.get(id).is_some_and(SettingRecord::is_editable)
    }

    /// Setting identifiers in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}

impl Default for SettingCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Current value of every setting for this session
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsStore {
    values: HashMap<String, String>,
}

impl SettingsStore {
    /// Seed every setting with its catalog default
    pub fn with_defaults(catalog: &SettingCatalog) -> Self {
        let values = catalog
            .ids()
            .filter_map(|id| catalog.get(id).map(|r| (id.to_string(), r.default.to_string())))
            .collect();
        Self { values }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Overwrite a value; only the core transitions call this
    pub(crate) fn set(&mut self, id: &str, value: &str) {
        match self.values.get_mut(id) {
            Some(current) => {
                current.clear();
                current.push_str(value);
            }
            None => {
                self.values.insert(id.to_string(), value.to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
