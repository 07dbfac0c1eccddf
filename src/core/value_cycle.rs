//! Cyclic value editing for enumerated settings (`+` / `-` in a submenu).

use crate::data::{SettingCatalog, SettingsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

/// Next index in a domain of `len` values.
///
/// `current` is `None` when the stored value isn't part of the domain; it is
/// treated as index -1, so incrementing lands on the first value.
pub fn next_index(current: Option<usize>, len: usize, direction: Direction) -> usize {
    let len = len as i64;
    let index = current.map(|i| i as i64).unwrap_or(-1);
    let next = match direction {
        Direction::Increment => (index + 1).rem_euclid(len),
        Direction::Decrement => (index - 1 + len).rem_euclid(len),
    };
    next as usize
}

/// Move a setting to the next/previous value of its domain.
///
/// Returns the new value, or `None` when the setting is read-only or unknown.
pub fn cycle(
    store: &mut SettingsStore,
    catalog: &SettingCatalog,
    id: &str,
    direction: Direction,
) -> Option<&'static str> {
    let domain = catalog.domain(id);
    if domain.len() <= 1 {
        return None;
    }

    let current = store
        .get(id)
        .and_then(|value| domain.iter().position(|candidate| *candidate == value));
    let value = domain[next_index(current, domain.len(), direction)];

    tracing::debug!(setting = id, value, ?direction, "Cycled setting");
    store.set(id, value);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(Some(0), 3, Direction::Increment), 1);
        assert_eq!(next_index(Some(2), 3, Direction::Increment), 0);
        assert_eq!(next_index(Some(0), 3, Direction::Decrement), 2);
        assert_eq!(next_index(Some(1), 3, Direction::Decrement), 0);
    }

    #[test]
    fn test_unknown_value_counts_as_minus_one() {
        assert_eq!(next_index(None, 4, Direction::Increment), 0);
        assert_eq!(next_index(None, 4, Direction::Decrement), 2);
        assert_eq!(next_index(None, 2, Direction::Decrement), 0);
    }

    #[test]
    fn test_cycle_returns_to_start_after_domain_length_steps() {
        let catalog = SettingCatalog::new();
        let mut store = SettingsStore::with_defaults(&catalog);

        for id in catalog.ids().collect::<Vec<_>>() {
            let domain = catalog.domain(id);
            if domain.len() <= 1 {
                continue;
            }
            let start = store.get(id).unwrap().to_string();
            for direction in [Direction::Increment, Direction::Decrement] {
                for _ in 0..domain.len() {
                    let value = cycle(&mut store, &catalog, id, direction).unwrap();
                    assert!(domain.contains(&value), "{} left its domain", id);
                }
                assert_eq!(store.get(id), Some(start.as_str()), "{} did not close", id);
            }
        }
    }

    #[test]
    fn test_cycle_read_only_is_noop() {
        let catalog = SettingCatalog::new();
        let mut store = SettingsStore::with_defaults(&catalog);
        let before = store.clone();

        assert_eq!(cycle(&mut store, &catalog, "date", Direction::Increment), None);
        assert_eq!(cycle(&mut store, &catalog, "cpu-freq", Direction::Decrement), None);
        assert_eq!(cycle(&mut store, &catalog, "missing", Direction::Increment), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_cycle_out_of_domain_value_recovers() {
        let catalog = SettingCatalog::new();
        let mut store = SettingsStore::with_defaults(&catalog);
        store.set("security", "[Bogus]");

        let value = cycle(&mut store, &catalog, "security", Direction::Increment);
        assert_eq!(value, Some("[Setup]"));
    }

    #[test]
    fn test_quick_powertest_toggles() {
        let catalog = SettingCatalog::new();
        let mut store = SettingsStore::with_defaults(&catalog);

        cycle(&mut store, &catalog, "quick-powertest", Direction::Increment);
        assert_eq!(store.get("quick-powertest"), Some("[Disabled]"));
        cycle(&mut store, &catalog, "quick-powertest", Direction::Increment);
        assert_eq!(store.get("quick-powertest"), Some("[Enabled]"));
    }
}
