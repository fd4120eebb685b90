//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder and the CLI to report input that is accepted
//! but probably not what the caller meant (e.g. an empty class name).

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but never printed.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Warn about suspicious input (prints once per unique message)
///
/// # Example
/// ```
/// sprig_common::warning::warn_once("Selector", "empty class value");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if record(key) && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Sprig {component}] ⚠ {message}").yellow());
    }
}

/// Silence (or re-enable) warning output for the whole process.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Record `key`, returning `true` the first time it is seen.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deduplicates() {
        assert!(record("[Test] dedup-once".to_string()));
        assert!(!record("[Test] dedup-once".to_string()));
        assert!(record("[Test] dedup-other".to_string()));
    }

    #[test]
    fn test_warn_once_records_key() {
        set_quiet(true);
        warn_once("Test", "recorded by warn_once");
        assert!(!record("[Test] recorded by warn_once".to_string()));
        set_quiet(false);
    }
}
