//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder and the JSON helpers to flag suspicious but
//! accepted input (empty fragment values, non-standard combinator symbols).

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "empty value for class fragment");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[kata {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already reported this exact message.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let guard = WARNED.lock().unwrap();
    guard
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
