//! Style engine warnings with colored terminal output.
//!
//! Declarations that fail to resolve are an expected outcome of untrusted
//! style sheets, so they are reported here instead of being raised as errors.
//! Each distinct message is printed once; repeats are swallowed.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Distinct warnings already printed, keyed by `[component] message`.
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// Build the deduplication key for a warning.
fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a value that could not be resolved (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "calc() needs a percentage basis: calc(10px + 5%)");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = warning_key(component, message);
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key);

    if first_time {
        eprintln!("{}", format!("[Ochre {component}] ⚠ {message}").yellow());
    }
}

/// Whether a warning with this component and message has been reported.
#[must_use]
pub fn was_reported(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(&warning_key(component, message))
}

/// Number of distinct warnings reported since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner).len()
}

/// Forget every recorded warning (call between independent style passes).
pub fn clear_warnings() {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner).clear();
}
