//! Style-engine warnings with colored terminal output.
//!
//! Messages are deduplicated so a stylesheet that repeats the same problem on
//! every element reports it once per document rather than once per element.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about a recoverable problem (prints once per unique message).
///
/// # Example
/// ```
/// use folio_common::warning::warn_once;
///
/// warn_once("CSS", "no usable font for family 'Garamond'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[Folio {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call when styling a new document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

/// Number of distinct warnings emitted since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the global set so the counts are not disturbed by
    // tests running on other threads.
    #[test]
    fn test_warnings_are_counted_once() {
        clear_warnings();
        assert_eq!(warning_count(), 0);

        warn_once("test", "duplicate message for dedup test");
        warn_once("test", "duplicate message for dedup test");
        assert_eq!(warning_count(), 1);

        warn_once("alpha", "same text in two components");
        warn_once("beta", "same text in two components");
        assert_eq!(warning_count(), 3);

        clear_warnings();
        assert_eq!(warning_count(), 0);
        warn_once("test", "duplicate message for dedup test");
        assert_eq!(warning_count(), 1);
    }
}
