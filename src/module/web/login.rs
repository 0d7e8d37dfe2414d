//! Login Page Banner
//!
//! Resolves the optional operator-facing login page message from the
//! process environment. An unset variable means "no banner" and is a
//! valid state, not an error.

use crate::module::define;

/// Reads the login page message from the environment.
///
/// Returns the value exactly as supplied, with no trimming or escaping.
/// Returns `None` when the variable is unset.
pub fn message() -> Option<String> {
    std::env::var(define::env::LOGIN_PAGE_MESSAGE).ok()
}
