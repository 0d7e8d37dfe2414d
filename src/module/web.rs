//! This module holds the web client's fixed declarations.

pub mod login; // Login module: Resolves the optional login page banner.
pub mod route; // Route module: The closed table of navigable paths.
