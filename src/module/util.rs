//! This module provides miscellaneous utilities.

pub mod conf; // Configuration module: TOML config file handling.
pub mod init; // Initialization module: Builds the app property snapshot.
pub mod path; // Path module: Directory bootstrap and path joining.
