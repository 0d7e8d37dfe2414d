//! This module contains all the sub-modules of the project.

pub mod define; // Definition module: Contains definitions and constants used throughout the project.
pub mod job; // Job module: Defines the object detection job contract.
pub mod util; // Utility module: Provides various utility functions and helpers.
pub mod web; // Web module: Holds web client routes and login page configuration.
