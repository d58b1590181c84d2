//! Configuration module for mesh loading.
//!
//! This module provides the option types accepted by the OBJ loader.

mod load_options;

pub use load_options::{LoadOptions, MissingFilePolicy};
