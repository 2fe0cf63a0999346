//! Pattern port (interface)
//!
//! Defines the contract a detector rule exposes to the pattern registry.
//! The registry itself lives outside this crate.

use std::path::Path;

use crate::errors::Result;

/// Pattern trait - a single detector rule
pub trait Pattern: Send + Sync {
    /// Stable rule name, used by the registry and reporting
    fn name(&self) -> &'static str;

    /// Line numbers in the file where the pattern is found
    fn value(&self, path: &Path) -> Result<Vec<u32>>;
}
