//! Patterns Feature
//!
//! Detector rules over the parsed Java syntax tree.
//!
//! ## Structure
//! - `domain/` - BlockType selector, generic tree fold
//! - `ports/` - Pattern trait (the seam the registry plugs into)
//! - `infrastructure/` - NestedBlocks detector

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{fold_tree, BlockType};
pub use infrastructure::NestedBlocks;
pub use ports::Pattern;
