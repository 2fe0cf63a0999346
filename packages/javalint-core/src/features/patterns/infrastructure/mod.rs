//! Patterns infrastructure - detector implementations

mod nested_blocks;

pub use nested_blocks::NestedBlocks;
