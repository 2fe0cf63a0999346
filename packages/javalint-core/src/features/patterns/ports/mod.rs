//! Patterns ports (interfaces)

mod pattern;

pub use pattern::Pattern;
