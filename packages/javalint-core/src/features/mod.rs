//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Pure business logic (no external dependencies)
//! - ports/          - Interface definitions (traits)
//! - infrastructure/ - External dependency implementations

pub mod parsing;
pub mod patterns;
