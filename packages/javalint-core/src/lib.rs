/*
 * javalint-core - Nested-block pattern detection for Java
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span)
 * - features/    : Vertical slices (parsing -> patterns)
 */

pub mod errors;
pub mod features;
pub mod shared;

pub use errors::{JavalintError, Result};
pub use features::parsing::{ParseError, ParsedTree, Parser, SyntaxKind, SyntaxNode, TreeSitterParser};
pub use features::patterns::{fold_tree, BlockType, NestedBlocks, Pattern};
pub use shared::models::Span;
