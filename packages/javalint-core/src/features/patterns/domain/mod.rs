//! Patterns domain models

mod block_type;
mod fold;

pub use block_type::BlockType;
pub use fold::fold_tree;
