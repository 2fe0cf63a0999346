//! Parsing infrastructure - external dependencies

mod parser;

pub use parser::TreeSitterParser;
