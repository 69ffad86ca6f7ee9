//! Article content, one module per page.
//!
//! Prose and code listings are reproduced from the source articles
//! unchanged; only the structure (sections, blocks) is made explicit here.

pub mod access_control;
pub mod arithmetic;
pub mod home;
pub mod others;
pub mod reentrancy;
pub mod unchecked_calls;

use super::document::Block;

/// Shorthand for a paragraph block.
pub(crate) fn p(text: &'static str) -> Block {
    Block::Paragraph(text)
}

/// Shorthand for a code listing block.
pub(crate) fn code(text: &'static str) -> Block {
    Block::Code(text)
}
