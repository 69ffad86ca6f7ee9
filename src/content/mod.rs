//! Page content subsystem.
//!
//! # Data Flow
//! ```text
//! PageId (from routing)
//!     → render() (select article module)
//!     → Document (title, ordered sections, listings)
//!     → html renderer (serialization to markup)
//! ```
//!
//! # Design Decisions
//! - Rendering is pure: same PageId always yields the same Document
//! - Article text is compiled in; no file or network reads at runtime
//! - One module per article keeps the content reviewable in isolation

pub mod document;
pub mod pages;

pub use document::{Block, Document, PageId, Section, Step};

/// Produce the document for a page.
///
/// Pure and deterministic; every [`PageId`] has a document, so this can
/// never fail.
pub fn render(page: PageId) -> Document {
    match page {
        PageId::Home => pages::home::document(),
        PageId::AccessControl => pages::access_control::document(),
        PageId::Arithmetic => pages::arithmetic::document(),
        PageId::Reentrancy => pages::reentrancy::document(),
        PageId::UncheckedCalls => pages::unchecked_calls::document(),
        PageId::Others => pages::others::document(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_renders_nonempty() {
        for page in PageId::ALL {
            let doc = render(page);
            assert_eq!(doc.page, page);
            assert!(!doc.title.is_empty(), "{page} has no title");
            assert!(!doc.is_empty(), "{page} renders an empty document");
        }
    }

    #[test]
    fn render_is_deterministic() {
        for page in PageId::ALL {
            assert_eq!(render(page), render(page));
        }
    }
}
