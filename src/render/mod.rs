//! HTML rendering subsystem.
//!
//! # Data Flow
//! ```text
//! PageId (resolved by routing)
//!     → content::render (Document)
//!     → html.rs (article body markup)
//!     → layout.rs (navigation shell around the body)
//!     → complete HTML page (String)
//! ```

pub mod html;
pub mod layout;

use crate::content::{self, PageId};
use crate::routing::RouteTable;

/// Render the complete HTML page for a resolved page.
pub fn page(table: &RouteTable, page: PageId) -> String {
    let doc = content::render(page);
    layout::shell(table, doc.title, Some(page), &html::document_body(&doc))
}

/// Render the fallback page for an unmatched path.
pub fn not_found(table: &RouteTable) -> String {
    let body = "<h1>Page Not Found</h1>\n\
                <p>The page you requested does not exist. Use the menu to browse the articles.</p>\n";
    layout::shell(table, "Page Not Found", None, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_idempotent() {
        let table = RouteTable::new();
        for id in PageId::ALL {
            assert_eq!(page(&table, id), page(&table, id));
        }
    }

    #[test]
    fn page_title_appears_in_head_and_body() {
        let table = RouteTable::new();
        let html = page(&table, PageId::AccessControl);
        assert!(html.contains("<title>Access Control in Solidity Smart Contracts</title>"));
        assert!(html.contains("<h1>Access Control in Solidity Smart Contracts</h1>"));
    }

    #[test]
    fn not_found_keeps_the_navigation_shell() {
        let table = RouteTable::new();
        let html = not_found(&table);
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("href=\"/access\""));
    }
}
