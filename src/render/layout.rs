//! Navigation shell shared by every page.
//!
//! # Responsibilities
//! - Emit the document skeleton (head, styles, nav, main)
//! - Build the menu from the route table, marking the current page
//!
//! # Design Decisions
//! - The expandable-menu flag is a hidden checkbox scoped to the shell;
//!   toggling it needs no script and no global state
//! - Styling is inlined so a page is a single self-contained response

use std::fmt::Write;

use crate::content::PageId;
use crate::render::html::escape;
use crate::routing::RouteTable;

/// Site name shown as the home link in the shell.
const SITE_NAME: &str = "Website";

const STYLE: &str = "\
body{margin:0;font-family:Georgia,serif;line-height:1.6;color:#212529}\
nav{display:flex;align-items:center;justify-content:space-between;flex-wrap:wrap;\
background:#343a40;padding:0.5rem 1.5rem}\
nav .title{color:#fff;font-size:1.4rem;text-decoration:none}\
nav ul{display:flex;list-style:none;margin:0;padding:0}\
nav ul li a{display:block;color:#dee2e6;text-decoration:none;padding:0.5rem 0.75rem}\
nav ul li a:hover,nav ul li a[aria-current]{color:#fff;text-decoration:underline}\
nav .menu-toggle,nav .menu-icon{display:none}\
main{max-width:52rem;margin:3rem auto;padding:0 1rem}\
pre{background:#f8f9fa;border:1px solid #dee2e6;padding:1rem;overflow-x:auto}\
@media(max-width:40rem){\
nav .menu-icon{display:block;color:#fff;cursor:pointer;font-size:1.5rem}\
nav ul{display:none;width:100%;flex-direction:column}\
nav .menu-toggle:checked~ul{display:flex}\
}";

/// Wrap an article body in the full page shell.
///
/// `current` marks the active menu entry; `None` leaves the whole menu
/// unmarked (used by the not-found fallback).
pub fn shell(table: &RouteTable, title: &str, current: Option<PageId>, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n");
    out.push_str(&nav(table, current));
    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn nav(table: &RouteTable, current: Option<PageId>) -> String {
    let mut out = String::new();
    out.push_str("<nav>\n");
    let _ = writeln!(out, "<a class=\"title\" href=\"/\">{SITE_NAME}</a>");
    out.push_str("<input type=\"checkbox\" id=\"menu\" class=\"menu-toggle\">\n");
    out.push_str("<label for=\"menu\" class=\"menu-icon\">&#9776;</label>\n");
    out.push_str("<ul>\n");
    for route in table.routes().filter(|r| r.page != PageId::Home) {
        let marker = if current == Some(route.page) {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<li><a href=\"{}\"{}>{}</a></li>",
            route.path,
            marker,
            escape(route.page.menu_label())
        );
    }
    out.push_str("</ul>\n</nav>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_the_five_articles() {
        let table = RouteTable::new();
        let page = shell(&table, "t", None, "");
        for path in ["/access", "/arithmetic", "/reentrancy", "/unchecked", "/others"] {
            assert!(page.contains(&format!("href=\"{path}\"")), "missing {path}");
        }
        // home is the title link, not a menu entry
        assert_eq!(page.matches("<li>").count(), 5);
    }

    #[test]
    fn current_page_is_marked() {
        let table = RouteTable::new();
        let page = shell(&table, "t", Some(PageId::Reentrancy), "");
        assert!(page.contains("<a href=\"/reentrancy\" aria-current=\"page\">"));
    }
}
