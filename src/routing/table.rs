//! Route lookup.
//!
//! # Responsibilities
//! - Store the fixed path → page mapping
//! - Look up the page for an incoming request path
//! - Return the matched page or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Exact-match comparison only; no patterns, no parameters
//! - Explicit `None` rather than a silent default page

use std::collections::HashMap;

use crate::content::PageId;

/// A single path → page entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: PageId,
}

/// The six routes the site serves, in navigation order.
pub const ROUTES: [Route; 6] = [
    Route {
        path: "/",
        page: PageId::Home,
    },
    Route {
        path: "/access",
        page: PageId::AccessControl,
    },
    Route {
        path: "/arithmetic",
        page: PageId::Arithmetic,
    },
    Route {
        path: "/reentrancy",
        page: PageId::Reentrancy,
    },
    Route {
        path: "/unchecked",
        page: PageId::UncheckedCalls,
    },
    Route {
        path: "/others",
        page: PageId::Others,
    },
];

/// Immutable path → page lookup, built once at startup.
#[derive(Debug)]
pub struct RouteTable {
    by_path: HashMap<&'static str, PageId>,
}

impl RouteTable {
    pub fn new() -> Self {
        let mut by_path = HashMap::with_capacity(ROUTES.len());
        for route in ROUTES {
            let previous = by_path.insert(route.path, route.page);
            debug_assert!(
                previous.is_none(),
                "duplicate route path {}",
                route.path
            );
        }
        Self { by_path }
    }

    /// Resolve a request path to a page.
    ///
    /// Comparison is exact: trailing slashes, casing differences or query
    /// strings do not match. `None` is the expected no-match signal; the
    /// caller decides the fallback.
    pub fn resolve(&self, path: &str) -> Option<PageId> {
        self.by_path.get(path).copied()
    }

    /// Declared routes in navigation order.
    pub fn routes(&self) -> impl Iterator<Item = Route> {
        ROUTES.into_iter()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_paths_resolve_to_documented_pages() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/"), Some(PageId::Home));
        assert_eq!(table.resolve("/access"), Some(PageId::AccessControl));
        assert_eq!(table.resolve("/arithmetic"), Some(PageId::Arithmetic));
        assert_eq!(table.resolve("/reentrancy"), Some(PageId::Reentrancy));
        assert_eq!(table.resolve("/unchecked"), Some(PageId::UncheckedCalls));
        assert_eq!(table.resolve("/others"), Some(PageId::Others));
    }

    #[test]
    fn unknown_paths_do_not_match() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/unknown-path"), None);
        assert_eq!(table.resolve(""), None);
        assert_eq!(table.resolve("/access/"), None);
        assert_eq!(table.resolve("/Access"), None);
        assert_eq!(table.resolve("/reentrancy?x=1"), None);
    }

    #[test]
    fn resolved_pages_are_distinct() {
        let table = RouteTable::new();
        let pages: Vec<_> = ROUTES
            .iter()
            .map(|r| table.resolve(r.path).unwrap())
            .collect();
        for (i, a) in pages.iter().enumerate() {
            for b in &pages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn iteration_preserves_navigation_order() {
        let table = RouteTable::new();
        let paths: Vec<_> = table.routes().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec!["/", "/access", "/arithmetic", "/reentrancy", "/unchecked", "/others"]
        );
    }
}
