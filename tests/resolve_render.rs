//! Behavioral checks on the resolve → render contract.

use solsec_site::content::{self, Block, PageId};
use solsec_site::routing::RouteTable;

#[test]
fn declared_paths_resolve_and_render() {
    let table = RouteTable::new();

    let home = table.resolve("/").expect("home route");
    assert_eq!(home, PageId::Home);
    let doc = content::render(home);
    assert_eq!(doc.title, "Solidity Smart Contract Vulnerabilities");
}

#[test]
fn access_control_document_matches_the_article() {
    let table = RouteTable::new();
    let page = table.resolve("/access").unwrap();
    assert_eq!(page, PageId::AccessControl);

    let doc = content::render(page);
    assert_eq!(doc.title, "Access Control in Solidity Smart Contracts");

    let first_section = &doc.sections[0];
    assert!(first_section.heading.is_none());
    match &first_section.blocks[0] {
        Block::Paragraph(text) => assert!(text.starts_with(
            "Software and systems that contain access control vulnerabilities"
        )),
        other => panic!("expected opening paragraph, got {other:?}"),
    }
}

#[test]
fn arithmetic_document_has_timelock_and_preventative_techniques() {
    let table = RouteTable::new();
    let page = table.resolve("/arithmetic").unwrap();
    assert_eq!(page, PageId::Arithmetic);

    let doc = content::render(page);
    assert!(doc.code_listings().any(|l| l.contains("TimeLock")));
    assert!(doc.headings().any(|h| h == "Preventative Techniques"));
}

#[test]
fn reentrancy_document_has_etherstore_and_three_step_attack() {
    let table = RouteTable::new();
    let page = table.resolve("/reentrancy").unwrap();
    assert_eq!(page, PageId::Reentrancy);

    let doc = content::render(page);
    assert!(doc.code_listings().any(|l| l.contains("EtherStore")));

    let steps = doc
        .sections
        .iter()
        .flat_map(|s| &s.blocks)
        .find_map(|b| match b {
            Block::Steps(steps) => Some(steps),
            _ => None,
        })
        .expect("attack process list missing");
    assert_eq!(steps.len(), 3);
}

#[test]
fn remaining_routes_resolve_to_distinct_pages() {
    let table = RouteTable::new();
    assert_eq!(table.resolve("/unchecked"), Some(PageId::UncheckedCalls));
    assert_eq!(table.resolve("/others"), Some(PageId::Others));
    assert_eq!(table.resolve("/unknown-path"), None);

    let mut seen = std::collections::HashSet::new();
    for route in table.routes() {
        assert!(seen.insert(route.page), "{} mapped twice", route.page);
    }
}

#[test]
fn navigating_twice_renders_the_same_document() {
    let table = RouteTable::new();
    for path in ["/", "/access", "/arithmetic", "/reentrancy", "/unchecked", "/others"] {
        let page = table.resolve(path).unwrap();
        assert_eq!(content::render(page), content::render(page), "{path}");
    }
}

#[test]
fn every_routed_page_has_content() {
    let table = RouteTable::new();
    for route in table.routes() {
        let doc = content::render(route.page);
        assert!(!doc.is_empty(), "{} renders empty", route.path);
        assert!(!doc.title.is_empty(), "{} has no title", route.path);
    }
}
