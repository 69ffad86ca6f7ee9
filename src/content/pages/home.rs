//! Landing page.

use super::p;
use crate::content::document::{Document, PageId, Section};

pub fn document() -> Document {
    Document {
        page: PageId::Home,
        title: "Solidity Smart Contract Vulnerabilities",
        sections: vec![Section::lead(vec![
            p("Smart contracts deployed to Ethereum are immutable and handle real value, so a single \
               coding mistake can be catastrophic and permanent. This site collects articles on the most \
               common classes of Solidity vulnerabilities, each illustrated with real contract code and \
               the techniques used to prevent them."),
            p("Use the menu to browse the articles: access control flaws, arithmetic over/underflows, \
               re-entrancy, unchecked CALL return values, and a collection of further issues including \
               denial of service, block timestamp manipulation, unexpected ether and delegatecall misuse."),
        ])],
    }
}
