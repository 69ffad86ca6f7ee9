//! Structured page content.
//!
//! # Responsibilities
//! - Define the page identifier enum
//! - Define the Document tree (title, sections, blocks)
//! - Preserve article order exactly as authored
//!
//! # Design Decisions
//! - Article text lives in `&'static str` data; no parsing at runtime
//! - Invalid page identifiers are unrepresentable (fieldless enum)
//! - Code listings are opaque payload, never interpreted

use std::fmt;

/// Identifier for one of the six site pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    AccessControl,
    Arithmetic,
    Reentrancy,
    UncheckedCalls,
    Others,
}

impl PageId {
    /// All pages, in navigation order.
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::AccessControl,
        PageId::Arithmetic,
        PageId::Reentrancy,
        PageId::UncheckedCalls,
        PageId::Others,
    ];

    /// Stable lowercase name, used for log fields and metric labels.
    pub fn slug(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::AccessControl => "access",
            PageId::Arithmetic => "arithmetic",
            PageId::Reentrancy => "reentrancy",
            PageId::UncheckedCalls => "unchecked",
            PageId::Others => "others",
        }
    }

    /// Menu label as shown in the navigation shell.
    pub fn menu_label(&self) -> &'static str {
        match self {
            PageId::Home => "Website",
            PageId::AccessControl => "AccessControl",
            PageId::Arithmetic => "Arithmetic",
            PageId::Reentrancy => "Reentrancy",
            PageId::UncheckedCalls => "Uncheckedcalls",
            PageId::Others => "Others",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One top-level entry in a numbered process list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: &'static str,
    /// Lettered sub-steps, empty for simple entries.
    pub substeps: &'static [&'static str],
}

/// A unit of article content, kept in authored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    /// Literal code listing, reproduced verbatim inside `<pre><code>`.
    Code(&'static str),
    /// Numbered list of steps (e.g. an attack walk-through).
    Steps(Vec<Step>),
}

/// A heading-delimited slice of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<&'static str>,
    pub blocks: Vec<Block>,
}

impl Section {
    /// Leading section before the first heading.
    pub fn lead(blocks: Vec<Block>) -> Self {
        Self { heading: None, blocks }
    }

    pub fn titled(heading: &'static str, blocks: Vec<Block>) -> Self {
        Self {
            heading: Some(heading),
            blocks,
        }
    }
}

/// A fully rendered page: title plus ordered sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub page: PageId,
    pub title: &'static str,
    pub sections: Vec<Section>,
}

impl Document {
    /// True if the document carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.blocks.is_empty())
    }

    /// All paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().flat_map(|s| {
            s.blocks.iter().filter_map(|b| match b {
                Block::Paragraph(text) => Some(*text),
                _ => None,
            })
        })
    }

    /// All code listings in document order.
    pub fn code_listings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().flat_map(|s| {
            s.blocks.iter().filter_map(|b| match b {
                Block::Code(text) => Some(*text),
                _ => None,
            })
        })
    }

    /// Section headings in document order.
    pub fn headings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().filter_map(|s| s.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for a in PageId::ALL {
            for b in PageId::ALL {
                if a != b {
                    assert_ne!(a.slug(), b.slug());
                }
            }
        }
    }

    #[test]
    fn empty_document_detected() {
        let doc = Document {
            page: PageId::Home,
            title: "t",
            sections: vec![Section::lead(vec![])],
        };
        assert!(doc.is_empty());

        let doc = Document {
            page: PageId::Home,
            title: "t",
            sections: vec![Section::lead(vec![Block::Paragraph("p")])],
        };
        assert!(!doc.is_empty());
    }
}
