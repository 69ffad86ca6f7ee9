//! HTML serialization of documents.
//!
//! # Responsibilities
//! - Serialize a Document's sections to markup in authored order
//! - Escape all text; content is data, never markup
//!
//! # Design Decisions
//! - Deterministic: same Document always produces the same bytes
//! - Listings go through `<pre><code>` untouched apart from escaping

use std::fmt::Write;

use crate::content::{Block, Document, Step};

/// Escape text for use inside an HTML element body or attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize the article body of a document (the content inside `<main>`).
pub fn document_body(doc: &Document) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<h1>{}</h1>", escape(doc.title));
    for section in &doc.sections {
        if let Some(heading) = section.heading {
            let _ = writeln!(out, "<h2>{}</h2>", escape(heading));
        }
        for block in &section.blocks {
            write_block(&mut out, block);
        }
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph(text) => {
            let _ = writeln!(out, "<p>{}</p>", escape(text));
        }
        Block::Code(listing) => {
            let _ = writeln!(out, "<pre><code>{}</code></pre>", escape(listing));
        }
        Block::Steps(steps) => {
            out.push_str("<ol>\n");
            for step in steps {
                write_step(out, step);
            }
            out.push_str("</ol>\n");
        }
    }
}

fn write_step(out: &mut String, step: &Step) {
    out.push_str("<li>\n");
    let _ = writeln!(out, "<p>{}</p>", escape(step.text));
    if !step.substeps.is_empty() {
        out.push_str("<ol type=\"a\">\n");
        for sub in step.substeps {
            let _ = writeln!(out, "<li>{}</li>", escape(sub));
        }
        out.push_str("</ol>\n");
    }
    out.push_str("</li>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PageId, Section};

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn body_preserves_block_order() {
        let doc = Document {
            page: PageId::Home,
            title: "Title",
            sections: vec![Section::titled(
                "Heading",
                vec![
                    Block::Paragraph("first"),
                    Block::Code("contract A {}"),
                    Block::Paragraph("second"),
                ],
            )],
        };
        let body = document_body(&doc);
        let first = body.find("first").unwrap();
        let listing = body.find("contract A {}").unwrap();
        let second = body.find("second").unwrap();
        assert!(first < listing && listing < second);
    }

    #[test]
    fn listings_are_escaped_verbatim() {
        let doc = Document {
            page: PageId::Home,
            title: "t",
            sections: vec![Section::lead(vec![Block::Code(
                "mapping(address => uint) balances;",
            )])],
        };
        let body = document_body(&doc);
        assert!(body.contains("mapping(address =&gt; uint) balances;"));
    }
}
