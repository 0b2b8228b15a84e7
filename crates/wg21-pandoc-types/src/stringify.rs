/*
 * stringify.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Plain-text extraction from AST content.
 */

use crate::block::Block;
use crate::inline::Inline;

/// Convert a single inline element to plain text
pub fn stringify_inline(inline: &Inline) -> String {
    match inline {
        Inline::Str(s) => s.text.clone(),
        Inline::Space(_) => " ".to_string(),
        Inline::SoftBreak(_) => " ".to_string(),
        Inline::LineBreak(_) => "\n".to_string(),
        Inline::Emph(e) => stringify_inlines(&e.content),
        Inline::Strong(s) => stringify_inlines(&s.content),
        Inline::Code(c) => c.text.clone(),
        Inline::RawInline(_) => String::new(), // Raw content is dropped
        Inline::Link(l) => stringify_inlines(&l.content),
        Inline::Span(s) => stringify_inlines(&s.content),
    }
}

/// Convert a list of inline elements to plain text
pub fn stringify_inlines(inlines: &[Inline]) -> String {
    inlines.iter().map(stringify_inline).collect()
}

/// Convert a single block element to plain text
pub fn stringify_block(block: &Block) -> String {
    match block {
        Block::Paragraph(p) => stringify_inlines(&p.content),
        Block::Plain(p) => stringify_inlines(&p.content),
        Block::Header(h) => stringify_inlines(&h.content),
        Block::CodeBlock(c) => c.text.clone(),
        Block::RawBlock(_) => String::new(),
        Block::BlockQuote(b) => stringify_blocks(&b.content),
        Block::BulletList(l) => l
            .content
            .iter()
            .map(|items| stringify_blocks(items))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::OrderedList(l) => l
            .content
            .iter()
            .map(|items| stringify_blocks(items))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Div(d) => stringify_blocks(&d.content),
        Block::Table(t) => t
            .caption
            .long
            .as_ref()
            .map(|long| stringify_blocks(long))
            .unwrap_or_default(),
        Block::HorizontalRule(_) => String::new(),
    }
}

/// Convert a list of block elements to plain text
pub fn stringify_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(stringify_block)
        .collect::<Vec<_>>()
        .join("\n")
}
