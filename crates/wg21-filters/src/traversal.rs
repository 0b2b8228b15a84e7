/*
 * traversal.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Top-down document walk that feeds every node to a filter chain.
 */

//! Top-down document traversal.
//!
//! Every block and inline is offered to the chain before its children.
//! When a filter replaces a node, the replacement is never offered to the
//! chain again: depending on the filter's recurse flag, the walk either
//! continues into the replacement's children or leaves it alone. This keeps
//! a filter whose output still matches its own trigger from looping.

use wg21_pandoc_types::{
    Block, BlockQuote, Blocks, BulletList, Caption, Cell, Div, Emph, Header, Inline, Inlines,
    Link, OrderedList, Pandoc, Paragraph, Plain, Row, Span, Strong, Table, TableBody, TableFoot,
    TableHead,
};

use crate::error::Result;
use crate::filter::{FilterChain, FilterReturn};
use crate::filter_context::FilterContext;

/// Apply `chain` to every node of `doc`. Metadata is passed through.
pub fn apply_filters(doc: Pandoc, chain: &FilterChain, ctx: &mut FilterContext) -> Result<Pandoc> {
    Ok(Pandoc {
        meta: doc.meta,
        blocks: traverse_blocks(doc.blocks, chain, ctx)?,
    })
}

pub fn traverse_blocks(blocks: Blocks, chain: &FilterChain, ctx: &mut FilterContext) -> Result<Blocks> {
    let mut result = Vec::with_capacity(blocks.len());
    for block in blocks {
        result.extend(traverse_block(block, chain, ctx)?);
    }
    Ok(result)
}

pub fn traverse_block(block: Block, chain: &FilterChain, ctx: &mut FilterContext) -> Result<Blocks> {
    match chain.apply_block(block, ctx)? {
        FilterReturn::Unchanged(block) => Ok(vec![traverse_block_structure(block, chain, ctx)?]),
        FilterReturn::FilterResult(new_content, recurse) => {
            if !recurse {
                Ok(new_content)
            } else {
                new_content
                    .into_iter()
                    .map(|block| traverse_block_structure(block, chain, ctx))
                    .collect()
            }
        }
    }
}

pub fn traverse_inlines(
    inlines: Inlines,
    chain: &FilterChain,
    ctx: &mut FilterContext,
) -> Result<Inlines> {
    let mut result = Vec::with_capacity(inlines.len());
    for inline in inlines {
        result.extend(traverse_inline(inline, chain, ctx)?);
    }
    Ok(result)
}

pub fn traverse_inline(
    inline: Inline,
    chain: &FilterChain,
    ctx: &mut FilterContext,
) -> Result<Inlines> {
    match chain.apply_inline(inline, ctx)? {
        FilterReturn::Unchanged(inline) => Ok(vec![traverse_inline_structure(inline, chain, ctx)?]),
        FilterReturn::FilterResult(new_content, recurse) => {
            if !recurse {
                Ok(new_content)
            } else {
                new_content
                    .into_iter()
                    .map(|inline| traverse_inline_structure(inline, chain, ctx))
                    .collect()
            }
        }
    }
}

/// Rebuild `block` with its children traversed. The block itself is not
/// offered to the chain.
fn traverse_block_structure(
    block: Block,
    chain: &FilterChain,
    ctx: &mut FilterContext,
) -> Result<Block> {
    Ok(match block {
        Block::Plain(plain) => Block::Plain(Plain {
            content: traverse_inlines(plain.content, chain, ctx)?,
        }),
        Block::Paragraph(para) => Block::Paragraph(Paragraph {
            content: traverse_inlines(para.content, chain, ctx)?,
        }),
        Block::BlockQuote(quote) => Block::BlockQuote(BlockQuote {
            content: traverse_blocks(quote.content, chain, ctx)?,
        }),
        Block::OrderedList(list) => Block::OrderedList(OrderedList {
            attr: list.attr,
            content: traverse_list_items(list.content, chain, ctx)?,
        }),
        Block::BulletList(list) => Block::BulletList(BulletList {
            content: traverse_list_items(list.content, chain, ctx)?,
        }),
        Block::Header(header) => Block::Header(Header {
            level: header.level,
            attr: header.attr,
            content: traverse_inlines(header.content, chain, ctx)?,
        }),
        Block::Div(div) => Block::Div(Div {
            attr: div.attr,
            content: traverse_blocks(div.content, chain, ctx)?,
        }),
        Block::Table(table) => Block::Table(traverse_table(table, chain, ctx)?),
        Block::CodeBlock(_) | Block::RawBlock(_) | Block::HorizontalRule(_) => block,
    })
}

fn traverse_inline_structure(
    inline: Inline,
    chain: &FilterChain,
    ctx: &mut FilterContext,
) -> Result<Inline> {
    Ok(match inline {
        Inline::Emph(emph) => Inline::Emph(Emph {
            content: traverse_inlines(emph.content, chain, ctx)?,
        }),
        Inline::Strong(strong) => Inline::Strong(Strong {
            content: traverse_inlines(strong.content, chain, ctx)?,
        }),
        Inline::Link(link) => Inline::Link(Link {
            attr: link.attr,
            content: traverse_inlines(link.content, chain, ctx)?,
            target: link.target,
        }),
        Inline::Span(span) => Inline::Span(Span {
            attr: span.attr,
            content: traverse_inlines(span.content, chain, ctx)?,
        }),
        Inline::Str(_)
        | Inline::Space(_)
        | Inline::SoftBreak(_)
        | Inline::LineBreak(_)
        | Inline::Code(_)
        | Inline::RawInline(_) => inline,
    })
}

fn traverse_list_items(
    items: Vec<Blocks>,
    chain: &FilterChain,
    ctx: &mut FilterContext,
) -> Result<Vec<Blocks>> {
    items
        .into_iter()
        .map(|item| traverse_blocks(item, chain, ctx))
        .collect()
}

fn traverse_rows(rows: Vec<Row>, chain: &FilterChain, ctx: &mut FilterContext) -> Result<Vec<Row>> {
    rows.into_iter()
        .map(|row| {
            let cells = row
                .cells
                .into_iter()
                .map(|cell| {
                    Ok(Cell {
                        content: traverse_blocks(cell.content, chain, ctx)?,
                        ..cell
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Row {
                attr: row.attr,
                cells,
            })
        })
        .collect()
}

fn traverse_table(table: Table, chain: &FilterChain, ctx: &mut FilterContext) -> Result<Table> {
    let caption = Caption {
        short: table
            .caption
            .short
            .map(|short| traverse_inlines(short, chain, ctx))
            .transpose()?,
        long: table
            .caption
            .long
            .map(|long| traverse_blocks(long, chain, ctx))
            .transpose()?,
    };
    let head = TableHead {
        attr: table.head.attr,
        rows: traverse_rows(table.head.rows, chain, ctx)?,
    };
    let bodies = table
        .bodies
        .into_iter()
        .map(|body| {
            Ok(TableBody {
                attr: body.attr,
                rowhead_columns: body.rowhead_columns,
                head: traverse_rows(body.head, chain, ctx)?,
                body: traverse_rows(body.body, chain, ctx)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let foot = TableFoot {
        attr: table.foot.attr,
        rows: traverse_rows(table.foot.rows, chain, ctx)?,
    };
    Ok(Table {
        attr: table.attr,
        caption,
        colspec: table.colspec,
        head,
        bodies,
        foot,
    })
}
