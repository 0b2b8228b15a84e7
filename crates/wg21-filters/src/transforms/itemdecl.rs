/*
 * transforms/itemdecl.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Indentation of descriptive prose inside item declarations.
 */

//! Item declaration layout.
//!
//! Standard wording describes a library entity with its declaration in code
//! followed by indented paragraphs (Constraints, Effects, Returns). In
//! Markdown this is written flat:
//!
//! ````markdown
//! ::: itemdecl
//! ```cpp
//! template<class T> void swap(T& a, T& b);
//! ```
//! *Effects*: Exchanges values stored in two locations.
//! :::
//! ````
//!
//! Code blocks and raw blocks stay where they are; every run of blocks
//! between them is wrapped in a block quote so that it renders indented.

use wg21_pandoc_types::{Block, Blocks, empty_attr, has_class};

use crate::error::Result;
use crate::filter::{DocumentFilter, FilterReturn};
use crate::filter_context::FilterContext;
use crate::transforms::blockquote::BQ_CLASS;
use crate::transforms::split::split_and_indent;

const ITEMDECL_CLASS: &str = "itemdecl";

/// Indent the prose between the code blocks of an item declaration.
///
/// The result is a plain Div around the split sequence, or a block quote
/// when `quote_whole` is set.
pub fn indent_item_decl(children: Blocks, quote_whole: bool) -> Block {
    let content = split_and_indent(
        children,
        |block| matches!(block, Block::CodeBlock(_) | Block::RawBlock(_)),
        |block| block,
    );
    if quote_whole {
        Block::block_quote(content)
    } else {
        Block::div(empty_attr(), content)
    }
}

/// Claims Divs with the `itemdecl` class. A `bq` class on the same Div
/// quotes the whole result.
pub struct ItemDeclFilter;

impl DocumentFilter for ItemDeclFilter {
    fn name(&self) -> &str {
        "itemdecl"
    }

    fn filter_block(
        &self,
        block: Block,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        match block {
            Block::Div(div) if has_class(&div.attr, ITEMDECL_CLASS) => {
                let quote_whole = has_class(&div.attr, BQ_CLASS);
                Ok(FilterReturn::FilterResult(
                    vec![indent_item_decl(div.content, quote_whole)],
                    true,
                ))
            }
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }
}
