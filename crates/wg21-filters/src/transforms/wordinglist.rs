/*
 * transforms/wordinglist.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Continuous numbering of lists interleaved with prose.
 */

use wg21_pandoc_types::{Block, Blocks, empty_attr, has_class};

use crate::error::Result;
use crate::filter::{DocumentFilter, FilterReturn};
use crate::filter_context::FilterContext;
use crate::transforms::split::split_and_indent;

const WORDINGLIST_CLASS: &str = "wordinglist";

/// Number every list among `children` as one continuous sequence and
/// indent the prose between them.
///
/// Each list (bullet or ordered) becomes an ordered list starting one past
/// the last item of the list before it, numbered with decimals and a
/// period whatever its original style.
pub fn renumber_wording_list(children: Blocks) -> Block {
    let mut next = 1;
    let content = split_and_indent(
        children,
        |block| matches!(block, Block::BulletList(_) | Block::OrderedList(_)),
        |block| {
            let items = match block {
                Block::BulletList(list) => list.content,
                Block::OrderedList(list) => list.content,
                other => return other,
            };
            let start = next;
            next += items.len();
            Block::ordered_list(start, items)
        },
    );
    Block::div(empty_attr(), content)
}

/// Claims Divs with the `wordinglist` class.
pub struct WordingListFilter;

impl DocumentFilter for WordingListFilter {
    fn name(&self) -> &str {
        "wordinglist"
    }

    fn filter_block(
        &self,
        block: Block,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        match block {
            Block::Div(div) if has_class(&div.attr, WORDINGLIST_CLASS) => Ok(
                FilterReturn::FilterResult(vec![renumber_wording_list(div.content)], true),
            ),
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }
}
