/*
 * transforms/blockquote.rs
 * Copyright (c) 2025 Posit, PBC
 */

use wg21_pandoc_types::{Block, Blocks, has_exact_classes};

use crate::error::Result;
use crate::filter::{DocumentFilter, FilterReturn};
use crate::filter_context::FilterContext;

pub(crate) const BQ_CLASS: &str = "bq";

/// Turns a Div whose only class is `bq` into a block quote with the same
/// children. Divs carrying `bq` next to other classes are left to the
/// filters for those classes.
pub struct BlockQuoteDivFilter;

impl DocumentFilter for BlockQuoteDivFilter {
    fn name(&self) -> &str {
        "bq-div"
    }

    fn filter_block(
        &self,
        block: Block,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        match block {
            Block::Div(div) if has_exact_classes(&div.attr, &[BQ_CLASS]) => Ok(
                FilterReturn::FilterResult(vec![Block::block_quote(div.content)], true),
            ),
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }
}
