/*
 * transforms/node_tracer.rs
 * Copyright (c) 2025 Posit, PBC
 */

use tracing::trace;
use wg21_pandoc_types::{Block, Blocks, Inline, Inlines};

use crate::error::Result;
use crate::filter::{DocumentFilter, FilterReturn};
use crate::filter_context::FilterContext;

/// Logs the kind of every node offered to the chain at trace level.
/// Never claims a node.
pub struct NodeTracer;

impl DocumentFilter for NodeTracer {
    fn name(&self) -> &str {
        "node-tracer"
    }

    fn filter_block(
        &self,
        block: Block,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        trace!(kind = block.kind_name(), "block");
        Ok(FilterReturn::Unchanged(block))
    }

    fn filter_inline(
        &self,
        inline: Inline,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Inline, Inlines>> {
        trace!(kind = inline.kind_name(), "inline");
        Ok(FilterReturn::Unchanged(inline))
    }
}
