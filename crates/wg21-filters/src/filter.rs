/*
 * filter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document filter trait and the ordered chain that dispatches to filters.
 */

use tracing::debug;
use wg21_pandoc_types::{Block, Blocks, Inline, Inlines};

use crate::config::{CodeClassStyle, FilterConfig};
use crate::error::Result;
use crate::filter_context::FilterContext;
use crate::lookup::LookupCache;
use crate::transforms::{
    BlockQuoteDivFilter, DefaultCodeClassFilter, HeadingRuleFilter, ItemDeclFilter,
    LongTableFilter, NodeTracer, PrismCodeClassFilter, Wg21LinkFilter, WordingListFilter,
};

/// Result of offering a node to a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterReturn<T, U> {
    /// The filter does not handle this node; it is handed back untouched.
    Unchanged(T),
    /// The node is replaced by the given sequence. The flag says whether
    /// the host should descend into the children of the replacement nodes.
    FilterResult(U, bool), // (new content, should recurse)
}

/// A filter that may claim block or inline nodes of a document.
///
/// Filters are independent and stateless across nodes. A filter that does
/// not recognize a node returns it as [`FilterReturn::Unchanged`].
pub trait DocumentFilter: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &str;

    fn filter_block(
        &self,
        block: Block,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        Ok(FilterReturn::Unchanged(block))
    }

    fn filter_inline(
        &self,
        inline: Inline,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Inline, Inlines>> {
        Ok(FilterReturn::Unchanged(inline))
    }
}

/// An ordered list of filters. The first filter to claim a node wins.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn DocumentFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The filters for a paper, in dispatch order.
    ///
    /// The paper-name lookup is given its own cache built from
    /// `config.annexf`; nothing is read until a `wg21` span is met.
    pub fn standard(config: &FilterConfig) -> Self {
        let mut chain = Self::new();
        if config.trace_nodes {
            chain.push(NodeTracer);
        }
        chain.push(DefaultCodeClassFilter::new(
            config.code_class_style.default_class(),
        ));
        chain.push(HeadingRuleFilter::new(config.heading_rule_style.clone()));
        chain.push(BlockQuoteDivFilter);
        chain.push(ItemDeclFilter);
        chain.push(WordingListFilter);
        chain.push(LongTableFilter);
        chain.push(Wg21LinkFilter::new(
            LookupCache::from_path(config.annexf.clone()),
            config.wg21_link_base.clone(),
        ));
        if config.code_class_style == CodeClassStyle::Prism {
            chain.push(PrismCodeClassFilter);
        }
        chain
    }

    /// Append a filter to the end of the chain.
    pub fn push(&mut self, filter: impl DocumentFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, filter: impl DocumentFilter + 'static) -> Self {
        self.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in dispatch order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Offer a block to each filter in turn until one claims it.
    pub fn apply_block(
        &self,
        block: Block,
        ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        let mut block = block;
        for filter in &self.filters {
            let kind = block.kind_name();
            match filter.filter_block(block, ctx)? {
                FilterReturn::Unchanged(unchanged) => block = unchanged,
                claimed @ FilterReturn::FilterResult(..) => {
                    debug!(filter = filter.name(), kind, "filter claimed block");
                    return Ok(claimed);
                }
            }
        }
        Ok(FilterReturn::Unchanged(block))
    }

    /// Offer an inline to each filter in turn until one claims it.
    pub fn apply_inline(
        &self,
        inline: Inline,
        ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Inline, Inlines>> {
        let mut inline = inline;
        for filter in &self.filters {
            let kind = inline.kind_name();
            match filter.filter_inline(inline, ctx)? {
                FilterReturn::Unchanged(unchanged) => inline = unchanged,
                claimed @ FilterReturn::FilterResult(..) => {
                    debug!(filter = filter.name(), kind, "filter claimed inline");
                    return Ok(claimed);
                }
            }
        }
        Ok(FilterReturn::Unchanged(inline))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filter_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wg21_pandoc_types::{attr_with_classes, empty_attr};

    /// Claims every paragraph, replacing it with a horizontal rule.
    struct ParaToRule;

    impl DocumentFilter for ParaToRule {
        fn name(&self) -> &str {
            "para-to-rule"
        }

        fn filter_block(
            &self,
            block: Block,
            _ctx: &mut FilterContext,
        ) -> Result<FilterReturn<Block, Blocks>> {
            match block {
                Block::Paragraph(_) => Ok(FilterReturn::FilterResult(
                    vec![Block::horizontal_rule()],
                    false,
                )),
                other => Ok(FilterReturn::Unchanged(other)),
            }
        }
    }

    /// Claims every paragraph, dropping it.
    struct DropPara;

    impl DocumentFilter for DropPara {
        fn name(&self) -> &str {
            "drop-para"
        }

        fn filter_block(
            &self,
            block: Block,
            _ctx: &mut FilterContext,
        ) -> Result<FilterReturn<Block, Blocks>> {
            match block {
                Block::Paragraph(_) => Ok(FilterReturn::FilterResult(vec![], false)),
                other => Ok(FilterReturn::Unchanged(other)),
            }
        }
    }

    #[test]
    fn test_empty_chain_leaves_node_unchanged() {
        let chain = FilterChain::new();
        let mut ctx = FilterContext::new();
        let block = Block::para(Inline::text("hello"));
        let result = chain.apply_block(block.clone(), &mut ctx).unwrap();
        assert_eq!(result, FilterReturn::Unchanged(block));
    }

    #[test]
    fn test_first_claiming_filter_wins() {
        let chain = FilterChain::new().with(ParaToRule).with(DropPara);
        let mut ctx = FilterContext::new();
        let result = chain
            .apply_block(Block::para(Inline::text("x")), &mut ctx)
            .unwrap();
        assert_eq!(
            result,
            FilterReturn::FilterResult(vec![Block::horizontal_rule()], false)
        );

        let chain = FilterChain::new().with(DropPara).with(ParaToRule);
        let result = chain
            .apply_block(Block::para(Inline::text("x")), &mut ctx)
            .unwrap();
        assert_eq!(result, FilterReturn::FilterResult(vec![], false));
    }

    #[test]
    fn test_unclaimed_node_passes_through_every_filter() {
        let chain = FilterChain::new().with(ParaToRule).with(DropPara);
        let mut ctx = FilterContext::new();
        let block = Block::div(attr_with_classes(&["note"]), vec![]);
        let result = chain.apply_block(block.clone(), &mut ctx).unwrap();
        assert_eq!(result, FilterReturn::Unchanged(block));
    }

    #[test]
    fn test_default_inline_hook_is_unchanged() {
        let chain = FilterChain::new().with(ParaToRule);
        let mut ctx = FilterContext::new();
        let inline = Inline::code(empty_attr(), "x");
        let result = chain.apply_inline(inline.clone(), &mut ctx).unwrap();
        assert_eq!(result, FilterReturn::Unchanged(inline));
    }

    #[test]
    fn test_standard_chain_order() {
        let chain = FilterChain::standard(&FilterConfig::default());
        assert_eq!(
            chain.filter_names(),
            vec![
                "default-code-class",
                "heading-rule",
                "bq-div",
                "itemdecl",
                "wordinglist",
                "longtable",
                "wg21-link",
            ]
        );
    }

    #[test]
    fn test_standard_chain_with_prism_and_tracing() {
        let config = FilterConfig {
            code_class_style: CodeClassStyle::Prism,
            trace_nodes: true,
            ..FilterConfig::default()
        };
        let chain = FilterChain::standard(&config);
        let names = chain.filter_names();
        assert_eq!(names.first(), Some(&"node-tracer"));
        assert_eq!(names.last(), Some(&"prism-code-class"));
        assert_eq!(names.len(), 9);
    }
}
