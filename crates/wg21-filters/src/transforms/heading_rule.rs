/*
 * transforms/heading_rule.rs
 * Copyright (c) 2025 Posit, PBC
 */

use wg21_pandoc_types::{Block, Blocks};

use crate::config::DEFAULT_HEADING_RULE_STYLE;
use crate::error::Result;
use crate::filter::{DocumentFilter, FilterReturn};
use crate::filter_context::FilterContext;

/// Draws a rule under every level-1 heading by setting its `style`
/// attribute. An existing `style` is replaced.
pub struct HeadingRuleFilter {
    style: String,
}

impl HeadingRuleFilter {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }
}

impl Default for HeadingRuleFilter {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_RULE_STYLE)
    }
}

impl DocumentFilter for HeadingRuleFilter {
    fn name(&self) -> &str {
        "heading-rule"
    }

    fn filter_block(
        &self,
        block: Block,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        match block {
            Block::Header(mut header) if header.level == 1 => {
                header
                    .attr
                    .2
                    .insert("style".to_string(), self.style.clone());
                Ok(FilterReturn::FilterResult(vec![Block::Header(header)], true))
            }
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wg21_pandoc_types::Inline;

    fn style_of(result: FilterReturn<Block, Blocks>) -> Option<String> {
        match result {
            FilterReturn::FilterResult(blocks, _) => match &blocks[0] {
                Block::Header(h) => h.attr.2.get("style").cloned(),
                _ => None,
            },
            FilterReturn::Unchanged(_) => None,
        }
    }

    #[test]
    fn test_level_one_gets_rule() {
        let mut ctx = FilterContext::new();
        let result = HeadingRuleFilter::default()
            .filter_block(Block::header(1, Inline::text("Motivation")), &mut ctx)
            .unwrap();
        assert_eq!(
            style_of(result).as_deref(),
            Some("border-bottom:1px solid #cccccc")
        );
    }

    #[test]
    fn test_other_levels_unchanged() {
        let mut ctx = FilterContext::new();
        let block = Block::header(2, Inline::text("Details"));
        let result = HeadingRuleFilter::default()
            .filter_block(block.clone(), &mut ctx)
            .unwrap();
        assert_eq!(result, FilterReturn::Unchanged(block));
    }

    #[test]
    fn test_applying_twice_is_stable() {
        let mut ctx = FilterContext::new();
        let filter = HeadingRuleFilter::new("border:0");
        let FilterReturn::FilterResult(once, _) = filter
            .filter_block(Block::header(1, Inline::text("x")), &mut ctx)
            .unwrap()
        else {
            panic!("expected FilterResult");
        };
        let FilterReturn::FilterResult(twice, _) =
            filter.filter_block(once[0].clone(), &mut ctx).unwrap()
        else {
            panic!("expected FilterResult");
        };
        assert_eq!(once, twice);
    }
}
