/*
 * transforms/code_class.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Class rewriters for inline code and code blocks.
 */

use wg21_pandoc_types::{Block, Blocks, Inline, Inlines, has_class};

use crate::error::Result;
use crate::filter::{DocumentFilter, FilterReturn};
use crate::filter_context::FilterContext;

/// Gives inline code with no classes the default C++ class.
///
/// Papers are overwhelmingly about C++, so `` `std::vector` `` should be
/// highlighted without the author writing `{.cpp}` every time.
pub struct DefaultCodeClassFilter {
    class: &'static str,
}

impl DefaultCodeClassFilter {
    pub fn new(class: &'static str) -> Self {
        Self { class }
    }
}

impl Default for DefaultCodeClassFilter {
    fn default() -> Self {
        Self::new("cpp")
    }
}

impl DocumentFilter for DefaultCodeClassFilter {
    fn name(&self) -> &str {
        "default-code-class"
    }

    fn filter_inline(
        &self,
        inline: Inline,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Inline, Inlines>> {
        match inline {
            Inline::Code(mut code) if code.attr.1.is_empty() => {
                code.attr.1.push(self.class.to_string());
                Ok(FilterReturn::FilterResult(vec![Inline::Code(code)], false))
            }
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }
}

const SHORT_CPP_CLASS: &str = "cpp";
const PRISM_CPP_CLASS: &str = "language-cpp";

/// Renames the `cpp` class to `language-cpp` on inline code and code
/// blocks, for Prism highlighting. Other classes are kept in place.
pub struct PrismCodeClassFilter;

fn rename_cpp_class(classes: &mut [String]) {
    for class in classes.iter_mut().filter(|c| c.as_str() == SHORT_CPP_CLASS) {
        *class = PRISM_CPP_CLASS.to_string();
    }
}

impl DocumentFilter for PrismCodeClassFilter {
    fn name(&self) -> &str {
        "prism-code-class"
    }

    fn filter_block(
        &self,
        block: Block,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        match block {
            Block::CodeBlock(mut code) if has_class(&code.attr, SHORT_CPP_CLASS) => {
                rename_cpp_class(&mut code.attr.1);
                Ok(FilterReturn::FilterResult(vec![Block::CodeBlock(code)], false))
            }
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }

    fn filter_inline(
        &self,
        inline: Inline,
        _ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Inline, Inlines>> {
        match inline {
            Inline::Code(mut code) if has_class(&code.attr, SHORT_CPP_CLASS) => {
                rename_cpp_class(&mut code.attr.1);
                Ok(FilterReturn::FilterResult(vec![Inline::Code(code)], false))
            }
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }
}
