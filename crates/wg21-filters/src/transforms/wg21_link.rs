/*
 * transforms/wg21_link.rs
 * Copyright (c) 2025 Posit, PBC
 */

use wg21_pandoc_types::{Inline, Inlines, has_exact_classes, stringify_inlines};

use crate::config::DEFAULT_WG21_LINK_BASE;
use crate::error::Result;
use crate::filter::{DocumentFilter, FilterReturn};
use crate::filter_context::FilterContext;
use crate::lookup::LookupCache;

const WG21_CLASS: &str = "wg21";

/// Turns `[N4849]{.wg21}` into a link to the paper, preceded by the
/// paper's name when the lookup table knows it:
///
/// ```text
/// C++20 Working Draft [N4849]
/// ```
///
/// The first matching span loads the lookup table; a missing or broken
/// table aborts the run. A span with no text is left alone with a warning
/// and never loads the table.
pub struct Wg21LinkFilter {
    cache: LookupCache,
    link_base: String,
}

impl Wg21LinkFilter {
    pub fn new(cache: LookupCache, link_base: impl Into<String>) -> Self {
        Self {
            cache,
            link_base: link_base.into(),
        }
    }

    pub fn with_cache(cache: LookupCache) -> Self {
        Self::new(cache, DEFAULT_WG21_LINK_BASE)
    }

    /// Build the replacement for a reference to `target`.
    pub fn link_inlines(&self, target: &str) -> Result<Inlines> {
        let link = Inline::link(
            vec![Inline::str(format!("[{target}]"))],
            format!("{}{target}", self.link_base),
        );
        Ok(match self.cache.resolve(target)? {
            Some(name) => vec![Inline::str(format!("{name} ")), link],
            None => vec![link],
        })
    }
}

impl DocumentFilter for Wg21LinkFilter {
    fn name(&self) -> &str {
        "wg21-link"
    }

    fn filter_inline(
        &self,
        inline: Inline,
        ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Inline, Inlines>> {
        match inline {
            Inline::Span(span) if has_exact_classes(&span.attr, &[WG21_CLASS]) => {
                let target = stringify_inlines(&span.content);
                let target = target.trim();
                if target.is_empty() {
                    ctx.warn("W-1-5", "Ignoring a `wg21` span with no paper identifier");
                    return Ok(FilterReturn::Unchanged(Inline::Span(span)));
                }
                let replacement = self.link_inlines(target)?;
                Ok(FilterReturn::FilterResult(replacement, false))
            }
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::lookup::LookupTable;
    use wg21_pandoc_types::attr_with_classes;

    fn filter() -> Wg21LinkFilter {
        let table: LookupTable = [("N4849", "C++20 Working Draft")].into_iter().collect();
        Wg21LinkFilter::with_cache(LookupCache::with_table(table))
    }

    fn wg21_span(text: &str) -> Inline {
        Inline::span(attr_with_classes(&["wg21"]), Inline::text(text))
    }

    #[test]
    fn test_known_paper_gets_name_and_link() {
        let mut ctx = FilterContext::new();
        let result = filter()
            .filter_inline(wg21_span("N4849"), &mut ctx)
            .unwrap();
        assert_eq!(
            result,
            FilterReturn::FilterResult(
                vec![
                    Inline::str("C++20 Working Draft "),
                    Inline::link(vec![Inline::str("[N4849]")], "https://wg21.link/N4849"),
                ],
                false
            )
        );
    }

    #[test]
    fn test_unknown_paper_gets_link_only() {
        let mut ctx = FilterContext::new();
        let result = filter()
            .filter_inline(wg21_span("P9999R0"), &mut ctx)
            .unwrap();
        assert_eq!(
            result,
            FilterReturn::FilterResult(
                vec![Inline::link(
                    vec![Inline::str("[P9999R0]")],
                    "https://wg21.link/P9999R0"
                )],
                false
            )
        );
    }

    #[test]
    fn test_span_with_extra_class_is_unchanged() {
        let mut ctx = FilterContext::new();
        let span = Inline::span(attr_with_classes(&["wg21", "x"]), Inline::text("N4849"));
        let result = filter().filter_inline(span.clone(), &mut ctx).unwrap();
        assert_eq!(result, FilterReturn::Unchanged(span));
    }

    #[test]
    fn test_custom_link_base() {
        let filter = Wg21LinkFilter::new(
            LookupCache::with_table(LookupTable::new()),
            "https://open-std.org/papers/",
        );
        let inlines = filter.link_inlines("P2300R10").unwrap();
        let Inline::Link(link) = &inlines[0] else {
            panic!("expected Link");
        };
        assert_eq!(link.target.0, "https://open-std.org/papers/P2300R10");
    }

    #[test]
    fn test_missing_table_is_fatal() {
        let mut ctx = FilterContext::new();
        let filter = Wg21LinkFilter::with_cache(LookupCache::from_path(None));
        let err = filter
            .filter_inline(wg21_span("N4849"), &mut ctx)
            .unwrap_err();
        assert!(matches!(err, FilterError::Configuration { .. }));
    }

    #[test]
    fn test_empty_span_is_unchanged_with_warning() {
        let mut ctx = FilterContext::new();
        let filter = Wg21LinkFilter::with_cache(LookupCache::from_path(None));
        let span = Inline::span(attr_with_classes(&["wg21"]), vec![Inline::space()]);
        let result = filter.filter_inline(span.clone(), &mut ctx).unwrap();
        assert_eq!(result, FilterReturn::Unchanged(span));
        assert_eq!(ctx.diagnostics.codes(), vec!["W-1-5"]);
        assert!(!filter.cache.is_loaded());
    }

    #[test]
    fn test_other_inlines_do_not_load_table() {
        let mut ctx = FilterContext::new();
        let filter = Wg21LinkFilter::with_cache(LookupCache::from_path(None));
        let inline = Inline::str("N4849");
        let result = filter.filter_inline(inline.clone(), &mut ctx).unwrap();
        assert_eq!(result, FilterReturn::Unchanged(inline));
    }
}
