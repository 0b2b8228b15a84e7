/*
 * filter_context.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Context for filter execution, carrying configuration and diagnostics.

use wg21_error_reporting::{
    DiagnosticCollector, DiagnosticKind, DiagnosticMessage, DiagnosticMessageBuilder,
};
use wg21_pandoc_types::Meta;

use crate::config::FilterConfig;

/// Context for filter execution.
///
/// This context is threaded through every filter call so that filters can
/// read the run's configuration and emit warnings without touching the
/// document.
pub struct FilterContext {
    config: FilterConfig,
    /// Accumulated diagnostics (warnings and non-fatal errors)
    pub diagnostics: DiagnosticCollector,
}

impl FilterContext {
    /// Create a context with the default configuration
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default())
    }

    pub fn with_config(config: FilterConfig) -> Self {
        Self {
            config,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Create a context whose configuration is read from document metadata.
    ///
    /// Configuration warnings land in this context's diagnostics.
    pub fn from_meta(meta: &Meta) -> Self {
        let mut diagnostics = DiagnosticCollector::new();
        let config = FilterConfig::from_meta(meta, &mut diagnostics);
        Self {
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Add a catalog warning with a problem statement
    pub fn warn(&mut self, code: &str, problem: impl Into<String>) {
        self.diagnostics.add(
            DiagnosticMessageBuilder::from_code(DiagnosticKind::Warning, code)
                .problem(problem.into())
                .build(),
        );
    }

    /// Add a catalog warning with a problem statement and an info detail
    pub fn warn_with_info(&mut self, code: &str, problem: impl Into<String>, info: impl Into<String>) {
        self.diagnostics.add(
            DiagnosticMessageBuilder::from_code(DiagnosticKind::Warning, code)
                .problem(problem.into())
                .add_info(info.into())
                .build(),
        );
    }

    /// Check if any errors were collected
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Get reference to diagnostics
    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        self.diagnostics.diagnostics()
    }

    /// Consume context and return diagnostics
    pub fn into_diagnostics(self) -> Vec<DiagnosticMessage> {
        self.diagnostics.into_diagnostics()
    }
}

impl Default for FilterContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CODE_CLASS_STYLE_KEY, CodeClassStyle};
    use wg21_pandoc_types::MetaValue;

    #[test]
    fn test_new_filter_context() {
        let ctx = FilterContext::new();
        assert!(!ctx.has_errors());
        assert!(ctx.diagnostics().is_empty());
        assert_eq!(ctx.config(), &FilterConfig::default());
    }

    #[test]
    fn test_warn_uses_catalog_title() {
        let mut ctx = FilterContext::new();
        ctx.warn("W-2-3", "Only the first caption is kept");
        assert!(!ctx.has_errors()); // Warnings don't count as errors
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].title, "Duplicate Caption");
    }

    #[test]
    fn test_warn_with_info_adds_detail() {
        let mut ctx = FilterContext::new();
        ctx.warn_with_info("W-2-5", "Row 2 has 1 cell", "Padded");
        assert_eq!(ctx.diagnostics()[0].details.len(), 1);
    }

    #[test]
    fn test_from_meta_collects_config_warnings() {
        let mut meta = Meta::new();
        meta.insert(
            CODE_CLASS_STYLE_KEY.to_string(),
            MetaValue::MetaString("fancy".into()),
        );
        let ctx = FilterContext::from_meta(&meta);
        assert_eq!(ctx.config().code_class_style, CodeClassStyle::Short);
        assert_eq!(ctx.diagnostics.codes(), vec!["W-1-4"]);
    }

    #[test]
    fn test_into_diagnostics() {
        let mut ctx = FilterContext::new();
        ctx.warn("W-2-4", "one");
        ctx.warn("W-2-4", "two");
        assert_eq!(ctx.into_diagnostics().len(), 2);
    }
}
