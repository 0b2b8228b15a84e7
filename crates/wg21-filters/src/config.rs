/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Filter configuration read from document metadata.
 */

//! Filter configuration read from document metadata.
//!
//! | Key | Default |
//! |-----|---------|
//! | `annexf` | none |
//! | `code-class-style` | `short` |
//! | `heading-rule-style` | `border-bottom:1px solid #cccccc` |
//! | `wg21-link-base` | `https://wg21.link/` |
//! | `wg21-trace-nodes` | `false` |

use std::path::PathBuf;

use wg21_error_reporting::{DiagnosticCollector, DiagnosticKind, DiagnosticMessageBuilder};
use wg21_pandoc_types::Meta;

/// Metadata key holding the path of the paper-name lookup table.
pub const ANNEXF_KEY: &str = "annexf";
pub const CODE_CLASS_STYLE_KEY: &str = "code-class-style";
pub const HEADING_RULE_STYLE_KEY: &str = "heading-rule-style";
pub const WG21_LINK_BASE_KEY: &str = "wg21-link-base";
pub const TRACE_NODES_KEY: &str = "wg21-trace-nodes";

pub const DEFAULT_HEADING_RULE_STYLE: &str = "border-bottom:1px solid #cccccc";
pub const DEFAULT_WG21_LINK_BASE: &str = "https://wg21.link/";

/// Which class names mark C++ code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeClassStyle {
    /// `cpp`, as understood by Pandoc's own highlighter (default)
    #[default]
    Short,
    /// `language-cpp`, as expected by Prism
    Prism,
}

impl CodeClassStyle {
    /// Parse from string value. Returns `None` for unknown styles.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Some(Self::Short),
            "prism" => Some(Self::Prism),
            _ => None,
        }
    }

    /// Class given to inline code that has none.
    pub fn default_class(&self) -> &'static str {
        match self {
            Self::Short => "cpp",
            Self::Prism => "language-cpp",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub annexf: Option<PathBuf>,
    pub code_class_style: CodeClassStyle,
    pub heading_rule_style: String,
    pub wg21_link_base: String,
    pub trace_nodes: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            annexf: None,
            code_class_style: CodeClassStyle::default(),
            heading_rule_style: DEFAULT_HEADING_RULE_STYLE.to_string(),
            wg21_link_base: DEFAULT_WG21_LINK_BASE.to_string(),
            trace_nodes: false,
        }
    }
}

impl FilterConfig {
    /// Read the configuration from document metadata.
    ///
    /// Missing keys take their defaults. An unrecognized `code-class-style`
    /// falls back to `short` and records a warning.
    pub fn from_meta(meta: &Meta, diagnostics: &mut DiagnosticCollector) -> Self {
        let mut config = Self::default();

        if let Some(path) = meta.get(ANNEXF_KEY).and_then(|v| v.as_text()) {
            let path = path.trim();
            if !path.is_empty() {
                config.annexf = Some(PathBuf::from(path));
            }
        }

        if let Some(style) = meta.get(CODE_CLASS_STYLE_KEY).and_then(|v| v.as_text()) {
            match CodeClassStyle::parse(&style) {
                Some(parsed) => config.code_class_style = parsed,
                None => diagnostics.add(
                    DiagnosticMessageBuilder::from_code(DiagnosticKind::Warning, "W-1-4")
                        .problem(format!(
                            "`{CODE_CLASS_STYLE_KEY}` must be `short` or `prism`, not `{style}`"
                        ))
                        .add_info("Using `short`")
                        .build(),
                ),
            }
        }

        if let Some(style) = meta.get(HEADING_RULE_STYLE_KEY).and_then(|v| v.as_text()) {
            config.heading_rule_style = style;
        }

        if let Some(base) = meta.get(WG21_LINK_BASE_KEY).and_then(|v| v.as_text()) {
            config.wg21_link_base = base.trim().to_string();
        }

        if let Some(trace) = meta.get(TRACE_NODES_KEY).and_then(|v| v.as_bool()) {
            config.trace_nodes = trace;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wg21_pandoc_types::{Inline, MetaValue};

    fn meta(entries: &[(&str, MetaValue)]) -> Meta {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_meta_gives_defaults() {
        let mut diagnostics = DiagnosticCollector::new();
        let config = FilterConfig::from_meta(&Meta::new(), &mut diagnostics);
        assert_eq!(config, FilterConfig::default());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_annexf_from_inlines() {
        let mut diagnostics = DiagnosticCollector::new();
        let m = meta(&[(
            ANNEXF_KEY,
            MetaValue::MetaInlines(Inline::text("data/annex-f.txt")),
        )]);
        let config = FilterConfig::from_meta(&m, &mut diagnostics);
        assert_eq!(config.annexf, Some(PathBuf::from("data/annex-f.txt")));
    }

    #[test]
    fn test_blank_annexf_is_absent() {
        let mut diagnostics = DiagnosticCollector::new();
        let m = meta(&[(ANNEXF_KEY, MetaValue::MetaString("  ".into()))]);
        let config = FilterConfig::from_meta(&m, &mut diagnostics);
        assert_eq!(config.annexf, None);
    }

    #[test]
    fn test_prism_style() {
        let mut diagnostics = DiagnosticCollector::new();
        let m = meta(&[(CODE_CLASS_STYLE_KEY, MetaValue::MetaString("Prism".into()))]);
        let config = FilterConfig::from_meta(&m, &mut diagnostics);
        assert_eq!(config.code_class_style, CodeClassStyle::Prism);
        assert_eq!(config.code_class_style.default_class(), "language-cpp");
    }

    #[test]
    fn test_unknown_style_warns_and_falls_back() {
        let mut diagnostics = DiagnosticCollector::new();
        let m = meta(&[(CODE_CLASS_STYLE_KEY, MetaValue::MetaString("pygments".into()))]);
        let config = FilterConfig::from_meta(&m, &mut diagnostics);
        assert_eq!(config.code_class_style, CodeClassStyle::Short);
        assert_eq!(diagnostics.codes(), vec!["W-1-4"]);
    }

    #[test]
    fn test_overrides() {
        let mut diagnostics = DiagnosticCollector::new();
        let m = meta(&[
            (HEADING_RULE_STYLE_KEY, MetaValue::MetaString("border:0".into())),
            (WG21_LINK_BASE_KEY, MetaValue::MetaString("https://example.org/".into())),
            (TRACE_NODES_KEY, MetaValue::MetaBool(true)),
        ]);
        let config = FilterConfig::from_meta(&m, &mut diagnostics);
        assert_eq!(config.heading_rule_style, "border:0");
        assert_eq!(config.wg21_link_base, "https://example.org/");
        assert!(config.trace_nodes);
    }
}
