//! Builder API for diagnostic messages.
//!
//! The builder encodes the title / problem / details / hints structure so
//! that call sites read like the message they produce.

use crate::diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage};

/// Builder for creating diagnostic messages.
///
/// # Example
///
/// ```
/// use wg21_error_reporting::DiagnosticMessageBuilder;
///
/// let warning = DiagnosticMessageBuilder::warning("Ragged Row")
///     .with_code("W-2-5")
///     .problem("Row 3 has 1 cell but the first row has 2")
///     .add_info("The row was padded with empty cells")
///     .build();
///
/// assert_eq!(warning.title, "Ragged Row");
/// assert_eq!(warning.code, Some("W-2-5".to_string()));
/// assert_eq!(warning.details.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    kind: DiagnosticKind,
    title: String,
    code: Option<String>,
    problem: Option<String>,
    details: Vec<DetailItem>,
    hints: Vec<String>,
}

impl DiagnosticMessageBuilder {
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            code: None,
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    /// Start from a catalog code, taking the title from the catalog.
    ///
    /// Unknown codes keep the code and use it as the title.
    pub fn from_code(kind: DiagnosticKind, code: &str) -> Self {
        let title = crate::catalog::get_error_info(code)
            .map(|info| info.title.clone())
            .unwrap_or_else(|| code.to_string());
        Self::new(kind, title).with_code(code)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the problem statement (the "what").
    pub fn problem(mut self, stmt: impl Into<String>) -> Self {
        self.problem = Some(stmt.into());
        self
    }

    /// Add an error detail (displayed with error/cross bullet).
    pub fn add_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(DetailItem {
            kind: DetailKind::Error,
            content: detail.into(),
        });
        self
    }

    /// Add an info detail (displayed with info bullet).
    pub fn add_info(mut self, info: impl Into<String>) -> Self {
        self.details.push(DetailItem {
            kind: DetailKind::Info,
            content: info.into(),
        });
        self
    }

    /// Add a hint for fixing the problem. Hints end with "?".
    pub fn add_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn build(self) -> DiagnosticMessage {
        DiagnosticMessage {
            code: self.code,
            title: self.title,
            kind: self.kind,
            problem: self.problem,
            details: self.details,
            hints: self.hints,
        }
    }
}
