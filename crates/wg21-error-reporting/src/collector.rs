//! DiagnosticCollector - collects DiagnosticMessage objects during a run

use crate::diagnostic::{DiagnosticKind, DiagnosticMessage};

/// Collector for diagnostic messages.
///
/// Every message added is also emitted through `tracing` so that a host
/// with a subscriber installed sees it as it happens.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<DiagnosticMessage>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic message
    pub fn add(&mut self, diagnostic: DiagnosticMessage) {
        let code = diagnostic.code.as_deref().unwrap_or("-");
        let subsystem = diagnostic
            .catalog_info()
            .map_or("-", |info| info.subsystem.as_str());
        let problem = diagnostic.problem.as_deref().unwrap_or_default();
        match diagnostic.kind {
            DiagnosticKind::Error => {
                tracing::error!(code, subsystem, problem, "{}", diagnostic.title)
            }
            DiagnosticKind::Warning => {
                tracing::warn!(code, subsystem, problem, "{}", diagnostic.title)
            }
            DiagnosticKind::Info => tracing::info!(code, subsystem, problem, "{}", diagnostic.title),
        }
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors were collected (warnings don't count)
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::Error)
    }

    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        &self.diagnostics
    }

    /// Codes of the collected diagnostics, in the order they were added.
    pub fn codes(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| d.code.as_deref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector and return the diagnostics
    pub fn into_diagnostics(self) -> Vec<DiagnosticMessage> {
        self.diagnostics
    }
}
