/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for wg21-filters

use std::path::PathBuf;
use thiserror::Error;
use wg21_error_reporting::{DiagnosticKind, DiagnosticMessage, DiagnosticMessageBuilder};

/// Fatal filter errors. Any of these aborts the whole run.
///
/// Recoverable problems (an unexpected element inside a longtable, say) are
/// not errors; they are reported as warnings through
/// [`FilterContext`](crate::FilterContext).
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("document metadata has no `{key}` entry")]
    Configuration { key: String },

    #[error("{}:{line}: expected `identifier display-name`, found {content:?}", .path.display())]
    MalformedResource {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("could not read lookup table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FilterError {
    /// Diagnostic code for this error, from the shared catalog.
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::Configuration { .. } => "W-1-1",
            FilterError::MalformedResource { .. } => "W-1-2",
            FilterError::Io { .. } => "W-1-3",
        }
    }

    /// Render this error as a diagnostic, so a host can report it next to
    /// the warnings collected during the run.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        let builder = DiagnosticMessageBuilder::from_code(DiagnosticKind::Error, self.code());
        match self {
            FilterError::Configuration { key } => builder
                .problem(format!("Document metadata must set `{key}`"))
                .add_info("It is needed to resolve `[...]{.wg21}` references")
                .add_hint(format!("Add `{key}: path/to/table.txt` to the front matter?"))
                .build(),
            FilterError::MalformedResource {
                path,
                line,
                content,
            } => builder
                .problem("Each line must hold an identifier followed by a display name")
                .add_detail(format!("{}:{line} reads {content:?}", path.display()))
                .build(),
            FilterError::Io { path, source } => builder
                .problem(format!("Can't read `{}`", path.display()))
                .add_detail(source.to_string())
                .build(),
        }
    }
}

impl FilterError {
    /// A copy of this error for reporting the same failure again.
    ///
    /// `io::Error` is not `Clone`; the copy keeps its kind and message.
    pub(crate) fn replay(&self) -> FilterError {
        match self {
            FilterError::Configuration { key } => FilterError::Configuration { key: key.clone() },
            FilterError::MalformedResource {
                path,
                line,
                content,
            } => FilterError::MalformedResource {
                path: path.clone(),
                line: *line,
                content: content.clone(),
            },
            FilterError::Io { path, source } => FilterError::Io {
                path: path.clone(),
                source: std::io::Error::new(source.kind(), source.to_string()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_message() {
        let err = FilterError::Configuration {
            key: "annexf".to_string(),
        };
        assert_eq!(err.to_string(), "document metadata has no `annexf` entry");
    }

    #[test]
    fn test_malformed_resource_message() {
        let err = FilterError::MalformedResource {
            path: PathBuf::from("annex.txt"),
            line: 3,
            content: "N4849".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "annex.txt:3: expected `identifier display-name`, found \"N4849\""
        );
    }

    #[test]
    fn test_to_diagnostic_is_error_with_catalog_code() {
        let err = FilterError::Configuration {
            key: "annexf".to_string(),
        };
        let diagnostic = err.to_diagnostic();
        assert_eq!(diagnostic.kind, DiagnosticKind::Error);
        assert_eq!(diagnostic.code.as_deref(), Some("W-1-1"));
        assert_eq!(
            diagnostic.catalog_info().map(|info| info.title.as_str()),
            Some("Missing Metadata Key")
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = FilterError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.code(), "W-1-3");
    }

    #[test]
    fn test_diagnostic_titles_come_from_catalog() {
        let errors = [
            FilterError::Configuration {
                key: "annexf".to_string(),
            },
            FilterError::MalformedResource {
                path: PathBuf::from("annex.txt"),
                line: 1,
                content: "N1".to_string(),
            },
            FilterError::Io {
                path: PathBuf::from("annex.txt"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            },
        ];
        let titles: Vec<String> = errors.iter().map(|e| e.to_diagnostic().title).collect();
        assert_eq!(
            titles,
            vec![
                "Missing Metadata Key",
                "Malformed Lookup Table",
                "Unreadable Lookup Table"
            ]
        );
    }

    #[test]
    fn test_replay_keeps_kind_and_message() {
        let err = FilterError::Io {
            path: PathBuf::from("annex.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let again = err.replay();
        assert_eq!(again.to_string(), err.to_string());
        assert!(
            matches!(again, FilterError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound)
        );
    }
}
