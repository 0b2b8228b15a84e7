//! Diagnostic messages for the WG21 paper filters.
//!
//! Filters never write warnings into the document. They build a
//! [`DiagnosticMessage`] and hand it to a [`DiagnosticCollector`], which the
//! host drains after the run and renders as text, or as JSON through serde.
//!
//! # Example
//!
//! ```
//! use wg21_error_reporting::{DiagnosticCollector, DiagnosticMessageBuilder};
//!
//! let mut collector = DiagnosticCollector::new();
//! collector.add(
//!     DiagnosticMessageBuilder::warning("Duplicate Caption")
//!         .with_code("W-2-3")
//!         .problem("A table can only have one caption")
//!         .build(),
//! );
//! assert!(!collector.has_errors());
//! ```

pub mod builder;
pub mod catalog;
pub mod collector;
pub mod diagnostic;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info};
pub use collector::DiagnosticCollector;
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage};
