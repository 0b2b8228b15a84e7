/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document filters for WG21 papers.
 */

//! Document filters for WG21 papers.
//!
//! Papers for the C++ committee are written in Markdown and rendered
//! through Pandoc. This crate rewrites the Pandoc document tree so that a
//! few markup conventions render the way standard wording looks:
//!
//! | Markup | Result |
//! |--------|--------|
//! | `::: bq` | block quote |
//! | `::: itemdecl` | declarations with indented descriptions |
//! | `::: wordinglist` | lists numbered continuously across prose |
//! | `::: longtable` with `::: ltcell` children | table with block content in cells |
//! | `[N4849]{.wg21}` | paper name and link |
//!
//! # Example
//!
//! ```ignore
//! use wg21_filters::{FilterChain, FilterContext, apply_filters};
//!
//! let mut ctx = FilterContext::from_meta(&doc.meta);
//! let chain = FilterChain::standard(ctx.config());
//! let doc = apply_filters(doc, &chain, &mut ctx)?;
//! for warning in ctx.diagnostics() {
//!     eprintln!("{}", warning.to_text());
//! }
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod filter_context;
pub mod lookup;
pub mod transforms;
pub mod traversal;

pub use config::{CodeClassStyle, FilterConfig};
pub use error::{FilterError, Result};
pub use filter::{DocumentFilter, FilterChain, FilterReturn};
pub use filter_context::FilterContext;
pub use lookup::{LookupCache, LookupTable};
pub use traversal::apply_filters;

use wg21_error_reporting::DiagnosticMessage;
use wg21_pandoc_types::Pandoc;

/// Run the standard chain over `doc`, configured from its own metadata.
///
/// Returns the rewritten document and the warnings raised along the way.
pub fn run_filters(doc: Pandoc) -> Result<(Pandoc, Vec<DiagnosticMessage>)> {
    let mut ctx = FilterContext::from_meta(&doc.meta);
    let chain = FilterChain::standard(ctx.config());
    tracing::debug!(filters = ?chain.filter_names(), "running filter chain");
    let doc = apply_filters(doc, &chain, &mut ctx)?;
    Ok((doc, ctx.into_diagnostics()))
}
