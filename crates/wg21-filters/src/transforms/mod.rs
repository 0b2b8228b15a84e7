/*
 * transforms/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The filters that make up the standard WG21 chain.
 */

//! The filters that make up the standard WG21 chain.
//!
//! Leaf rewriters claim one kind of node and rewrite it in place:
//!
//! - [`DefaultCodeClassFilter`] - gives classless inline code the C++ class
//! - [`PrismCodeClassFilter`] - renames `cpp` to `language-cpp`
//! - [`HeadingRuleFilter`] - draws a rule under level-1 headings
//! - [`BlockQuoteDivFilter`] - turns `{.bq}` Divs into block quotes
//! - [`Wg21LinkFilter`] - turns `[N4849]{.wg21}` into a named paper link
//!
//! Structural filters rebuild a Div's children:
//!
//! - [`ItemDeclFilter`] - indents the prose between declarations
//! - [`WordingListFilter`] - numbers lists continuously across prose
//! - [`LongTableFilter`] - assembles a table from a flat cell sequence
//!
//! [`NodeTracer`] claims nothing and only logs.

mod blockquote;
mod code_class;
mod heading_rule;
mod itemdecl;
mod longtable;
mod node_tracer;
mod split;
mod wg21_link;
mod wordinglist;

pub use blockquote::BlockQuoteDivFilter;
pub use code_class::{DefaultCodeClassFilter, PrismCodeClassFilter};
pub use heading_rule::HeadingRuleFilter;
pub use itemdecl::{ItemDeclFilter, indent_item_decl};
pub use longtable::{LongTableFilter, assemble_long_table};
pub use node_tracer::NodeTracer;
pub use wg21_link::Wg21LinkFilter;
pub use wordinglist::{WordingListFilter, renumber_wording_list};
