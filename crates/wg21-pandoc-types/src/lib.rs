/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pandoc AST type definitions for the WG21 paper filters.
 *
 * This crate provides pure data type definitions for the subset of the
 * Pandoc AST that the filters in `wg21-filters` read and produce. It has
 * minimal dependencies (serde, hashlink) and carries no parsing or
 * rendering logic.
 */

pub mod attr;
pub mod block;
pub mod caption;
pub mod inline;
pub mod list;
pub mod meta;
pub mod pandoc;
pub mod stringify;
pub mod table;

// Re-export commonly used types at the crate root
pub use attr::{Attr, attr_with_classes, empty_attr, has_class, has_exact_classes, is_empty_attr};
pub use block::{
    Block, BlockQuote, Blocks, BulletList, CodeBlock, Div, Header, HorizontalRule, OrderedList,
    Paragraph, Plain, RawBlock,
};
pub use caption::Caption;
pub use inline::{
    Code, Emph, Inline, Inlines, LineBreak, Link, RawInline, SoftBreak, Space, Span, Str, Strong,
    Target,
};
pub use list::{ListAttributes, ListNumberDelim, ListNumberStyle};
pub use meta::{Meta, MetaValue};
pub use pandoc::Pandoc;
pub use stringify::{stringify_block, stringify_blocks, stringify_inline, stringify_inlines};
pub use table::{Alignment, Cell, ColSpec, ColWidth, Row, Table, TableBody, TableFoot, TableHead};
