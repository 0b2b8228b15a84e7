/*
 * transforms/longtable.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Assembly of a table from a flat sequence of headers, cells and rules.
 */

//! Long table assembly.
//!
//! Pipe and grid tables can't hold code blocks or lists in their cells, so
//! papers describe large tables as a flat sequence inside a `longtable`
//! Div:
//!
//! ```markdown
//! ::: longtable
//! #### Before {width=0.5}
//! ::: ltcell
//! ...
//! :::
//! #### After
//! ::: ltcell
//! ...
//! :::
//! ---
//! ::: ltcell
//! ...
//! :::
//! ::: ltcell
//! ...
//! :::
//! > Optional caption
//! :::
//! ```
//!
//! Each `ltcell` Div is one cell. A horizontal rule ends a row. Headers
//! name the columns of the first row; a block quote, or a `bq` Div, is the
//! caption. The last row needs no closing rule.
//!
//! Anything out of place is dropped with a warning and assembly continues.

use wg21_pandoc_types::{
    Alignment, Attr, Block, Blocks, Caption, Cell, ColWidth, Div, Header, Inlines, Row, Table,
    TableBody, TableFoot, TableHead, empty_attr, has_class, has_exact_classes, stringify_inlines,
};

use crate::error::Result;
use crate::filter::{DocumentFilter, FilterReturn};
use crate::filter_context::FilterContext;
use crate::transforms::blockquote::BQ_CLASS;

const LONGTABLE_CLASS: &str = "longtable";
const LTCELL_CLASS: &str = "ltcell";
const WIDTH_ATTR: &str = "width";

/// Build a table from the children of a `longtable` Div.
///
/// The table keeps the Div's identifier. Problems are reported to `ctx`.
pub fn assemble_long_table(div: Div, ctx: &mut FilterContext) -> Table {
    let mut builder = LongTableBuilder::default();
    for block in div.content {
        builder.push(block, ctx);
    }
    let mut attr = empty_attr();
    attr.0 = div.attr.0;
    builder.finish(attr, ctx)
}

/// Claims Divs with the `longtable` class.
pub struct LongTableFilter;

impl DocumentFilter for LongTableFilter {
    fn name(&self) -> &str {
        "longtable"
    }

    fn filter_block(
        &self,
        block: Block,
        ctx: &mut FilterContext,
    ) -> Result<FilterReturn<Block, Blocks>> {
        match block {
            Block::Div(div) if has_class(&div.attr, LONGTABLE_CLASS) => {
                let table = assemble_long_table(div, ctx);
                Ok(FilterReturn::FilterResult(vec![Block::Table(table)], true))
            }
            other => Ok(FilterReturn::Unchanged(other)),
        }
    }
}

#[derive(Debug, Default)]
struct PendingHeader {
    content: Inlines,
    width: f64,
}

#[derive(Debug, Default)]
struct LongTableBuilder {
    /// Set when the first row closes.
    columns: Option<usize>,
    pending: Option<PendingHeader>,
    headers: Vec<Inlines>,
    widths: Vec<f64>,
    cells: Vec<Blocks>,
    caption: Option<Blocks>,
    rows: Vec<Vec<Blocks>>,
}

impl LongTableBuilder {
    fn in_first_row(&self) -> bool {
        self.columns.is_none()
    }

    fn push(&mut self, block: Block, ctx: &mut FilterContext) {
        match block {
            Block::Header(header) => self.push_header(header, ctx),
            Block::BlockQuote(quote) => self.push_caption(quote.content, ctx),
            Block::Div(div) if has_exact_classes(&div.attr, &[BQ_CLASS]) => {
                self.push_caption(div.content, ctx)
            }
            Block::Div(div) if has_class(&div.attr, LTCELL_CLASS) => self.push_cell(div.content),
            Block::HorizontalRule(_) if !self.cells.is_empty() => self.close_row(ctx),
            Block::HorizontalRule(_) => ctx.warn(
                "W-2-4",
                format!("Ignoring a rule with no cells before it in row {}", self.rows.len() + 1),
            ),
            other => ctx.warn_with_info(
                "W-2-4",
                format!("Ignoring {} inside a longtable", other.kind_name()),
                "Only headers, `ltcell` Divs, rules and one block quote are allowed",
            ),
        }
    }

    fn push_header(&mut self, header: Header, ctx: &mut FilterContext) {
        let text = stringify_inlines(&header.content);
        if !self.in_first_row() {
            ctx.warn(
                "W-2-2",
                format!("Ignoring header `{text}` after the first row"),
            );
            return;
        }
        if let Some(pending) = &self.pending {
            ctx.warn_with_info(
                "W-2-1",
                format!(
                    "Ignoring header `{text}`; column {} already has header `{}`",
                    self.headers.len() + 1,
                    stringify_inlines(&pending.content)
                ),
                "Each header must be followed by an `ltcell` Div",
            );
            return;
        }
        self.pending = Some(PendingHeader {
            width: parse_width(&header.attr),
            content: header.content,
        });
    }

    fn push_caption(&mut self, content: Blocks, ctx: &mut FilterContext) {
        if self.caption.is_some() {
            ctx.warn("W-2-3", "Ignoring a second block quote; the first is the caption");
            return;
        }
        self.caption = Some(content);
    }

    fn push_cell(&mut self, content: Blocks) {
        if self.in_first_row() {
            let pending = self.pending.take().unwrap_or_default();
            self.headers.push(pending.content);
            self.widths.push(pending.width);
        }
        self.cells.push(content);
    }

    fn close_row(&mut self, ctx: &mut FilterContext) {
        let mut cells = std::mem::take(&mut self.cells);
        let row_number = self.rows.len() + 1;
        match self.columns {
            None => {
                self.columns = Some(cells.len());
                self.drop_dangling_header(ctx);
            }
            Some(columns) if cells.len() != columns => {
                let info = if cells.len() < columns {
                    "Missing cells are left empty"
                } else {
                    "Extra cells are dropped"
                };
                ctx.warn_with_info(
                    "W-2-5",
                    format!(
                        "Row {row_number} has {} but the first row has {}",
                        count_cells(cells.len()),
                        count_cells(columns)
                    ),
                    info,
                );
                cells.resize_with(columns, Vec::new);
            }
            Some(_) => {}
        }
        self.rows.push(cells);
    }

    fn drop_dangling_header(&mut self, ctx: &mut FilterContext) {
        if let Some(pending) = self.pending.take() {
            ctx.warn(
                "W-2-6",
                format!(
                    "Ignoring header `{}`; no cell follows it in the first row",
                    stringify_inlines(&pending.content)
                ),
            );
        }
    }

    fn finish(mut self, attr: Attr, ctx: &mut FilterContext) -> Table {
        if !self.cells.is_empty() {
            self.close_row(ctx);
        }
        self.drop_dangling_header(ctx);
        if self.rows.is_empty() {
            ctx.warn("W-2-7", "This longtable has no `ltcell` Divs");
        }

        let colspec = self
            .widths
            .iter()
            .map(|width| (Alignment::Default, ColWidth::from_fraction(*width)))
            .collect();

        let head = if self.headers.iter().any(|header| !header.is_empty()) {
            let cells = self
                .headers
                .into_iter()
                .map(|header| {
                    if header.is_empty() {
                        Cell::new(vec![])
                    } else {
                        Cell::new(vec![Block::plain(header)])
                    }
                })
                .collect();
            TableHead::new(vec![Row::new(cells)])
        } else {
            TableHead::new(vec![])
        };

        let body = self
            .rows
            .into_iter()
            .map(|cells| Row::new(cells.into_iter().map(Cell::new).collect()))
            .collect();

        Table {
            attr,
            caption: Caption {
                short: None,
                long: self.caption,
            },
            colspec,
            head,
            bodies: vec![TableBody::new(body)],
            foot: TableFoot::empty(),
        }
    }
}

fn count_cells(n: usize) -> String {
    if n == 1 {
        "1 cell".to_string()
    } else {
        format!("{n} cells")
    }
}

/// Column width from a header's `width` attribute, as a fraction of the
/// line width. `0.25` and `25%` are equivalent. Anything else is 0.
fn parse_width(attr: &Attr) -> f64 {
    let Some(raw) = attr.2.get(WIDTH_ATTR) else {
        return 0.0;
    };
    let raw = raw.trim();
    let parsed = match raw.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().map(|w| w / 100.0),
        None => raw.parse::<f64>(),
    };
    parsed
        .ok()
        .filter(|width| width.is_finite() && *width >= 0.0)
        .unwrap_or(0.0)
}
