/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::{Attr, empty_attr};
use crate::block::Blocks;
use crate::caption::Caption;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Default,
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum ColWidth {
    Default,
    Percentage(f64),
}

impl ColWidth {
    /// A width of zero (or less) means "let the renderer decide".
    pub fn from_fraction(width: f64) -> Self {
        if width > 0.0 {
            ColWidth::Percentage(width)
        } else {
            ColWidth::Default
        }
    }
}

pub type ColSpec = (Alignment, ColWidth);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub attr: Attr,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableHead {
    pub attr: Attr,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBody {
    pub attr: Attr,
    pub rowhead_columns: usize,
    pub head: Vec<Row>,
    pub body: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFoot {
    pub attr: Attr,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub attr: Attr,
    pub alignment: Alignment,
    pub row_span: usize,
    pub col_span: usize,
    pub content: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub attr: Attr,
    pub caption: Caption,
    pub colspec: Vec<ColSpec>,
    pub head: TableHead,
    pub bodies: Vec<TableBody>,
    pub foot: TableFoot,
}

impl Cell {
    /// A 1x1 cell with default alignment.
    pub fn new(content: Blocks) -> Self {
        Cell {
            attr: empty_attr(),
            alignment: Alignment::Default,
            row_span: 1,
            col_span: 1,
            content,
        }
    }
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row {
            attr: empty_attr(),
            cells,
        }
    }
}

impl TableHead {
    pub fn new(rows: Vec<Row>) -> Self {
        TableHead {
            attr: empty_attr(),
            rows,
        }
    }
}

impl TableBody {
    pub fn new(body: Vec<Row>) -> Self {
        TableBody {
            attr: empty_attr(),
            rowhead_columns: 0,
            head: vec![],
            body,
        }
    }
}

impl TableFoot {
    pub fn empty() -> Self {
        TableFoot {
            attr: empty_attr(),
            rows: vec![],
        }
    }
}

impl Table {
    /// All data rows across every body, in order.
    pub fn body_rows(&self) -> impl Iterator<Item = &Row> {
        self.bodies.iter().flat_map(|b| b.body.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col_width_from_fraction() {
        assert_eq!(ColWidth::from_fraction(0.0), ColWidth::Default);
        assert_eq!(ColWidth::from_fraction(-1.0), ColWidth::Default);
        assert_eq!(ColWidth::from_fraction(0.25), ColWidth::Percentage(0.25));
    }

    #[test]
    fn test_cell_new_is_one_by_one() {
        let cell = Cell::new(vec![]);
        assert_eq!((cell.row_span, cell.col_span), (1, 1));
        assert_eq!(cell.alignment, Alignment::Default);
    }
}
