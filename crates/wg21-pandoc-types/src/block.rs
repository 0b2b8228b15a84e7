/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::{Attr, empty_attr};
use crate::inline::Inlines;
use crate::list::{ListAttributes, ListNumberDelim, ListNumberStyle};
use crate::table::Table;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Plain(Plain),
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
    RawBlock(RawBlock),
    BlockQuote(BlockQuote),
    OrderedList(OrderedList),
    BulletList(BulletList),
    Header(Header),
    HorizontalRule(HorizontalRule),
    Table(Table),
    Div(Div),
}

pub type Blocks = Vec<Block>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plain {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub attr: Attr,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub format: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    pub content: Blocks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedList {
    pub attr: ListAttributes,
    pub content: Vec<Blocks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletList {
    pub content: Vec<Blocks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub level: usize,
    pub attr: Attr,
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalRule;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Div {
    pub attr: Attr,
    pub content: Blocks,
}

impl Block {
    pub fn plain(content: Inlines) -> Block {
        Block::Plain(Plain { content })
    }

    pub fn para(content: Inlines) -> Block {
        Block::Paragraph(Paragraph { content })
    }

    pub fn code_block(attr: Attr, text: impl Into<String>) -> Block {
        Block::CodeBlock(CodeBlock {
            attr,
            text: text.into(),
        })
    }

    pub fn raw_block(format: impl Into<String>, text: impl Into<String>) -> Block {
        Block::RawBlock(RawBlock {
            format: format.into(),
            text: text.into(),
        })
    }

    pub fn block_quote(content: Blocks) -> Block {
        Block::BlockQuote(BlockQuote { content })
    }

    pub fn bullet_list(items: Vec<Blocks>) -> Block {
        Block::BulletList(BulletList { content: items })
    }

    /// An ordered list numbered `start, start + 1, ...` with decimal
    /// numbers and a period delimiter.
    pub fn ordered_list(start: usize, items: Vec<Blocks>) -> Block {
        Block::OrderedList(OrderedList {
            attr: (start, ListNumberStyle::Decimal, ListNumberDelim::Period),
            content: items,
        })
    }

    pub fn header(level: usize, content: Inlines) -> Block {
        Block::Header(Header {
            level,
            attr: empty_attr(),
            content,
        })
    }

    pub fn horizontal_rule() -> Block {
        Block::HorizontalRule(HorizontalRule)
    }

    pub fn div(attr: Attr, content: Blocks) -> Block {
        Block::Div(Div { attr, content })
    }

    /// Short name of the variant, used in log and diagnostic output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Plain(_) => "Plain",
            Block::Paragraph(_) => "Para",
            Block::CodeBlock(_) => "CodeBlock",
            Block::RawBlock(_) => "RawBlock",
            Block::BlockQuote(_) => "BlockQuote",
            Block::OrderedList(_) => "OrderedList",
            Block::BulletList(_) => "BulletList",
            Block::Header(_) => "Header",
            Block::HorizontalRule(_) => "HorizontalRule",
            Block::Table(_) => "Table",
            Block::Div(_) => "Div",
        }
    }
}
