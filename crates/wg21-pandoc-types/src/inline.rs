/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::{Attr, empty_attr};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Str(Str),
    Space(Space),
    SoftBreak(SoftBreak),
    LineBreak(LineBreak),
    Emph(Emph),
    Strong(Strong),
    Code(Code),
    RawInline(RawInline),
    Link(Link),
    Span(Span),
}

pub type Inlines = Vec<Inline>;

/// (url, title)
pub type Target = (String, String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Str {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftBreak;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBreak;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emph {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    pub attr: Attr,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInline {
    pub format: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub attr: Attr,
    pub content: Inlines,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub attr: Attr,
    pub content: Inlines,
}

impl Inline {
    pub fn str(text: impl Into<String>) -> Inline {
        Inline::Str(Str { text: text.into() })
    }

    pub fn space() -> Inline {
        Inline::Space(Space)
    }

    /// Split `text` on spaces into `Str`/`Space` inlines, the way a reader
    /// tokenizes a run of prose.
    pub fn text(text: &str) -> Inlines {
        let mut result = Vec::new();
        for (i, word) in text.split(' ').enumerate() {
            if i > 0 {
                result.push(Inline::space());
            }
            if !word.is_empty() {
                result.push(Inline::str(word));
            }
        }
        result
    }

    pub fn code(attr: Attr, text: impl Into<String>) -> Inline {
        Inline::Code(Code {
            attr,
            text: text.into(),
        })
    }

    pub fn span(attr: Attr, content: Inlines) -> Inline {
        Inline::Span(Span { attr, content })
    }

    pub fn link(content: Inlines, url: impl Into<String>) -> Inline {
        Inline::Link(Link {
            attr: empty_attr(),
            content,
            target: (url.into(), String::new()),
        })
    }

    /// Short name of the variant, used in log and diagnostic output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Inline::Str(_) => "Str",
            Inline::Space(_) => "Space",
            Inline::SoftBreak(_) => "SoftBreak",
            Inline::LineBreak(_) => "LineBreak",
            Inline::Emph(_) => "Emph",
            Inline::Strong(_) => "Strong",
            Inline::Code(_) => "Code",
            Inline::RawInline(_) => "RawInline",
            Inline::Link(_) => "Link",
            Inline::Span(_) => "Span",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_splits_on_spaces() {
        assert_eq!(
            Inline::text("a b"),
            vec![Inline::str("a"), Inline::space(), Inline::str("b")]
        );
    }

    #[test]
    fn test_text_single_word() {
        assert_eq!(Inline::text("N4849"), vec![Inline::str("N4849")]);
    }

    #[test]
    fn test_text_empty() {
        assert!(Inline::text("").is_empty());
    }

    #[test]
    fn test_link_has_empty_title() {
        let Inline::Link(link) = Inline::link(vec![Inline::str("x")], "https://example.org") else {
            panic!("expected Link");
        };
        assert_eq!(link.target.0, "https://example.org");
        assert!(link.target.1.is_empty());
    }
}
