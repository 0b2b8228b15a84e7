/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::inline::Inlines;
use crate::stringify::{stringify_blocks, stringify_inlines};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

// Pandoc's MetaValue notably does not support numbers or nulls, so we don't either
// https://pandoc.org/lua-filters.html#type-metavalue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    MetaString(String),
    MetaBool(bool),
    MetaInlines(Inlines),
    MetaBlocks(Blocks),
    MetaList(Vec<MetaValue>),
    MetaMap(LinkedHashMap<String, MetaValue>),
}

impl Default for MetaValue {
    fn default() -> Self {
        MetaValue::MetaMap(LinkedHashMap::new())
    }
}

pub type Meta = LinkedHashMap<String, MetaValue>;

impl MetaValue {
    /// Flatten a scalar-like value to text.
    ///
    /// YAML front matter such as `annexf: data/annex-f.txt` usually reaches
    /// the AST as `MetaInlines`, so inline content is stringified here.
    /// Lists and maps have no text form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            MetaValue::MetaString(s) => Some(s.clone()),
            MetaValue::MetaInlines(inlines) => Some(stringify_inlines(inlines)),
            MetaValue::MetaBlocks(blocks) => Some(stringify_blocks(blocks)),
            MetaValue::MetaBool(b) => Some(b.to_string()),
            MetaValue::MetaList(_) | MetaValue::MetaMap(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::MetaBool(b) => Some(*b),
            other => match other.as_text()?.trim() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                _ => None,
            },
        }
    }

    /// Get a value by key if this is a MetaMap
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        match self {
            MetaValue::MetaMap(map) => map.get(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::Inline;

    #[test]
    fn test_meta_string_as_text() {
        let value = MetaValue::MetaString("annex.txt".to_string());
        assert_eq!(value.as_text().as_deref(), Some("annex.txt"));
    }

    #[test]
    fn test_meta_inlines_as_text() {
        let value = MetaValue::MetaInlines(Inline::text("data/annex f.txt"));
        assert_eq!(value.as_text().as_deref(), Some("data/annex f.txt"));
    }

    #[test]
    fn test_meta_list_has_no_text() {
        let value = MetaValue::MetaList(vec![MetaValue::MetaBool(true)]);
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn test_as_bool_accepts_text_forms() {
        assert_eq!(MetaValue::MetaBool(true).as_bool(), Some(true));
        assert_eq!(MetaValue::MetaString("yes".into()).as_bool(), Some(true));
        assert_eq!(MetaValue::MetaInlines(Inline::text("false")).as_bool(), Some(false));
        assert_eq!(MetaValue::MetaString("maybe".into()).as_bool(), None);
    }

    #[test]
    fn test_get_on_map() {
        let mut map = LinkedHashMap::new();
        map.insert("a".to_string(), MetaValue::MetaBool(false));
        let value = MetaValue::MetaMap(map);
        assert_eq!(value.get("a"), Some(&MetaValue::MetaBool(false)));
        assert_eq!(value.get("b"), None);
        assert_eq!(MetaValue::MetaBool(true).get("a"), None);
    }
}
