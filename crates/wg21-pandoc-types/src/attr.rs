/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

use hashlink::LinkedHashMap;

pub fn empty_attr() -> Attr {
    (String::new(), vec![], LinkedHashMap::new())
}

/// Pandoc's `Attr`: (identifier, classes, key-value attributes).
///
/// Key-value attributes keep their insertion order so that a document
/// serializes back the way it was written.
pub type Attr = (String, Vec<String>, LinkedHashMap<String, String>);

pub fn is_empty_attr(attr: &Attr) -> bool {
    attr.0.is_empty() && attr.1.is_empty() && attr.2.is_empty()
}

/// Build an `Attr` with no identifier, the given classes and no attributes.
pub fn attr_with_classes(classes: &[&str]) -> Attr {
    (
        String::new(),
        classes.iter().map(|c| c.to_string()).collect(),
        LinkedHashMap::new(),
    )
}

pub fn has_class(attr: &Attr, class: &str) -> bool {
    attr.1.iter().any(|c| c == class)
}

/// True when the class list, taken as a set, is exactly `expected`.
///
/// `{.bq}` matches `["bq"]`; `{.bq .itemdecl}` does not.
pub fn has_exact_classes(attr: &Attr, expected: &[&str]) -> bool {
    let classes = &attr.1;
    classes.iter().all(|c| expected.contains(&c.as_str()))
        && expected.iter().all(|e| classes.iter().any(|c| c == e))
}
