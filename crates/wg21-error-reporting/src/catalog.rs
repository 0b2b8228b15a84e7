//! Diagnostic code catalog and lookup.
//!
//! Maps codes like "W-2-1" to their subsystem and title.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for a diagnostic code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Subsystem name (e.g., "lookup", "longtable")
    pub subsystem: String,

    /// Short title for the diagnostic
    pub title: String,
}

/// Global catalog, embedded at compile time and parsed on first access.
///
/// # Panics
///
/// Panics if the embedded JSON is invalid.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    let json_data = include_str!("../error_catalog.json");
    serde_json::from_str(json_data).expect("Invalid error catalog JSON")
});

/// Look up code information.
///
/// Returns `None` if the code is not found in the catalog.
pub fn get_error_info(code: &str) -> Option<&'static ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        assert!(!ERROR_CATALOG.is_empty());
    }

    #[test]
    fn test_lookup_codes() {
        let info = get_error_info("W-1-1").unwrap();
        assert_eq!(info.subsystem, "lookup");
        assert_eq!(info.title, "Missing Metadata Key");
        assert!(get_error_info("W-9-9").is_none());
    }

    #[test]
    fn test_catalog_codes() {
        let mut codes: Vec<&str> = ERROR_CATALOG.keys().map(String::as_str).collect();
        codes.sort_unstable();
        assert_eq!(
            codes,
            vec![
                "W-1-1", "W-1-2", "W-1-3", "W-1-4", "W-1-5", "W-2-1", "W-2-2", "W-2-3", "W-2-4",
                "W-2-5", "W-2-6", "W-2-7",
            ]
        );
        assert_eq!(get_error_info("W-1-5").unwrap().title, "Empty Paper Reference");
    }

    #[test]
    fn test_every_code_is_well_formed() {
        for (code, info) in ERROR_CATALOG.iter() {
            let parts: Vec<&str> = code.split('-').collect();
            assert_eq!(parts.len(), 3, "bad code {code}");
            assert_eq!(parts[0], "W");
            assert!(parts[1].parse::<u32>().is_ok(), "bad code {code}");
            assert!(parts[2].parse::<u32>().is_ok(), "bad code {code}");
            assert!(!info.title.is_empty());
        }
    }
}
