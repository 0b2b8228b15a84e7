/*
 * caption.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::inline::Inlines;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Caption {
    pub short: Option<Inlines>,
    pub long: Option<Blocks>,
}

impl Caption {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.short.as_ref().is_none_or(|s| s.is_empty())
            && self.long.as_ref().is_none_or(|l| l.is_empty())
    }
}
