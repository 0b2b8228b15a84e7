/*
 * pandoc.rs
 * Copyright (c) 2025 Posit, PBC
 */

pub use crate::block::Blocks;
pub use crate::meta::Meta;
use serde::{Deserialize, Serialize};

/*
 * A data structure that mimics Pandoc's `data Pandoc` type.
 * The filters treat `meta` as read-only input.
 */

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pandoc {
    pub meta: Meta,
    pub blocks: Blocks,
}
