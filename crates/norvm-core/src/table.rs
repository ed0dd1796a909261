//! Bit-position table: entry `i` holds a word with only bit `i` set.
//!
//! The table is built once per process behind a [`OnceLock`], so concurrent
//! first use is synchronised and later reads are lock-free.

use std::sync::OnceLock;

use crate::Word;

pub const TABLE_LEN: usize = 32;

static TABLE: OnceLock<BitTable> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitTable {
    masks: [Word; TABLE_LEN],
}

impl BitTable {
    fn build() -> Self {
        let mut masks = [0; TABLE_LEN];
        for (i, slot) in masks.iter_mut().enumerate() {
            *slot = (1u32 << i) as Word;
        }
        tracing::debug!(entries = TABLE_LEN, "built bit-position table");
        Self { masks }
    }

    /// Process-wide table, built on first access.
    #[inline]
    pub fn global() -> &'static BitTable {
        TABLE.get_or_init(Self::build)
    }

    /// Word with only bit `index` set. `index` must be below [`TABLE_LEN`].
    #[inline]
    pub fn bit(&self, index: u8) -> Word {
        self.masks[usize::from(index)]
    }

    pub fn entries(&self) -> &[Word; TABLE_LEN] {
        &self.masks
    }
}

/// Builds the table if needed and returns it.
///
/// Safe to call any number of times; every call returns the same table.
pub fn initialize() -> &'static BitTable {
    BitTable::global()
}
