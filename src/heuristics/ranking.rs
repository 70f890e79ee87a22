//! Value-density ranking over a catalog.

use std::cmp::Ordering;

use crate::catalog::ItemCatalog;
use crate::ItemId;

/// Items ordered by descending value/weight ratio, consumed front to back.
///
/// The ranking is computed once per run. Policies read the current head,
/// and permanently drop it once it can no longer be packed; because capacity
/// only shrinks, a dropped item never becomes packable again, so the cursor
/// never needs to move backwards.
///
/// Ties keep catalog order, so runs are deterministic for a given catalog.
#[derive(Debug, Clone)]
pub struct DensityRanking {
    order: Vec<ItemId>,
    cursor: usize,
}

impl DensityRanking {
    /// Ranks every item of `catalog` by descending value/weight ratio.
    pub fn new(catalog: &ItemCatalog) -> Self {
        let mut order: Vec<ItemId> = catalog.ids().collect();
        order.sort_by(|&a, &b| {
            catalog
                .ratio(b)
                .partial_cmp(&catalog.ratio(a))
                .unwrap_or(Ordering::Equal)
        });
        Self { order, cursor: 0 }
    }

    /// The best-ranked item not yet dropped, or `None` once exhausted.
    pub fn head(&self) -> Option<ItemId> {
        self.order.get(self.cursor).copied()
    }

    /// Permanently discards the current head.
    pub fn drop_head(&mut self) {
        if self.cursor < self.order.len() {
            self.cursor += 1;
        }
    }

    /// Items still in contention, best ratio first.
    pub fn remaining(&self) -> &[ItemId] {
        &self.order[self.cursor..]
    }

    /// Returns true once every item has been dropped.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }
}
