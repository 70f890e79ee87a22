//! Item catalog shared by policies and environments.

use crate::ItemId;

/// Ordered collection of knapsack items.
///
/// Each item has a value and a strictly positive weight; catalogs for the
/// limited-copy variant additionally carry a remaining-availability count per
/// item. A catalog is immutable for the duration of a decision run except for
/// those counts, which the owning environment decrements on acceptance.
///
/// Items are identified by their index in catalog order ([`ItemId`]).
///
/// # Examples
///
/// ```
/// use knapkit::ItemCatalog;
///
/// let catalog = ItemCatalog::unbounded(vec![8, 5, 3], vec![4, 5, 2]);
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.ratio(0), 2.0);
/// assert_eq!(catalog.remaining(0), None); // unlimited copies
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    values: Vec<u32>,
    weights: Vec<u32>,
    limits: Option<Vec<u32>>,
}

impl ItemCatalog {
    /// Creates a catalog whose items may be selected arbitrarily often.
    ///
    /// # Panics
    ///
    /// Panics if the vectors differ in length or any weight is zero.
    pub fn unbounded(values: Vec<u32>, weights: Vec<u32>) -> Self {
        Self::build(values, weights, None)
    }

    /// Creates a catalog with a finite availability count per item.
    ///
    /// # Panics
    ///
    /// Panics if the vectors differ in length or any weight is zero.
    pub fn bounded(values: Vec<u32>, weights: Vec<u32>, limits: Vec<u32>) -> Self {
        Self::build(values, weights, Some(limits))
    }

    fn build(values: Vec<u32>, weights: Vec<u32>, limits: Option<Vec<u32>>) -> Self {
        assert_eq!(
            values.len(),
            weights.len(),
            "Catalog values and weights must have equal length"
        );
        if let Some(limits) = &limits {
            assert_eq!(
                values.len(),
                limits.len(),
                "Catalog limits must have one entry per item"
            );
        }
        assert!(
            weights.iter().all(|&w| w > 0),
            "Catalog item weights must be positive"
        );
        Self {
            values,
            weights,
            limits,
        }
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Item identifiers in catalog order.
    pub fn ids(&self) -> std::ops::Range<ItemId> {
        0..self.len()
    }

    /// All item values, indexed by [`ItemId`].
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// All item weights, indexed by [`ItemId`].
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Value of a single item.
    pub fn value(&self, item: ItemId) -> u32 {
        self.values[item]
    }

    /// Weight of a single item.
    pub fn weight(&self, item: ItemId) -> u32 {
        self.weights[item]
    }

    /// Value/weight ratio of a single item; the greedy ranking key.
    pub fn ratio(&self, item: ItemId) -> f64 {
        f64::from(self.values[item]) / f64::from(self.weights[item])
    }

    /// Copies of `item` still available, or `None` for unlimited items.
    pub fn remaining(&self, item: ItemId) -> Option<u32> {
        self.limits.as_ref().map(|limits| limits[item])
    }

    /// Returns true if the catalog carries availability limits.
    pub fn is_bounded(&self) -> bool {
        self.limits.is_some()
    }

    /// Consumes one copy of `item`. No-op for unlimited catalogs; an already
    /// exhausted count stays at zero.
    pub(crate) fn consume(&mut self, item: ItemId) {
        if let Some(limits) = &mut self.limits {
            limits[item] = limits[item].saturating_sub(1);
        }
    }
}

// =============================================================================
// ItemCatalog Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ItemCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let fields = if self.limits.is_some() { 3 } else { 2 };
        let mut s = serializer.serialize_struct("ItemCatalog", fields)?;
        s.serialize_field("values", &self.values)?;
        s.serialize_field("weights", &self.weights)?;
        if let Some(limits) = &self.limits {
            s.serialize_field("limits", limits)?;
        }
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ItemCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Raw {
            values: Vec<u32>,
            weights: Vec<u32>,
            #[serde(default)]
            limits: Option<Vec<u32>>,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.values.len() != raw.weights.len() {
            return Err(D::Error::custom(
                "catalog values and weights must have equal length",
            ));
        }
        if let Some(limits) = &raw.limits {
            if limits.len() != raw.values.len() {
                return Err(D::Error::custom(
                    "catalog limits must have one entry per item",
                ));
            }
        }
        if raw.weights.iter().any(|&w| w == 0) {
            return Err(D::Error::custom("catalog item weights must be positive"));
        }
        Ok(Self {
            values: raw.values,
            weights: raw.weights,
            limits: raw.limits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_catalog_basics() {
        let catalog = ItemCatalog::unbounded(vec![8, 5, 3], vec![4, 5, 2]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert!(!catalog.is_bounded());
        assert_eq!(catalog.value(1), 5);
        assert_eq!(catalog.weight(2), 2);
        assert_eq!(catalog.remaining(0), None);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn ratios() {
        let catalog = ItemCatalog::unbounded(vec![8, 5, 3], vec![4, 5, 2]);
        assert_eq!(catalog.ratio(0), 2.0);
        assert_eq!(catalog.ratio(1), 1.0);
        assert_eq!(catalog.ratio(2), 1.5);
    }

    #[test]
    fn bounded_catalog_consume() {
        let mut catalog = ItemCatalog::bounded(vec![8, 5], vec![4, 5], vec![2, 0]);
        assert!(catalog.is_bounded());
        assert_eq!(catalog.remaining(0), Some(2));
        catalog.consume(0);
        assert_eq!(catalog.remaining(0), Some(1));
        // Exhausted counts stay at zero.
        catalog.consume(1);
        assert_eq!(catalog.remaining(1), Some(0));
    }

    #[test]
    fn consume_is_noop_for_unbounded() {
        let mut catalog = ItemCatalog::unbounded(vec![8], vec![4]);
        catalog.consume(0);
        assert_eq!(catalog.remaining(0), None);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn mismatched_lengths_rejected() {
        ItemCatalog::unbounded(vec![8, 5], vec![4]);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn zero_weight_rejected() {
        ItemCatalog::unbounded(vec![8], vec![0]);
    }

    #[test]
    #[should_panic(expected = "one entry per item")]
    fn mismatched_limits_rejected() {
        ItemCatalog::bounded(vec![8], vec![4], vec![1, 2]);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn roundtrip_unbounded() {
            let catalog = ItemCatalog::unbounded(vec![8, 5, 3], vec![4, 5, 2]);
            let json = serde_json::to_string(&catalog).unwrap();
            let restored: ItemCatalog = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, catalog);
        }

        #[test]
        fn roundtrip_bounded() {
            let catalog = ItemCatalog::bounded(vec![8, 5], vec![4, 5], vec![1, 3]);
            let json = serde_json::to_string(&catalog).unwrap();
            let restored: ItemCatalog = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, catalog);
        }

        #[test]
        fn rejects_mismatched_lengths() {
            let json = r#"{"values":[1,2],"weights":[3]}"#;
            let result: Result<ItemCatalog, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }

        #[test]
        fn rejects_zero_weights() {
            let json = r#"{"values":[1],"weights":[0]}"#;
            let result: Result<ItemCatalog, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }
    }
}
