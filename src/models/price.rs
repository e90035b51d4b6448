use std::collections::HashMap;

use serde::Serialize;

/// USD unit prices keyed by asset identifier. Unpriced assets are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a price; non-finite values are ignored
    pub fn insert(&mut self, asset_id: impl Into<String>, price: f64) {
        if price.is_finite() {
            self.prices.insert(asset_id.into(), price);
        }
    }

    pub fn get(&self, asset_id: &str) -> Option<f64> {
        self.prices.get(asset_id).copied()
    }

    /// Price, treating an unpriced asset as worth nothing
    pub fn price_or_zero(&self, asset_id: &str) -> f64 {
        self.get(asset_id).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = PriceTable::new();
        for (id, price) in iter {
            table.insert(id, price);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_prices_are_zero() {
        let table: PriceTable = [("a", 2.0)].into_iter().collect();
        assert_eq!(table.price_or_zero("a"), 2.0);
        assert_eq!(table.price_or_zero("b"), 0.0);
        assert_eq!(table.get("b"), None);
    }

    #[test]
    fn non_finite_prices_are_dropped() {
        let table: PriceTable = [("a", f64::NAN), ("b", f64::INFINITY), ("c", 1.0)]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("c"), Some(1.0));
    }
}
