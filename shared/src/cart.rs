//! Shopping cart model. The frontend persists this verbatim as JSON in
//! `localStorage`; all mutation rules live here so they can be tested
//! natively.

use serde::{Deserialize, Serialize};

use crate::Product;

/// One product line in the cart. Name and unit price are denormalized so the
/// cart page renders without refetching the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: u64,
    pub name: String,
    pub unit_price_paise: u64,
    pub quantity: u32,
}

/// Ordered cart contents. Lines keep insertion order; adding an existing
/// product merges into its line instead of appending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Adds `quantity` of a catalog product, merging with an existing line.
    /// Products without a server id are not purchasable and are ignored.
    pub fn add_product(&mut self, product: &Product, quantity: u32) {
        let Some(product_id) = product.id else {
            return;
        };
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }
        self.lines.push(CartLine {
            product_id,
            name: product.name.clone(),
            unit_price_paise: product.price_paise,
            quantity,
        });
    }

    /// Sets the quantity of a line; quantity 0 removes it.
    pub fn set_quantity(&mut self, product_id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Drops the line for `product_id` if present.
    pub fn remove(&mut self, product_id: u64) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties the cart (after a successful checkout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum over lines of quantity × unit price.
    pub fn total_paise(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| u64::from(l.quantity) * l.unit_price_paise)
            .sum()
    }

    /// Total item count across lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// True when no lines remain.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, price_paise: u64) -> Product {
        Product {
            id: Some(id),
            name: name.into(),
            price_paise,
            stock: 5,
            ..Product::default()
        }
    }

    #[test]
    fn adding_same_product_merges_quantities() {
        let mut cart = Cart::default();
        let book = product(1, "ಸಂಪುಟ 1", 25000);
        cart.add_product(&book, 1);
        cart.add_product(&book, 2);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 3);
        assert_eq!(cart.total_paise(), 75000);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut cart = Cart::default();
        cart.add_product(&product(1, "ಸಂಪುಟ 1", 25000), 1);
        cart.add_product(&product(2, "ಸಂಪುಟ 2", 30000), 1);
        cart.set_quantity(1, 0);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].product_id, 2);
    }

    #[test]
    fn unsaved_products_are_not_added() {
        let mut cart = Cart::default();
        let draft = Product {
            id: None,
            name: "draft".into(),
            price_paise: 100,
            ..Product::default()
        };
        cart.add_product(&draft, 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_and_counts_span_lines() {
        let mut cart = Cart::default();
        cart.add_product(&product(1, "ಸಂಪುಟ 1", 25000), 2);
        cart.add_product(&product(2, "ಸಂಪುಟ 2", 30000), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_paise(), 80000);
    }

    #[test]
    fn cart_round_trips_through_json() {
        let mut cart = Cart::default();
        cart.add_product(&product(7, "ಅರ್ಥಕೋಶ", 15000), 1);
        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
