//! The ordered in-memory cart.
//!
//! The cart lives in the shopper's session and is only ever mutated one
//! request at a time, so there is no interior locking here. Lines keep
//! insertion order; an add that matches an existing line's identity merges
//! into it instead of appending.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One configured selection in the cart.
///
/// `product_id` is a foreign key into the catalog and is not re-validated
/// against it here; lines whose product has vanished are skipped at
/// display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    #[serde(default)]
    pub color: Option<String>,
    /// Shoe size; footwear only.
    #[serde(default)]
    pub size: Option<u32>,
    /// Upleg variant selection; footwear only. Deliberately not part of
    /// the merge identity.
    #[serde(default)]
    pub upleg: Option<bool>,
    #[serde(default)]
    pub customize: bool,
    /// Personalization text; present only when `customize` is set.
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl CartLine {
    /// A fresh single-quantity line for a product, options unset.
    #[must_use]
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            color: None,
            size: None,
            upleg: None,
            customize: false,
            custom_name: None,
            quantity: 1,
        }
    }

    fn key(&self) -> LineKey<'_> {
        LineKey {
            product_id: &self.product_id,
            color: self.color.as_deref(),
            size: self.size,
            customize: self.customize,
            custom_name: self.custom_name.as_deref(),
        }
    }
}

/// Merge identity of a line: two adds with an equal key increment quantity
/// rather than create a second line.
#[derive(Debug, PartialEq, Eq)]
struct LineKey<'a> {
    product_id: &'a ProductId,
    color: Option<&'a str>,
    size: Option<u32>,
    customize: bool,
    custom_name: Option<&'a str>,
}

/// The shopper's cart: an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a line: merge into an identity-matching line (incrementing its
    /// quantity by one) or append, preserving insertion order.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.key() == line.key()) {
            existing.quantity += 1;
        } else {
            self.lines.push(line);
        }
    }

    /// Remove the line at `index`. Out-of-range indices are a no-op; the
    /// only callers pass indices rendered from this same cart.
    pub fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Sum of quantities across all lines; drives the badge count.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Empty the cart. Used after order submission.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product: &str, color: Option<&str>) -> CartLine {
        CartLine {
            color: color.map(str::to_owned),
            ..CartLine::new(ProductId::new(product))
        }
    }

    #[test]
    fn test_add_merges_identical_tuple() {
        let mut cart = Cart::new();
        cart.add(line("ft-01", Some("Black")));
        cart.add(line("ft-01", Some("Black")));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_count(), 2);
    }

    #[test]
    fn test_add_appends_on_different_color() {
        let mut cart = Cart::new();
        cart.add(line("ft-01", Some("Black")));
        cart.add(line("ft-01", Some("Sand")));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_count(), 2);
    }

    #[test]
    fn test_upleg_is_not_part_of_identity() {
        let mut cart = Cart::new();
        let mut a = line("ft-01", Some("Black"));
        a.size = Some(42);
        a.upleg = Some(false);
        let mut b = line("ft-01", Some("Black"));
        b.size = Some(42);
        b.upleg = Some(true);

        cart.add(a);
        cart.add(b);

        // Same (product, color, size, customize, custom_name) tuple merges
        // even though the upleg selections differ.
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_customization_splits_identity() {
        let mut cart = Cart::new();
        let plain = line("es-01", None);
        let mut named = line("es-01", None);
        named.customize = true;
        named.custom_name = Some("J. Ojeh".to_owned());

        cart.add(plain);
        cart.add(named.clone());
        cart.add(named);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.lines()[1].quantity, 2);
    }

    #[test]
    fn test_total_count_after_n_distinct_adds() {
        let mut cart = Cart::new();
        for i in 0..5 {
            cart.add(line(&format!("p-{i}"), None));
        }
        assert_eq!(cart.total_count(), 5);

        cart.clear();
        assert_eq!(cart.total_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut cart = Cart::new();
        cart.add(line("a", None));
        cart.add(line("b", None));
        cart.add(line("c", None));

        cart.remove(1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product_id.as_str(), "a");
        assert_eq!(cart.lines()[1].product_id.as_str(), "c");
    }

    #[test]
    fn test_remove_first_of_two() {
        let mut cart = Cart::new();
        cart.add(line("a", None));
        cart.add(line("b", None));

        cart.remove(0);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product_id.as_str(), "b");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(line("a", None));

        cart.remove(5);

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        let mut l = line("ft-01", Some("Black"));
        l.size = Some(42);
        l.upleg = Some(true);
        cart.add(l);

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
