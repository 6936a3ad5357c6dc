//! The read-only product data model.
//!
//! Products are deserialized from the catalog document (camelCase JSON)
//! once per process and never mutated. Everything optional in the document
//! defaults to absent/false so sparse records stay valid.

use serde::{Deserialize, Serialize};

use crate::types::{Naira, ProductId};

/// Product category, used by the listing pages as a fixed filter.
///
/// Unknown categories deserialize to [`Category::Other`] rather than
/// failing the whole catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Footwear,
    Essential,
    #[default]
    #[serde(other)]
    Other,
}

/// A discount rule attached to a product.
///
/// At most one of `amount` / `percent` is expected; when both are present
/// the flat `amount` wins (it is checked first by the pricing resolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    pub active: bool,
    #[serde(default)]
    pub amount: Option<Naira>,
    #[serde(default)]
    pub percent: Option<u32>,
}

/// A color variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub name: String,
    pub hex: String,
    #[serde(default)]
    pub sold_out: bool,
}

/// One product record from the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Naira,
    #[serde(default)]
    pub discount: Option<DiscountRule>,
    #[serde(default)]
    pub colors: Vec<Color>,
    pub category: Category,
    /// Audience filter on the footwear listing (e.g. "men", "women").
    #[serde(default)]
    pub gender: Option<String>,
    /// Secondary type filter on the listing pages (e.g. "sneaker", "cap").
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub bestseller: bool,
    #[serde(default)]
    pub new_in: bool,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub customizable: bool,
    /// Per-product name-personalization fee; the pricing resolver applies
    /// a fixed fallback when customizable products omit it.
    #[serde(default)]
    pub customization_fee: Option<Naira>,
    /// Whether the footwear product offers the upleg variant.
    #[serde(default)]
    pub upleg_option: bool,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Whether the product has an active discount rule.
    #[must_use]
    pub fn has_active_discount(&self) -> bool {
        self.discount.is_some_and(|d| d.active)
    }

    /// The first color that is not sold out, if any.
    #[must_use]
    pub fn first_available_color(&self) -> Option<&Color> {
        self.colors.iter().find(|c| !c.sold_out)
    }
}
