//! The shared modal overlay's state machine.
//!
//! One overlay exists per page; it is either closed, showing a product's
//! purchase form, or showing the cart. Opening while something else is
//! showing replaces the overlay's content - modals never stack. The
//! current state lives in the session so fragment handlers know what the
//! overlay is showing.

use serde::{Deserialize, Serialize};

use ilara_core::types::ProductId;

/// What the shared overlay is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "product", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    ShowingProduct(ProductId),
    ShowingCart,
}

impl ModalState {
    /// Open the purchase form for a product, replacing whatever the
    /// overlay was showing.
    #[must_use]
    pub fn open_product(self, id: ProductId) -> Self {
        Self::ShowingProduct(id)
    }

    /// Open the cart view, replacing whatever the overlay was showing.
    #[must_use]
    pub fn open_cart(self) -> Self {
        Self::ShowingCart
    }

    /// Close the overlay (explicit close action or background click).
    #[must_use]
    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Whether the overlay has content.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}
