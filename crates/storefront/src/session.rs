//! Session-stored values and their accessors.
//!
//! The session holds exactly two things: the shopper's cart and the
//! modal overlay state. Both are serde round-tripped through
//! tower-sessions; absent values fall back to their defaults (empty cart,
//! closed modal).

use tower_sessions::Session;

use ilara_core::cart::Cart;

use crate::error::Result;
use crate::modal::ModalState;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the shopper's cart.
    pub const CART: &str = "cart";

    /// Key for storing the modal overlay state.
    pub const MODAL: &str = "modal";
}

/// Load the cart from the session, defaulting to empty.
pub async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Store the cart back to the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Load the modal state from the session, defaulting to closed.
pub async fn load_modal(session: &Session) -> Result<ModalState> {
    Ok(session
        .get::<ModalState>(keys::MODAL)
        .await?
        .unwrap_or_default())
}

/// Store the modal state back to the session.
pub async fn save_modal(session: &Session, modal: &ModalState) -> Result<()> {
    session.insert(keys::MODAL, modal).await?;
    Ok(())
}
