//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Listings
//! GET  /footwear               - Footwear listing page
//! GET  /footwear/products      - Filtered footwear grid (HTMX fragment)
//! GET  /essentials             - Essentials listing page
//! GET  /essentials/products    - Filtered essentials grid (HTMX fragment)
//!
//! # Modal (one shared overlay; fragments swap its content)
//! GET  /products/{id}/modal    - Purchase-form modal fragment
//! GET  /products/{id}/custom-name - Customization-name field fragment
//! GET  /cart/modal             - Cart modal fragment
//! GET  /modal/close            - Empty fragment (closes the overlay)
//!
//! # Cart (HTMX fragments)
//! POST /cart/add               - Add to cart (returns empty, triggers cart-updated)
//! POST /cart/remove            - Remove line (returns rebuilt cart modal)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Orders
//! POST /orders                 - Submit order (returns confirmation fragment)
//! ```

pub mod cart;
pub mod home;
pub mod listings;
pub mod modal;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the listing routes router.
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/footwear", get(listings::footwear))
        .route("/footwear/products", get(listings::footwear_products))
        .route("/essentials", get(listings::essentials))
        .route("/essentials/products", get(listings::essentials_products))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/modal", get(products::modal))
        .route("/{id}/custom-name", get(products::custom_name_field))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/modal", get(cart::modal))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Listing pages and their filter fragments
        .merge(listing_routes())
        // Product modal fragments
        .nest("/products", product_routes())
        // Cart fragments and actions
        .nest("/cart", cart_routes())
        // Shared overlay close action
        .route("/modal/close", get(modal::close))
        // Order submission
        .route("/orders", post(orders::submit))
}
