//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. The cart itself lives in the shopper's session; every badge
//! on the page listens for the `cart-updated` trigger and re-requests
//! its count, so any number of badge locations stays in sync.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use ilara_core::cart::CartLine;
use ilara_core::catalog::Category;
use ilara_core::form::{PurchaseForm, validate_custom_name};
use ilara_core::types::ProductId;

use crate::error::{AppError, Result};
use crate::session;
use crate::state::AppState;
use crate::views::CartView;

/// Add to cart form data, as submitted by the purchase form.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub upleg: Option<String>,
    #[serde(default)]
    pub customize: Option<String>,
    #[serde(default)]
    pub custom_name: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Cart modal fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_modal.html")]
pub struct CartModalTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display the cart modal fragment (HTMX).
///
/// Renders the current cart contents, or an empty-state message when the
/// cart has no lines.
#[instrument(skip(state, session))]
pub async fn modal(State(state): State<AppState>, session: Session) -> Result<Response> {
    let cart = session::load_cart(&session).await?;
    let modal = session::load_modal(&session).await?.open_cart();
    session::save_modal(&session, &modal).await?;

    let view = if cart.is_empty() {
        CartView::empty()
    } else {
        let catalog = state.catalog().get().await?;
        CartView::build(&cart, catalog)
    };

    Ok(CartModalTemplate { cart: view }.into_response())
}

/// Add item to cart (HTMX).
///
/// Re-validates what native form validation already enforced, builds the
/// cart line, merges it into the session cart, and closes the modal.
/// Returns an empty fragment (the overlay clears) plus an HTMX trigger
/// so every cart badge refreshes.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = ProductId::from(form.product_id);
    let catalog = state.catalog().get().await?;

    let Some(product) = catalog.find(&product_id) else {
        // The action references a product that is not in the catalog;
        // drop it silently.
        tracing::debug!(product_id = %product_id, "add-to-cart for unknown product dropped");
        return Ok(Html(String::new()).into_response());
    };

    let schema = PurchaseForm::for_product(product);

    let color = form.color.filter(|c| !c.is_empty());
    if schema.requires_color() && color.is_none() {
        return Err(AppError::Validation("a color selection is required".to_string()));
    }
    if schema.requires_size() && form.size.is_none() {
        return Err(AppError::Validation("a shoe size is required".to_string()));
    }

    let customize = product.customizable && form.customize.as_deref() == Some("yes");
    let custom_name = if customize {
        let name = form.custom_name.unwrap_or_default();
        validate_custom_name(&name).map_err(|e| AppError::Validation(e.to_string()))?;
        (!name.is_empty()).then_some(name)
    } else {
        None
    };

    let upleg = (product.category == Category::Footwear && product.upleg_option)
        .then(|| form.upleg.as_deref() == Some("yes"));

    let mut cart = session::load_cart(&session).await?;
    cart.add(CartLine {
        product_id,
        color,
        size: form.size,
        upleg,
        customize,
        custom_name,
        quantity: 1,
    });
    session::save_cart(&session, &cart).await?;

    let modal = session::load_modal(&session).await?.close();
    session::save_modal(&session, &modal).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        Html(String::new()),
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
///
/// Rebuilds the cart modal fragment so the open cart view reflects the
/// updated contents in one refresh.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let mut cart = session::load_cart(&session).await?;
    cart.remove(form.index);
    session::save_cart(&session, &cart).await?;

    let view = if cart.is_empty() {
        CartView::empty()
    } else {
        let catalog = state.catalog().get().await?;
        CartView::build(&cart, catalog)
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartModalTemplate { cart: view },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = session::load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.total_count(),
    })
}
