//! Order submission handler.
//!
//! There is no payment integration: a submitted order is snapshotted,
//! reported to the log, acknowledged to the shopper, and dropped. The
//! cart is cleared as part of the submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use ilara_core::order::{CustomerDetails, Order};

use crate::error::{AppError, Result};
use crate::session;

/// Order form data.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Order confirmation fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_confirmed.html")]
pub struct OrderConfirmedTemplate {
    pub name: String,
    pub reference: String,
}

/// Submit the order (HTMX).
///
/// Snapshots the cart with the customer details, logs the order, clears
/// the cart, and returns the confirmation fragment into the overlay.
#[instrument(skip(session, form))]
pub async fn submit(session: Session, Form(form): Form<OrderForm>) -> Result<Response> {
    let customer = customer_from_form(form)?;

    let mut cart = session::load_cart(&session).await?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("your cart is empty".to_string()));
    }

    let order = Order::place(customer, &cart);
    match serde_json::to_string(&order) {
        Ok(json) => tracing::info!(order = %json, "order received"),
        Err(e) => tracing::error!("Failed to serialize order {}: {e}", order.id),
    }

    cart.clear();
    session::save_cart(&session, &cart).await?;
    let modal = session::load_modal(&session).await?.close();
    session::save_modal(&session, &modal).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        OrderConfirmedTemplate {
            name: order.customer.name.clone(),
            reference: order.id.to_string(),
        },
    )
        .into_response())
}

/// Check the required contact fields, mirroring the form's native
/// validation.
fn customer_from_form(form: OrderForm) -> Result<CustomerDetails> {
    let required = |value: String, field: &str| -> Result<String> {
        let value = value.trim().to_owned();
        if value.is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
        Ok(value)
    };

    Ok(CustomerDetails {
        name: required(form.name, "name")?,
        email: required(form.email, "email")?,
        phone: required(form.phone, "phone")?,
        address: required(form.address, "address")?,
    })
}
