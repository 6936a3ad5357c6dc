//! Product modal route handlers.
//!
//! The purchase form lives in the shared overlay; its shape comes from
//! the product's declarative form schema, flattened into the modal view.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use ilara_core::form::CUSTOM_NAME_MAX_LEN;
use ilara_core::types::ProductId;

use crate::error::Result;
use crate::session;
use crate::state::AppState;
use crate::views::ProductModalView;

/// Purchase-form modal fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_modal.html")]
pub struct ProductModalTemplate {
    pub product: ProductModalView,
}

/// Customization-name field fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/custom_name_field.html")]
pub struct CustomNameFieldTemplate {
    pub max_len: usize,
}

/// Display the purchase-form modal fragment (HTMX).
///
/// An id that is not in the catalog silently drops the action: the
/// overlay is cleared and nothing else happens.
#[instrument(skip(state, session))]
pub async fn modal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response> {
    let product_id = ProductId::from(id);
    let catalog = state.catalog().get().await?;

    let Some(product) = catalog.find(&product_id) else {
        tracing::debug!(product_id = %product_id, "modal requested for unknown product");
        let modal = session::load_modal(&session).await?.close();
        session::save_modal(&session, &modal).await?;
        return Ok(Html(String::new()).into_response());
    };

    let modal = session::load_modal(&session).await?.open_product(product_id);
    session::save_modal(&session, &modal).await?;

    Ok(ProductModalTemplate {
        product: ProductModalView::build(product),
    }
    .into_response())
}

/// Customization toggle query.
#[derive(Debug, Deserialize)]
pub struct CustomizeQuery {
    #[serde(default)]
    pub customize: Option<String>,
}

/// Toggle the customization-name field (HTMX).
///
/// The yes/no selector requests this fragment on change; "yes" returns
/// the text field, anything else returns nothing, hiding it.
pub async fn custom_name_field(
    Path(_id): Path<String>,
    Query(query): Query<CustomizeQuery>,
) -> Response {
    if query.customize.as_deref() == Some("yes") {
        CustomNameFieldTemplate {
            max_len: CUSTOM_NAME_MAX_LEN,
        }
        .into_response()
    } else {
        Html(String::new()).into_response()
    }
}
