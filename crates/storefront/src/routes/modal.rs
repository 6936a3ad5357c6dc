//! Shared overlay close handler.

use axum::response::{Html, IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::session;

/// Close the overlay (explicit close button or background click).
///
/// Returns an empty fragment; swapping it into the overlay clears the
/// content and the overlay hides itself.
#[instrument(skip(session))]
pub async fn close(session: Session) -> Result<impl IntoResponse> {
    let modal = session::load_modal(&session).await?.close();
    session::save_modal(&session, &modal).await?;
    Ok(Html(String::new()))
}
