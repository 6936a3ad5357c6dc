//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::CardView;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Featured products (sold-out items excluded).
    pub featured: Vec<CardView>,
    /// Bestsellers (sold-out items excluded).
    pub bestsellers: Vec<CardView>,
    /// New arrivals (sold-out items excluded).
    pub new_arrivals: Vec<CardView>,
    /// Set when the catalog could not be loaded; the sections render
    /// empty with a notice instead of failing the page.
    pub catalog_down: bool,
}

/// Display the home page.
///
/// The three sections are non-exclusive subsets of the catalog, each
/// rendered into its own container.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog().get().await {
        Ok(catalog) => HomeTemplate {
            featured: catalog.featured().map(CardView::from).collect(),
            bestsellers: catalog.bestsellers().map(CardView::from).collect(),
            new_arrivals: catalog.new_arrivals().map(CardView::from).collect(),
            catalog_down: false,
        },
        Err(e) => {
            tracing::error!("Failed to load catalog for home page: {e}");
            HomeTemplate {
                featured: Vec::new(),
                bestsellers: Vec::new(),
                new_arrivals: Vec::new(),
                catalog_down: true,
            }
        }
    }
}
