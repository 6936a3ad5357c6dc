//! Listing page route handlers.
//!
//! Each listing is a fixed category filter plus user-adjustable secondary
//! filters. Changing a filter control re-requests only the product grid
//! fragment; the catalog is already cached so nothing is re-fetched.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use ilara_core::catalog::{Category, Product};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{CardView, FilterOption, filter_options};

/// Footwear filter query parameters. Empty strings mean "All".
#[derive(Debug, Deserialize)]
pub struct FootwearQuery {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

/// Essentials filter query parameters.
#[derive(Debug, Deserialize)]
pub struct EssentialsQuery {
    #[serde(default)]
    pub kind: Option<String>,
}

/// Footwear listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "footwear.html")]
pub struct FootwearTemplate {
    pub products: Vec<CardView>,
    pub genders: Vec<FilterOption>,
    pub kinds: Vec<FilterOption>,
    pub catalog_down: bool,
}

/// Essentials listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "essentials.html")]
pub struct EssentialsTemplate {
    pub products: Vec<CardView>,
    pub kinds: Vec<FilterOption>,
    pub catalog_down: bool,
}

/// Product grid fragment template (for HTMX filter updates).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<CardView>,
}

/// Treat an absent or empty filter value as "no filter".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Distinct, sorted values of a product attribute within a listing.
fn distinct_values<'a, I>(products: I, pick: fn(&'a Product) -> Option<&'a str>) -> Vec<String>
where
    I: Iterator<Item = &'a Product>,
{
    let mut values: Vec<String> = products.filter_map(pick).map(str::to_owned).collect();
    values.sort();
    values.dedup();
    values
}

fn gender_of(product: &Product) -> Option<&str> {
    product.gender.as_deref()
}

fn kind_of(product: &Product) -> Option<&str> {
    product.kind.as_deref()
}

fn matches_filter(value: Option<&str>, filter: Option<&str>) -> bool {
    filter.is_none_or(|f| value == Some(f))
}

fn footwear_cards(
    catalog: &crate::catalog::Catalog,
    gender: Option<&str>,
    kind: Option<&str>,
) -> Vec<CardView> {
    catalog
        .in_category(Category::Footwear)
        .filter(|p| matches_filter(p.gender.as_deref(), gender))
        .filter(|p| matches_filter(p.kind.as_deref(), kind))
        .map(CardView::from)
        .collect()
}

fn essentials_cards(catalog: &crate::catalog::Catalog, kind: Option<&str>) -> Vec<CardView> {
    catalog
        .in_category(Category::Essential)
        .filter(|p| matches_filter(p.kind.as_deref(), kind))
        .map(CardView::from)
        .collect()
}

/// Display the footwear listing page.
#[instrument(skip(state))]
pub async fn footwear(
    State(state): State<AppState>,
    Query(query): Query<FootwearQuery>,
) -> impl IntoResponse {
    let gender = non_empty(query.gender);
    let kind = non_empty(query.kind);

    match state.catalog().get().await {
        Ok(catalog) => FootwearTemplate {
            products: footwear_cards(catalog, gender.as_deref(), kind.as_deref()),
            genders: filter_options(
                distinct_values(catalog.in_category(Category::Footwear), gender_of),
                gender.as_deref(),
            ),
            kinds: filter_options(
                distinct_values(catalog.in_category(Category::Footwear), kind_of),
                kind.as_deref(),
            ),
            catalog_down: false,
        },
        Err(e) => {
            tracing::error!("Failed to load catalog for footwear page: {e}");
            FootwearTemplate {
                products: Vec::new(),
                genders: Vec::new(),
                kinds: Vec::new(),
                catalog_down: true,
            }
        }
    }
}

/// Filtered footwear grid fragment (HTMX).
#[instrument(skip(state))]
pub async fn footwear_products(
    State(state): State<AppState>,
    Query(query): Query<FootwearQuery>,
) -> Result<ProductGridTemplate> {
    let catalog = state.catalog().get().await?;
    Ok(ProductGridTemplate {
        products: footwear_cards(
            catalog,
            non_empty(query.gender).as_deref(),
            non_empty(query.kind).as_deref(),
        ),
    })
}

/// Display the essentials listing page.
#[instrument(skip(state))]
pub async fn essentials(
    State(state): State<AppState>,
    Query(query): Query<EssentialsQuery>,
) -> impl IntoResponse {
    let kind = non_empty(query.kind);

    match state.catalog().get().await {
        Ok(catalog) => EssentialsTemplate {
            products: essentials_cards(catalog, kind.as_deref()),
            kinds: filter_options(
                distinct_values(catalog.in_category(Category::Essential), kind_of),
                kind.as_deref(),
            ),
            catalog_down: false,
        },
        Err(e) => {
            tracing::error!("Failed to load catalog for essentials page: {e}");
            EssentialsTemplate {
                products: Vec::new(),
                kinds: Vec::new(),
                catalog_down: true,
            }
        }
    }
}

/// Filtered essentials grid fragment (HTMX).
#[instrument(skip(state))]
pub async fn essentials_products(
    State(state): State<AppState>,
    Query(query): Query<EssentialsQuery>,
) -> Result<ProductGridTemplate> {
    let catalog = state.catalog().get().await?;
    Ok(ProductGridTemplate {
        products: essentials_cards(catalog, non_empty(query.kind).as_deref()),
    })
}
