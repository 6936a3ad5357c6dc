//! Display data for templates.
//!
//! Pure conversions from domain values to the flat, pre-formatted structs
//! the templates render. Prices arrive here as [`Naira`] and leave as
//! display strings; templates never do arithmetic.

use ilara_core::cart::Cart;
use ilara_core::catalog::Product;
use ilara_core::form::{CUSTOM_NAME_MAX_LEN, Field, PurchaseForm};
use ilara_core::pricing;
use ilara_core::types::Naira;

use crate::catalog::Catalog;

/// Fallback image for products without one.
const PLACEHOLDER_IMAGE: &str = "/static/logo.svg";

// =============================================================================
// Product cards
// =============================================================================

/// One color indicator on a product card.
#[derive(Clone)]
pub struct ColorDotView {
    pub name: String,
    pub hex: String,
    pub sold_out: bool,
}

/// Product card display data for the listing grids.
#[derive(Clone)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: String,
    /// List price, present (struck through) when a discount applies.
    pub original_price: Option<String>,
    pub discount_badge: Option<String>,
    pub sold_out: bool,
    pub colors: Vec<ColorDotView>,
}

impl From<&Product> for CardView {
    fn from(product: &Product) -> Self {
        let discounted = product.has_active_discount();
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            image_url: image_url(product),
            price: pricing::effective_price(product).to_string(),
            original_price: discounted.then(|| product.price.to_string()),
            discount_badge: product
                .discount
                .as_ref()
                .and_then(pricing::discount_label),
            sold_out: product.sold_out,
            colors: product
                .colors
                .iter()
                .map(|c| ColorDotView {
                    name: c.name.clone(),
                    hex: c.hex.clone(),
                    sold_out: c.sold_out,
                })
                .collect(),
        }
    }
}

fn image_url(product: &Product) -> String {
    product
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

// =============================================================================
// Listing filters
// =============================================================================

/// One entry in a listing filter dropdown.
#[derive(Clone)]
pub struct FilterOption {
    pub value: String,
    pub selected: bool,
}

/// Build dropdown options from distinct values, marking the selection.
#[must_use]
pub fn filter_options(values: Vec<String>, selected: Option<&str>) -> Vec<FilterOption> {
    values
        .into_iter()
        .map(|value| FilterOption {
            selected: selected == Some(value.as_str()),
            value,
        })
        .collect()
}

// =============================================================================
// Product modal
// =============================================================================

/// A selectable color in the purchase form.
#[derive(Clone)]
pub struct ColorOptionView {
    pub name: String,
    pub sold_out: bool,
}

/// Purchase-form modal display data.
///
/// Flattened from the product's [`PurchaseForm`] schema: the template
/// renders exactly the fields the schema contains, in schema order.
#[derive(Clone)]
pub struct ProductModalView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub price: String,
    pub original_price: Option<String>,
    pub colors: Option<Vec<ColorOptionView>>,
    pub requires_size: bool,
    pub size_min: u32,
    pub size_max: u32,
    pub has_upleg: bool,
    /// Present when the product is customizable; the formatted fee for
    /// the option label.
    pub customize_fee: Option<String>,
    pub custom_name_max: usize,
}

impl ProductModalView {
    /// Build the modal view for a product from its form schema.
    #[must_use]
    pub fn build(product: &Product) -> Self {
        let form = PurchaseForm::for_product(product);
        let discounted = product.has_active_discount();

        let mut view = Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: image_url(product),
            price: pricing::effective_price(product).to_string(),
            original_price: discounted.then(|| product.price.to_string()),
            colors: None,
            requires_size: false,
            size_min: 0,
            size_max: 0,
            has_upleg: false,
            customize_fee: None,
            custom_name_max: CUSTOM_NAME_MAX_LEN,
        };

        for field in form.fields() {
            match field {
                Field::ColorSelect { options } => {
                    view.colors = Some(
                        options
                            .iter()
                            .map(|o| ColorOptionView {
                                name: o.name.clone(),
                                sold_out: o.sold_out,
                            })
                            .collect(),
                    );
                }
                Field::ShoeSize { min, max } => {
                    view.requires_size = true;
                    view.size_min = *min;
                    view.size_max = *max;
                }
                Field::UplegChoice => view.has_upleg = true,
                Field::CustomizeChoice { fee } => view.customize_fee = Some(fee.to_string()),
                Field::CustomName { max_len } => view.custom_name_max = *max_len,
            }
        }

        view
    }
}

// =============================================================================
// Cart
// =============================================================================

/// One cart line as displayed in the cart modal.
#[derive(Clone)]
pub struct CartLineView {
    /// Position in the live cart; the remove action posts it back.
    pub index: usize,
    pub name: String,
    pub color: Option<String>,
    pub size: Option<u32>,
    /// "yes" / "no" when the line carries an upleg selection.
    pub upleg: Option<&'static str>,
    /// Personalization summary, e.g. `J Ojeh (+₦2,500)`.
    pub customization: Option<String>,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for the cart modal.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: Naira::new(0).to_string(),
            count: 0,
        }
    }

    /// Build the view for a cart against the catalog. Lines whose product
    /// no longer resolves are skipped, matching the historical behavior.
    #[must_use]
    pub fn build(cart: &Cart, catalog: &Catalog) -> Self {
        let mut total = Naira::new(0);
        let mut lines = Vec::with_capacity(cart.len());

        for (index, line) in cart.lines().iter().enumerate() {
            let Some(product) = catalog.find(&line.product_id) else {
                continue;
            };
            let line_total =
                pricing::line_unit_price(product, line.customize).times(line.quantity);
            total = total.plus(line_total);

            let customization = line.customize.then(|| {
                let fee = pricing::customization_fee(product);
                let label = line.custom_name.as_deref().unwrap_or("Yes");
                format!("{label} (+{fee})")
            });

            lines.push(CartLineView {
                index,
                name: product.name.clone(),
                color: line.color.clone(),
                size: line.size,
                upleg: line.upleg.map(|u| if u { "yes" } else { "no" }),
                customization,
                quantity: line.quantity,
                line_total: line_total.to_string(),
            });
        }

        Self {
            lines,
            total: total.to_string(),
            count: cart.total_count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
