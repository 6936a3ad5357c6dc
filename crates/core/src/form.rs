//! Declarative per-product purchase-form schemas.
//!
//! The shape of the purchase form varies with the product's flags (colors,
//! footwear sizing, upleg variant, customization). Rather than branching
//! inside the template, the schema is computed once from the product as an
//! ordered list of typed fields; the template renders what the schema says
//! and nothing else.

use thiserror::Error;

use crate::catalog::Product;
use crate::pricing;
use crate::types::Naira;

/// Upper bound on the personalization text.
pub const CUSTOM_NAME_MAX_LEN: usize = 50;

/// Advisory shoe-size bounds; enforced only as input constraints.
pub const SHOE_SIZE_MIN: u32 = 30;
pub const SHOE_SIZE_MAX: u32 = 50;

/// One selectable color in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOption {
    pub name: String,
    pub hex: String,
    pub sold_out: bool,
}

/// A typed field of the purchase form, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Required color selector; the first option is the default.
    ColorSelect { options: Vec<ColorOption> },
    /// Required numeric shoe size (footwear only).
    ShoeSize { min: u32, max: u32 },
    /// Optional yes/no upleg variant, defaulting to "no" (footwear only).
    UplegChoice,
    /// Yes/no name-personalization toggle; the label carries the fee.
    CustomizeChoice { fee: Naira },
    /// Personalization text, visible only while customization is "yes".
    CustomName { max_len: usize },
}

/// The ordered purchase-form schema for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseForm {
    fields: Vec<Field>,
}

impl PurchaseForm {
    /// Compute the schema for a product.
    ///
    /// Color options are the colors that are not sold out; when every
    /// color is sold out the full list is offered and the (sold-out)
    /// first color becomes the default. That mirrors the catalog's
    /// historical behavior and is deliberately not corrected here.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        let mut fields = Vec::new();

        if !product.colors.is_empty() {
            let mut options: Vec<ColorOption> = product
                .colors
                .iter()
                .filter(|c| !c.sold_out)
                .map(color_option)
                .collect();
            if options.is_empty() {
                options = product.colors.iter().map(color_option).collect();
            }
            fields.push(Field::ColorSelect { options });
        }

        if product.category == crate::catalog::Category::Footwear {
            fields.push(Field::ShoeSize {
                min: SHOE_SIZE_MIN,
                max: SHOE_SIZE_MAX,
            });
            if product.upleg_option {
                fields.push(Field::UplegChoice);
            }
        }

        if product.customizable {
            fields.push(Field::CustomizeChoice {
                fee: pricing::customization_fee(product),
            });
            fields.push(Field::CustomName {
                max_len: CUSTOM_NAME_MAX_LEN,
            });
        }

        Self { fields }
    }

    /// The ordered field list.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Whether a color selection is required on submit.
    #[must_use]
    pub fn requires_color(&self) -> bool {
        self.fields
            .iter()
            .any(|f| matches!(f, Field::ColorSelect { .. }))
    }

    /// Whether a shoe size is required on submit.
    #[must_use]
    pub fn requires_size(&self) -> bool {
        self.fields
            .iter()
            .any(|f| matches!(f, Field::ShoeSize { .. }))
    }

    /// Whether the form offers the upleg variant.
    #[must_use]
    pub fn has_upleg(&self) -> bool {
        self.fields.iter().any(|f| matches!(f, Field::UplegChoice))
    }

    /// The customization fee, when the product is customizable.
    #[must_use]
    pub fn customization_fee(&self) -> Option<Naira> {
        self.fields.iter().find_map(|f| match f {
            Field::CustomizeChoice { fee } => Some(*fee),
            _ => None,
        })
    }

    /// The color options, when the product defines colors.
    #[must_use]
    pub fn color_options(&self) -> Option<&[ColorOption]> {
        self.fields.iter().find_map(|f| match f {
            Field::ColorSelect { options } => Some(options.as_slice()),
            _ => None,
        })
    }
}

fn color_option(color: &crate::catalog::Color) -> ColorOption {
    ColorOption {
        name: color.name.clone(),
        hex: color.hex.clone(),
        sold_out: color.sold_out,
    }
}

/// Why a personalization text was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomNameError {
    #[error("customization name is longer than {CUSTOM_NAME_MAX_LEN} characters")]
    TooLong,
    #[error("customization name may only contain letters, digits and spaces")]
    InvalidCharacter,
}

/// Validate personalization text: at most [`CUSTOM_NAME_MAX_LEN`]
/// characters, alphanumeric and spaces only. Empty text is valid - the
/// field is optional even when customization is selected.
pub fn validate_custom_name(name: &str) -> Result<(), CustomNameError> {
    if name.chars().count() > CUSTOM_NAME_MAX_LEN {
        return Err(CustomNameError::TooLong);
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(CustomNameError::InvalidCharacter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Color};
    use crate::types::ProductId;

    fn base_product(category: Category) -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Test".to_owned(),
            description: None,
            price: Naira::new(20_000),
            discount: None,
            colors: Vec::new(),
            category,
            gender: None,
            kind: None,
            featured: false,
            bestseller: false,
            new_in: false,
            sold_out: false,
            customizable: false,
            customization_fee: None,
            upleg_option: false,
            image: None,
        }
    }

    fn colors(specs: &[(&str, bool)]) -> Vec<Color> {
        specs
            .iter()
            .map(|(name, sold_out)| Color {
                name: (*name).to_owned(),
                hex: "#000000".to_owned(),
                sold_out: *sold_out,
            })
            .collect()
    }

    #[test]
    fn test_plain_essential_has_no_fields() {
        let form = PurchaseForm::for_product(&base_product(Category::Essential));
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_footwear_with_everything() {
        let mut product = base_product(Category::Footwear);
        product.colors = colors(&[("Black", false), ("Sand", true)]);
        product.upleg_option = true;
        product.customizable = true;
        product.customization_fee = Some(Naira::new(5_000));

        let form = PurchaseForm::for_product(&product);
        let kinds: Vec<_> = form
            .fields()
            .iter()
            .map(|f| match f {
                Field::ColorSelect { .. } => "color",
                Field::ShoeSize { .. } => "size",
                Field::UplegChoice => "upleg",
                Field::CustomizeChoice { .. } => "customize",
                Field::CustomName { .. } => "custom_name",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["color", "size", "upleg", "customize", "custom_name"]
        );
        assert!(form.requires_color());
        assert!(form.requires_size());
        assert_eq!(form.customization_fee(), Some(Naira::new(5_000)));
    }

    #[test]
    fn test_sold_out_colors_are_excluded_from_options() {
        let mut product = base_product(Category::Essential);
        product.colors = colors(&[("Black", true), ("Sand", false), ("Olive", false)]);

        let form = PurchaseForm::for_product(&product);
        let options = form.color_options().expect("color options");
        let names: Vec<_> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Sand", "Olive"]);
    }

    #[test]
    fn test_all_colors_sold_out_still_offers_first_as_default() {
        // Historical behavior, preserved: a fully sold-out color list is
        // still offered, defaulting to the first entry.
        let mut product = base_product(Category::Essential);
        product.colors = colors(&[("Black", true), ("Sand", true)]);

        let form = PurchaseForm::for_product(&product);
        let options = form.color_options().expect("color options");
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "Black");
        assert!(options[0].sold_out);
    }

    #[test]
    fn test_customize_fee_falls_back_to_default() {
        let mut product = base_product(Category::Essential);
        product.customizable = true;

        let form = PurchaseForm::for_product(&product);
        assert_eq!(
            form.customization_fee(),
            Some(pricing::DEFAULT_CUSTOMIZATION_FEE)
        );
    }

    #[test]
    fn test_non_footwear_never_gets_size_or_upleg() {
        let mut product = base_product(Category::Essential);
        product.upleg_option = true;

        let form = PurchaseForm::for_product(&product);
        assert!(!form.requires_size());
        assert!(!form.has_upleg());
    }

    #[test]
    fn test_validate_custom_name() {
        assert_eq!(validate_custom_name(""), Ok(()));
        assert_eq!(validate_custom_name("J Ojeh 23"), Ok(()));
        assert_eq!(
            validate_custom_name(&"x".repeat(51)),
            Err(CustomNameError::TooLong)
        );
        assert_eq!(
            validate_custom_name("J. Ojeh"),
            Err(CustomNameError::InvalidCharacter)
        );
    }
}
