//! Discount resolution and per-line price computation.
//!
//! All arithmetic is integer naira. Percent discounts round half-up, which
//! is what the catalog's legacy tooling produced; flat discounts pass
//! through unclamped even when they exceed the list price.

use crate::catalog::{DiscountRule, Product};
use crate::types::Naira;

/// Fallback fee when a customizable product does not carry its own.
pub const DEFAULT_CUSTOMIZATION_FEE: Naira = Naira::new(10_000);

/// The price of a product after its discount rule is applied.
///
/// Inactive or absent discounts return the list price. A flat `amount`
/// wins over `percent` when a rule carries both.
#[must_use]
pub fn effective_price(product: &Product) -> Naira {
    let Some(discount) = product.discount.filter(|d| d.active) else {
        return product.price;
    };
    if let Some(amount) = discount.amount {
        return Naira::new(product.price.as_i64() - amount.as_i64());
    }
    if let Some(percent) = discount.percent {
        return percent_off(product.price, percent);
    }
    product.price
}

/// The unit price of a cart line: effective price plus the customization
/// fee when name personalization was selected.
#[must_use]
pub fn line_unit_price(product: &Product, customize: bool) -> Naira {
    let base = effective_price(product);
    if customize {
        base.plus(customization_fee(product))
    } else {
        base
    }
}

/// The product's customization fee, falling back to the fixed default.
#[must_use]
pub fn customization_fee(product: &Product) -> Naira {
    product.customization_fee.unwrap_or(DEFAULT_CUSTOMIZATION_FEE)
}

/// Badge text for an active discount (`-10%` or `₦500 off`).
///
/// The percent form is preferred for the label even though pricing checks
/// the flat amount first; rules carrying both are misconfigured data and
/// keep the historical label.
#[must_use]
pub fn discount_label(rule: &DiscountRule) -> Option<String> {
    if !rule.active {
        return None;
    }
    if let Some(percent) = rule.percent {
        return Some(format!("-{percent}%"));
    }
    rule.amount.map(|amount| format!("{amount} off"))
}

/// `price * (100 - percent) / 100`, rounded half-up.
fn percent_off(price: Naira, percent: u32) -> Naira {
    let numerator = price.as_i64() * (100 - i64::from(percent));
    Naira::new((numerator + 50).div_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::types::ProductId;

    fn product(price: i64, discount: Option<DiscountRule>) -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Test".to_owned(),
            description: None,
            price: Naira::new(price),
            discount,
            colors: Vec::new(),
            category: Category::Other,
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

    #[test]
    fn test_no_discount_returns_list_price() {
        assert_eq!(effective_price(&product(45_000, None)), Naira::new(45_000));
    }

    #[test]
    fn test_inactive_discount_returns_list_price() {
        let p = product(
            45_000,
            Some(DiscountRule {
                active: false,
                amount: Some(Naira::new(5_000)),
                percent: None,
            }),
        );
        assert_eq!(effective_price(&p), Naira::new(45_000));
    }

    #[test]
    fn test_flat_amount_discount() {
        let p = product(
            45_000,
            Some(DiscountRule {
                active: true,
                amount: Some(Naira::new(5_000)),
                percent: None,
            }),
        );
        assert_eq!(effective_price(&p), Naira::new(40_000));
    }

    #[test]
    fn test_flat_amount_passes_through_negative() {
        // A discount larger than the list price is misconfigured data;
        // the resolver does not clamp.
        let p = product(
            1_000,
            Some(DiscountRule {
                active: true,
                amount: Some(Naira::new(2_500)),
                percent: None,
            }),
        );
        assert_eq!(effective_price(&p), Naira::new(-1_500));
    }

    #[test]
    fn test_percent_discount_rounds_half_up() {
        let p = product(
            1_000,
            Some(DiscountRule {
                active: true,
                amount: None,
                percent: Some(10),
            }),
        );
        assert_eq!(effective_price(&p), Naira::new(900));

        // 999 * 0.85 = 849.15 -> 849
        let p = product(
            999,
            Some(DiscountRule {
                active: true,
                amount: None,
                percent: Some(15),
            }),
        );
        assert_eq!(effective_price(&p), Naira::new(849));

        // 10 * 0.75 = 7.5 -> 8 (half rounds up)
        let p = product(
            10,
            Some(DiscountRule {
                active: true,
                amount: None,
                percent: Some(25),
            }),
        );
        assert_eq!(effective_price(&p), Naira::new(8));
    }

    #[test]
    fn test_amount_wins_over_percent() {
        let p = product(
            20_000,
            Some(DiscountRule {
                active: true,
                amount: Some(Naira::new(3_000)),
                percent: Some(50),
            }),
        );
        assert_eq!(effective_price(&p), Naira::new(17_000));
    }

    #[test]
    fn test_active_rule_with_neither_field_returns_list_price() {
        let p = product(
            20_000,
            Some(DiscountRule {
                active: true,
                amount: None,
                percent: None,
            }),
        );
        assert_eq!(effective_price(&p), Naira::new(20_000));
    }

    #[test]
    fn test_line_unit_price_adds_customization_fee() {
        let mut p = product(30_000, None);
        assert_eq!(line_unit_price(&p, false), Naira::new(30_000));
        // Fallback fee
        assert_eq!(line_unit_price(&p, true), Naira::new(40_000));
        // Product-specific fee
        p.customization_fee = Some(Naira::new(2_500));
        assert_eq!(line_unit_price(&p, true), Naira::new(32_500));
    }

    #[test]
    fn test_discount_label_prefers_percent() {
        let rule = DiscountRule {
            active: true,
            amount: Some(Naira::new(500)),
            percent: Some(10),
        };
        assert_eq!(discount_label(&rule).as_deref(), Some("-10%"));

        let rule = DiscountRule {
            active: true,
            amount: Some(Naira::new(6_000)),
            percent: None,
        };
        assert_eq!(discount_label(&rule).as_deref(), Some("₦6,000 off"));

        let rule = DiscountRule {
            active: false,
            amount: None,
            percent: Some(10),
        };
        assert_eq!(discount_label(&rule), None);
    }
}
