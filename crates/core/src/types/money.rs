//! Integer naira amounts and their fixed display format.
//!
//! Catalog prices are whole-naira integers, so there is no decimal
//! arithmetic anywhere in the pricing path. Display is a fixed
//! single-currency format: the `₦` glyph followed by thousands-separated
//! digits. There is no locale negotiation.

use serde::{Deserialize, Serialize};

/// A whole-naira amount.
///
/// Amounts can go negative: a misconfigured flat discount larger than the
/// list price passes through unclamped, and the display format carries the
/// sign.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Naira(i64);

impl Naira {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying integer value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Checked-free addition; amounts stay far below `i64` limits.
    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as i64)
    }
}

impl std::fmt::Display for Naira {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-₦{}", group_thousands(self.0.unsigned_abs()))
        } else {
            write!(f, "₦{}", group_thousands(self.0.unsigned_abs()))
        }
    }
}

/// Insert a `,` between every group of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
