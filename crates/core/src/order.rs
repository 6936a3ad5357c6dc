//! The transient order record.
//!
//! An order is built at submission time as a snapshot of the cart plus the
//! customer's contact details, reported (logged and acknowledged) and then
//! dropped. Nothing here persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{Cart, CartLine};

/// Contact details collected by the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// An order as reported at submission: cart snapshot, customer details,
/// submission timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer: CustomerDetails,
    pub lines: Vec<CartLine>,
    pub submitted_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot the cart into a new order. The cart itself is untouched;
    /// the caller clears it after the order has been reported.
    #[must_use]
    pub fn place(customer: CustomerDetails, cart: &Cart) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer,
            lines: cart.lines().to_vec(),
            submitted_at: Utc::now(),
        }
    }
}
