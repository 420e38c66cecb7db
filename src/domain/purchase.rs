use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single course offered for purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub price: Decimal,
}

impl Course {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A customer's shopping cart for a single checkout session.
///
/// `total_amount` is a running total maintained as items are added. Discount
/// application may reduce `total_amount` but never touches `items`, so
/// [`Purchase::subtotal`] always recovers the undiscounted sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    /// The unique identifier for the customer.
    pub customer: u32,
    /// Ordered line items, in the order they were added.
    pub items: Vec<Course>,
    /// Running total; equals the sum of item prices until a discount fires.
    pub total_amount: Decimal,
}

impl Purchase {
    pub fn new(customer: u32) -> Self {
        Self {
            customer,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
        }
    }

    /// Appends a course and bumps the running total by its price.
    pub fn add_item(&mut self, course: Course) {
        self.total_amount += course.price;
        self.items.push(course);
    }

    /// The undiscounted sum of item prices, recomputed from `items`.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|course| course.price).sum()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
