use super::purchase::Purchase;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A swappable unit of discount eligibility and application.
///
/// The contract input is the full [`Purchase`] value, never a narrower
/// projection, so a rule may drive its eligibility off the item count, the
/// running total, or any other field without the caller knowing which.
pub trait DiscountRule: Send + Sync {
    /// Label used on receipts when this rule fires.
    fn name(&self) -> &str;

    /// Whether this rule may fire against the purchase's current state.
    fn is_applicable(&self, purchase: &Purchase) -> bool;

    /// Reduces `total_amount` by this rule's percentage.
    ///
    /// Percentages are not validated or clamped: a rule constructed with a
    /// percentage above 100 drives the total negative.
    fn apply(&self, purchase: &mut Purchase);
}

pub type DiscountRuleBox = Box<dyn DiscountRule>;

fn percent_off(purchase: &mut Purchase, percentage: Decimal) {
    purchase.total_amount -= purchase.total_amount * percentage / dec!(100);
}

/// Percentage discount for purchases whose item count falls in `[min, max)`.
#[derive(Debug, Clone)]
pub struct ItemCountDiscount {
    name: String,
    min: usize,
    max: usize,
    percentage: Decimal,
}

impl ItemCountDiscount {
    pub fn new(name: impl Into<String>, min: usize, max: usize, percentage: Decimal) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            percentage,
        }
    }
}

impl DiscountRule for ItemCountDiscount {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_applicable(&self, purchase: &Purchase) -> bool {
        let count = purchase.item_count();
        count >= self.min && count < self.max
    }

    fn apply(&self, purchase: &mut Purchase) {
        percent_off(purchase, self.percentage);
    }
}

/// Percentage discount for purchases whose running total falls in `[min, max)`.
///
/// Evaluates `total_amount` rather than the item count; a legitimate peer of
/// [`ItemCountDiscount`] since both inspect the same input type.
#[derive(Debug, Clone)]
pub struct TotalAmountDiscount {
    name: String,
    min: Decimal,
    max: Decimal,
    percentage: Decimal,
}

impl TotalAmountDiscount {
    pub fn new(name: impl Into<String>, min: Decimal, max: Decimal, percentage: Decimal) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            percentage,
        }
    }
}

impl DiscountRule for TotalAmountDiscount {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_applicable(&self, purchase: &Purchase) -> bool {
        purchase.total_amount >= self.min && purchase.total_amount < self.max
    }

    fn apply(&self, purchase: &mut Purchase) {
        percent_off(purchase, self.percentage);
    }
}
