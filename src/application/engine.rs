use crate::domain::discount::DiscountRuleBox;
use crate::domain::purchase::Purchase;

/// Ordered registry of discount rules with first-match selection.
///
/// Registration order is priority order: when several rules are eligible for
/// the same purchase, only the earliest-registered one fires, regardless of
/// which would yield the larger reduction. At most one discount is ever
/// applied per call.
#[derive(Default)]
pub struct DiscountEngine {
    rules: Vec<DiscountRuleBox>,
}

impl DiscountEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule to the registry.
    ///
    /// Duplicate registration is allowed; an earlier duplicate simply shadows
    /// the later one whenever both are eligible.
    pub fn register(&mut self, rule: DiscountRuleBox) {
        self.rules.push(rule);
    }

    /// Applies the earliest-registered eligible rule to the purchase.
    ///
    /// Returns the name of the rule that fired, or `None` when no rule is
    /// eligible (the purchase is left unmodified; this is not an error).
    ///
    /// Eligibility is evaluated against the purchase's current state. A
    /// second call after a discount has fired would re-evaluate against the
    /// already-discounted total, so callers must invoke this once per
    /// purchase; the engine does not guard against re-entry.
    pub fn apply_best_discount(&self, purchase: &mut Purchase) -> Option<&str> {
        let rule = self.rules.iter().find(|rule| rule.is_applicable(purchase))?;
        rule.apply(purchase);
        Some(rule.name())
    }
}
