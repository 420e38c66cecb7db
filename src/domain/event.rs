use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Opens a checkout session for a customer.
    Create,
    /// Adds a course to the customer's open session.
    Add,
    /// Finalizes the session: discount, submission, notification.
    Complete,
}

/// One record of the checkout event stream.
///
/// `course` and `price` are only meaningful for [`EventType::Add`]; the other
/// event types leave them empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CheckoutEvent {
    pub r#type: EventType,
    pub customer: u32,
    pub course: Option<String>,
    pub price: Option<Decimal>,
}
