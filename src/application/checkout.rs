use crate::application::engine::DiscountEngine;
use crate::domain::event::{CheckoutEvent, EventType};
use crate::domain::ports::{CourseApiBox, NotificationSenderBox};
use crate::domain::purchase::{Course, Purchase};
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Summary of a completed checkout, suitable for CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub customer: u32,
    pub items: usize,
    pub subtotal: Decimal,
    /// Name of the discount rule that fired, if any.
    pub discount: Option<String>,
    pub total: Decimal,
    /// Confirmation id returned by the purchase API.
    pub order: u64,
}

/// The main entry point for the checkout application.
///
/// `CheckoutManager` owns the per-customer purchase sessions and the injected
/// collaborators: the discount engine, the purchase submission API, and the
/// notification sender. It never selects concrete collaborators itself; that
/// choice belongs to the composition root.
pub struct CheckoutManager {
    engine: DiscountEngine,
    api: CourseApiBox,
    sender: NotificationSenderBox,
    sessions: HashMap<u32, Purchase>,
}

impl CheckoutManager {
    pub fn new(engine: DiscountEngine, api: CourseApiBox, sender: NotificationSenderBox) -> Self {
        Self {
            engine,
            api,
            sender,
            sessions: HashMap::new(),
        }
    }

    /// Dispatches a single checkout event.
    ///
    /// Returns `Some(receipt)` only for `Complete` events.
    pub async fn handle_event(&mut self, event: CheckoutEvent) -> Result<Option<Receipt>> {
        match event.r#type {
            EventType::Create => {
                self.create_purchase(event.customer);
                Ok(None)
            }
            EventType::Add => {
                let name = event.course.ok_or_else(|| {
                    CheckoutError::ValidationError("Add event missing course name".to_string())
                })?;
                let price = event.price.ok_or_else(|| {
                    CheckoutError::ValidationError("Add event missing price".to_string())
                })?;
                self.add_item(event.customer, Course::new(name, price))?;
                Ok(None)
            }
            EventType::Complete => self.complete_purchase(event.customer).await.map(Some),
        }
    }

    /// Opens a checkout session, replacing any existing session for the
    /// same customer.
    pub fn create_purchase(&mut self, customer: u32) {
        self.sessions.insert(customer, Purchase::new(customer));
    }

    /// Appends a course to the customer's open session.
    pub fn add_item(&mut self, customer: u32, course: Course) -> Result<()> {
        let purchase = self.sessions.get_mut(&customer).ok_or_else(|| {
            CheckoutError::ValidationError(format!("No open purchase for customer {customer}"))
        })?;
        purchase.add_item(course);
        Ok(())
    }

    /// Finalizes the customer's session: applies at most one discount,
    /// submits the purchase, and notifies the customer on success.
    ///
    /// The session is consumed whether or not submission succeeds, so a
    /// purchase is finalized exactly once.
    pub async fn complete_purchase(&mut self, customer: u32) -> Result<Receipt> {
        let mut purchase = self.sessions.remove(&customer).ok_or_else(|| {
            CheckoutError::ValidationError(format!("No open purchase for customer {customer}"))
        })?;

        let subtotal = purchase.subtotal();
        let discount = self
            .engine
            .apply_best_discount(&mut purchase)
            .map(str::to_owned);

        let confirmation = self.api.submit_purchase(&purchase).await?;
        self.sender
            .send_notification(customer, "Purchase completed")
            .await?;

        Ok(Receipt {
            customer,
            items: purchase.item_count(),
            subtotal,
            discount,
            total: purchase.total_amount,
            order: confirmation.order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discount::ItemCountDiscount;
    use crate::infrastructure::in_memory::InMemoryCourseApi;
    use crate::infrastructure::senders::{EmailSender, Outbox};
    use rust_decimal_macros::dec;

    fn manager_with(api: InMemoryCourseApi) -> CheckoutManager {
        let mut engine = DiscountEngine::new();
        engine.register(Box::new(ItemCountDiscount::new("bronze", 10, 20, dec!(10))));
        CheckoutManager::new(
            engine,
            Box::new(api),
            Box::new(EmailSender::new(Outbox::default())),
        )
    }

    #[tokio::test]
    async fn test_complete_applies_discount_and_submits() {
        let api = InMemoryCourseApi::new();
        let mut manager = manager_with(api.clone());

        manager.create_purchase(1);
        for i in 0..12 {
            manager
                .add_item(1, Course::new(format!("course-{i}"), dec!(2)))
                .unwrap();
        }

        let receipt = manager.complete_purchase(1).await.unwrap();

        assert_eq!(receipt.items, 12);
        assert_eq!(receipt.subtotal, dec!(24));
        assert_eq!(receipt.discount.as_deref(), Some("bronze"));
        assert_eq!(receipt.total, dec!(21.6));
        assert_eq!(receipt.order, 1);

        // The API saw the discounted purchase.
        let submitted = api.submitted().await;
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].total_amount, dec!(21.6));
        assert_eq!(submitted[0].items.len(), 12);
    }

    #[tokio::test]
    async fn test_complete_without_discount() {
        let mut manager = manager_with(InMemoryCourseApi::new());

        manager.create_purchase(2);
        manager.add_item(2, Course::new("solo", dec!(100))).unwrap();

        let receipt = manager.complete_purchase(2).await.unwrap();
        assert_eq!(receipt.discount, None);
        assert_eq!(receipt.total, dec!(100));
    }

    #[tokio::test]
    async fn test_add_without_session_is_rejected() {
        let mut manager = manager_with(InMemoryCourseApi::new());

        let result = manager.add_item(9, Course::new("orphan", dec!(1)));
        assert!(matches!(result, Err(CheckoutError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_complete_consumes_the_session() {
        let mut manager = manager_with(InMemoryCourseApi::new());

        manager.create_purchase(1);
        manager.add_item(1, Course::new("a", dec!(5))).unwrap();
        manager.complete_purchase(1).await.unwrap();

        let second = manager.complete_purchase(1).await;
        assert!(matches!(second, Err(CheckoutError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_replaces_existing_session() {
        let mut manager = manager_with(InMemoryCourseApi::new());

        manager.create_purchase(1);
        manager.add_item(1, Course::new("stale", dec!(50))).unwrap();
        manager.create_purchase(1);

        let receipt = manager.complete_purchase(1).await.unwrap();
        assert_eq!(receipt.items, 0);
        assert_eq!(receipt.total, dec!(0));
    }

    #[tokio::test]
    async fn test_submission_failure_propagates_and_consumes_session() {
        let mut manager = manager_with(InMemoryCourseApi::rejecting());

        manager.create_purchase(1);
        manager.add_item(1, Course::new("a", dec!(5))).unwrap();

        let result = manager.complete_purchase(1).await;
        assert!(matches!(result, Err(CheckoutError::SubmissionError(_))));

        // Finalized exactly once: the session is gone even after a failure.
        let retry = manager.complete_purchase(1).await;
        assert!(matches!(retry, Err(CheckoutError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_handle_event_dispatch() {
        let mut manager = manager_with(InMemoryCourseApi::new());

        let create = CheckoutEvent {
            r#type: EventType::Create,
            customer: 1,
            course: None,
            price: None,
        };
        let add = CheckoutEvent {
            r#type: EventType::Add,
            customer: 1,
            course: Some("rust-101".to_string()),
            price: Some(dec!(30)),
        };
        let complete = CheckoutEvent {
            r#type: EventType::Complete,
            customer: 1,
            course: None,
            price: None,
        };

        assert_eq!(manager.handle_event(create).await.unwrap(), None);
        assert_eq!(manager.handle_event(add).await.unwrap(), None);

        let receipt = manager.handle_event(complete).await.unwrap().unwrap();
        assert_eq!(receipt.total, dec!(30));
    }

    #[tokio::test]
    async fn test_add_event_missing_fields_is_rejected() {
        let mut manager = manager_with(InMemoryCourseApi::new());
        manager.create_purchase(1);

        let add = CheckoutEvent {
            r#type: EventType::Add,
            customer: 1,
            course: Some("rust-101".to_string()),
            price: None,
        };
        let result = manager.handle_event(add).await;
        assert!(matches!(result, Err(CheckoutError::ValidationError(_))));
    }
}
