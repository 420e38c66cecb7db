use super::purchase::Purchase;
use crate::error::Result;
use async_trait::async_trait;

/// Acknowledgement returned by the course purchase API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub order: u64,
}

/// Outbound port for submitting a finalized purchase.
///
/// In a real deployment this would be a network call; the crate only ships
/// in-memory stubs (see `infrastructure::in_memory`).
#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn submit_purchase(&self, purchase: &Purchase) -> Result<Confirmation>;
}

/// Outbound port for notifying a customer, independent of the channel.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send_notification(&self, customer: u32, message: &str) -> Result<()>;
}

pub type CourseApiBox = Box<dyn CourseApi>;
pub type NotificationSenderBox = Box<dyn NotificationSender>;
pub type NotificationSenderFactory = Box<dyn Fn() -> NotificationSenderBox + Send + Sync>;
