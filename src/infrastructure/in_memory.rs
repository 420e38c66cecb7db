use crate::domain::ports::{Confirmation, CourseApi};
use crate::domain::purchase::Purchase;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A stub of the course purchase API that records submissions in memory.
///
/// Uses `Arc<RwLock<Vec<Purchase>>>` for shared concurrent access, so tests
/// can hold a clone and inspect what the application submitted. Confirmation
/// ids are sequential, starting at 1.
#[derive(Default, Clone)]
pub struct InMemoryCourseApi {
    submitted: Arc<RwLock<Vec<Purchase>>>,
    reject: bool,
}

impl InMemoryCourseApi {
    /// Creates a stub that accepts every submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stub that rejects every submission, for exercising the
    /// failure branch of checkout completion.
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Snapshot of every purchase submitted so far.
    pub async fn submitted(&self) -> Vec<Purchase> {
        self.submitted.read().await.clone()
    }

    /// The JSON payloads a real API would have received, in submission order.
    pub async fn payloads(&self) -> Result<Vec<String>> {
        let submitted = self.submitted.read().await;
        submitted
            .iter()
            .map(|purchase| {
                serde_json::to_string(purchase).map_err(|e| {
                    CheckoutError::SubmissionError(format!("Serialization error: {e}"))
                })
            })
            .collect()
    }
}

#[async_trait]
impl CourseApi for InMemoryCourseApi {
    async fn submit_purchase(&self, purchase: &Purchase) -> Result<Confirmation> {
        if self.reject {
            return Err(CheckoutError::SubmissionError(
                "purchase API rejected the request".to_string(),
            ));
        }

        let mut submitted = self.submitted.write().await;
        submitted.push(purchase.clone());
        Ok(Confirmation {
            order: submitted.len() as u64,
        })
    }
}
