use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::entities::{RequestOutcome, SignupRequest};

/// Trait for transports able to submit one signup request
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Submit `request` once and classify the result.
    ///
    /// Resolves with [`RequestOutcome::cancelled`] as soon as `cancel` fires while
    /// the request is in flight. Every failure is mapped to an outcome; this
    /// method never errors.
    async fn send(&self, request: &SignupRequest, cancel: CancellationToken) -> RequestOutcome;
}

#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for std::sync::Arc<E> {
    async fn send(&self, request: &SignupRequest, cancel: CancellationToken) -> RequestOutcome {
        (**self).send(request, cancel).await
    }
}
