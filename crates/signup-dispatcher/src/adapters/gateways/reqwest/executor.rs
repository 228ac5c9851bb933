use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Url};
use tokio_util::sync::CancellationToken;

use crate::config::ClientSettings;
use crate::entities::{RequestOutcome, SignupRequest};
use crate::error::DispatchError;
use crate::use_cases::ports::RequestExecutor;

/// Reqwest-based request executor posting JSON signups to a fixed endpoint
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
    endpoint: Url,
}

impl ReqwestExecutor {
    pub fn new(settings: &ClientSettings) -> Result<Self, DispatchError> {
        let mut builder = Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DispatchError::ClientError(e.to_string()))?;

        Self::with_client(client, &settings.endpoint)
    }

    /// Reuse an existing client
    pub fn with_client(client: Client, endpoint: &str) -> Result<Self, DispatchError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            DispatchError::ConfigurationError(format!("invalid endpoint `{endpoint}`: {e}"))
        })?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn exchange(&self, request: &SignupRequest) -> Result<RequestOutcome, reqwest::Error> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            // Only confirms the body is readable; the value itself is not kept.
            if let Err(e) = response.json::<serde_json::Value>().await {
                tracing::debug!(error = %e, "success response body is not JSON");
            }
            return Ok(RequestOutcome::success(status.as_u16()));
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(error = %e, %status, "failed to read error response body");
                String::new()
            }
        };
        let message = if text.is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            text
        };
        Ok(RequestOutcome::rejected(status.as_u16(), message))
    }
}

#[async_trait]
impl RequestExecutor for ReqwestExecutor {
    async fn send(&self, request: &SignupRequest, cancel: CancellationToken) -> RequestOutcome {
        // Losing the race drops the exchange future, which aborts the connection.
        tokio::select! {
            biased;
            _ = cancel.cancelled() => RequestOutcome::cancelled(),
            result = self.exchange(request) => match result {
                Ok(outcome) => outcome,
                Err(e) => RequestOutcome::transport(describe(&e)),
            },
        }
    }
}

/// Error text including its sources, e.g. `error sending request: connection refused`
fn describe(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
