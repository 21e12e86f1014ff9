//! Mail relay dispatcher
//!
//! Posts `{from, to, subject, html}` as JSON to the configured relay. A
//! non-2xx answer or a transport error is a failed dispatch; nothing is
//! retried.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument, warn};

use gym_core::{DomainError, OutboundEmail, ReminderDispatcher};

const RELAY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Sends reminders through an HTTP mail relay
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
    from: String,
}

impl HttpMailer {
    pub fn new(url: String, token: Option<String>, from: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(RELAY_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client for mail relay");
                reqwest::Client::new()
            });
        Self {
            client,
            url,
            token,
            from,
        }
    }
}

impl std::fmt::Debug for HttpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMailer")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("from", &self.from)
            .finish()
    }
}

#[async_trait]
impl ReminderDispatcher for HttpMailer {
    #[instrument(skip(self, email), fields(to = %email.to))]
    async fn dispatch(&self, email: &OutboundEmail) -> Result<(), DomainError> {
        let body = RelayMessage {
            from: &self.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::DispatchError(e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| DomainError::DispatchError(e.to_string()))?;

        info!("Payment reminder handed to mail relay");
        Ok(())
    }
}
