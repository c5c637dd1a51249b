//! Outbound mail seam for notification delivery.

use async_trait::async_trait;

use storefront_core::error::Result;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Default mailer: structured log lines instead of SMTP. Delivery is an
/// external concern; the notification status machine is what's under test.
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        tracing::info!(from = %self.from, %to, %subject, body_len = body.len(), "mail dispatched");
        Ok(())
    }
}
