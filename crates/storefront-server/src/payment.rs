//! Payment gateway seam.
//!
//! The server never keeps a full card number: the register call hands the
//! details straight to the gateway and stores only the masked tail plus the
//! gateway's customer/card tokens. Provider semantics are not a contract;
//! the sandbox implementation stands in for the real processor.

use async_trait::async_trait;
use uuid::Uuid;

use storefront_core::error::{Result, StorefrontError};

/// Card details as presented by the client. Passed through, never stored.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvc: String,
    pub email: String,
}

/// Gateway-side handle for a registered card.
#[derive(Debug, Clone)]
pub struct GatewayCard {
    pub customer_id: String,
    pub card_id: String,
    pub last4: String,
}

/// Receipt for a completed charge.
#[derive(Debug, Clone)]
pub struct ChargeReceipt {
    pub receipt_id: String,
    pub amount_minor: i64,
    pub currency: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Tokenize a card and attach it to a (possibly new) customer.
    async fn register_card(&self, details: CardDetails) -> Result<GatewayCard>;

    /// Charge a registered customer. `amount_minor` is in minor units.
    async fn charge(
        &self,
        customer_id: &str,
        amount_minor: i64,
        currency: &str,
        description: &str,
    ) -> Result<ChargeReceipt>;

    /// Detach a card from its customer.
    async fn delete_card(&self, customer_id: &str, card_id: &str) -> Result<()>;
}

/// In-process stand-in for the external processor. Accepts any digits-only
/// number of plausible length with an unexpired date.
#[derive(Default)]
pub struct SandboxGateway;

impl SandboxGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn register_card(&self, details: CardDetails) -> Result<GatewayCard> {
        let digits = details.number.trim();
        if !(12..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorefrontError::Payment("invalid card number".into()));
        }
        if !(1..=12).contains(&details.exp_month) {
            return Err(StorefrontError::Payment("invalid expiry month".into()));
        }
        if details.cvc.len() < 3 || !details.cvc.chars().all(|c| c.is_ascii_digit()) {
            return Err(StorefrontError::Payment("invalid cvc".into()));
        }

        let last4 = digits[digits.len() - 4..].to_string();
        Ok(GatewayCard {
            customer_id: format!("cus_{}", Uuid::new_v4().simple()),
            card_id: format!("card_{}", Uuid::new_v4().simple()),
            last4,
        })
    }

    async fn charge(
        &self,
        customer_id: &str,
        amount_minor: i64,
        currency: &str,
        description: &str,
    ) -> Result<ChargeReceipt> {
        if amount_minor <= 0 {
            return Err(StorefrontError::Payment(
                "charge amount must be positive".into(),
            ));
        }
        tracing::info!(%customer_id, amount_minor, %currency, %description, "sandbox charge");
        Ok(ChargeReceipt {
            receipt_id: format!("ch_{}", Uuid::new_v4().simple()),
            amount_minor,
            currency: currency.to_string(),
        })
    }

    async fn delete_card(&self, customer_id: &str, card_id: &str) -> Result<()> {
        tracing::info!(%customer_id, %card_id, "sandbox card detached");
        Ok(())
    }
}
