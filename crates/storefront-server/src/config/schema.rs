use serde::Deserialize;
use storefront_core::error::{Result, StorefrontError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: HttpSection,

    #[serde(default)]
    pub payments: PaymentsSection,

    #[serde(default)]
    pub mail: MailSection,

    /// Staff account seeded at boot. Without it every AdminOnly operation
    /// would be unreachable on a fresh store.
    pub admin: BootstrapAdmin,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StorefrontError::Validation(
                "config version must be 1".into(),
            ));
        }

        self.server.validate()?;
        self.payments.validate()?;
        self.mail.validate()?;
        self.admin.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl HttpSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(StorefrontError::Validation(
                "server.listen must be a valid socket address".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentsSection {
    /// ISO 4217 currency code used for charges.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PaymentsSection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl PaymentsSection {
    pub fn validate(&self) -> Result<()> {
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(StorefrontError::Validation(
                "payments.currency must be a lowercase 3-letter code".into(),
            ));
        }
        Ok(())
    }
}

fn default_currency() -> String {
    "usd".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailSection {
    #[serde(default = "default_from_email")]
    pub from_email: String,
}

impl Default for MailSection {
    fn default() -> Self {
        Self {
            from_email: default_from_email(),
        }
    }
}

impl MailSection {
    pub fn validate(&self) -> Result<()> {
        if !self.from_email.contains('@') {
            return Err(StorefrontError::Validation(
                "mail.from_email must be an email address".into(),
            ));
        }
        Ok(())
    }
}

fn default_from_email() -> String {
    "noreply@storefront.local".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl BootstrapAdmin {
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(StorefrontError::Validation(
                "admin.username, admin.email and admin.password must not be empty".into(),
            ));
        }
        if !self.email.contains('@') {
            return Err(StorefrontError::Validation(
                "admin.email must be an email address".into(),
            ));
        }
        Ok(())
    }
}
