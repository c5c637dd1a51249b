//! Shared application state for the storefront server.

use std::sync::Arc;

use chrono::Utc;

use storefront_core::error::Result;
use storefront_core::model::UserAccount;

use crate::auth::{credential_digest, SessionRegistry};
use crate::config::ServerConfig;
use crate::mailer::{LogMailer, Mailer};
use crate::payment::{PaymentGateway, SandboxGateway};
use crate::store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: MemoryStore,
    sessions: SessionRegistry,
    payments: Arc<dyn PaymentGateway>,
    mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Build application state with the default gateway and mailer.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        let mailer = Arc::new(LogMailer::new(cfg.mail.from_email.clone()));
        Self::with_adapters(cfg, Arc::new(SandboxGateway::new()), mailer)
    }

    /// Build with explicit gateway/mailer (used by tests to observe or
    /// fail outbound calls).
    pub fn with_adapters(
        cfg: ServerConfig,
        payments: Arc<dyn PaymentGateway>,
        mailer: Arc<dyn Mailer>,
    ) -> Result<Self> {
        let store = MemoryStore::new();

        // Seed the bootstrap staff account; without it every AdminOnly
        // operation is unreachable on a fresh store.
        let admin = UserAccount {
            id: store.next_id(),
            username: cfg.admin.username.clone(),
            email: cfg.admin.email.clone(),
            credential: credential_digest(&cfg.admin.password),
            staff: true,
            joined_at: Utc::now(),
        };
        let admin = store.create_user(admin)?;
        tracing::info!(admin_id = admin.id, username = %admin.username, "bootstrap admin seeded");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                sessions: SessionRegistry::new(),
                payments,
                mailer,
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &MemoryStore {
        &self.inner.store
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.inner.sessions
    }

    pub fn payments(&self) -> &dyn PaymentGateway {
        self.inner.payments.as_ref()
    }

    pub fn mailer(&self) -> &dyn Mailer {
        self.inner.mailer.as_ref()
    }
}
