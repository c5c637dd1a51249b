//! storefront server library entry.
//!
//! This crate wires the config layer, in-memory store, session auth,
//! service layer, and REST routes into a cohesive backend. It is intended
//! to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod auth;
pub mod config;
pub mod http;
pub mod mailer;
pub mod payment;
pub mod router;
pub mod services;
pub mod store;
