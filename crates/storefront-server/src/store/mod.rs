//! Persistence seam.
//!
//! The store exposes the operations the core needs (`find_rating`,
//! `ratings_for_product`, entity CRUD) and owns the atomic unit around
//! rating writes. Schema and durability are explicitly not a contract;
//! the in-memory implementation is the only one shipped.

pub mod memory;

pub use memory::MemoryStore;
