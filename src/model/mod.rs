//! Serde models for the payloads exchanged with the HR backend.
//!
//! Entities are owned by the backend; these are transient view copies and request bodies.

pub mod api;
pub mod auth;
pub mod department;
pub mod employee;
pub mod stats;
