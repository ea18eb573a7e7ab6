//! StaffTrack HR administration client.
//!
//! The library holds everything the browser client does that is not rendering: the
//! persisted session, the API gateway with its authorization interceptors, the auth flow,
//! the route guard, and the controllers behind the employee, department and dashboard
//! views. Browser bindings live in [`web`] behind the `web` feature so the rest of the
//! crate builds and tests on native targets.

pub mod config;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod model;
pub mod service;
pub mod session;
pub mod view;

#[cfg(feature = "web")]
pub mod web;

pub use config::Config;
pub use error::Error;
pub use gateway::ApiGateway;
pub use session::{Session, SessionStore};
