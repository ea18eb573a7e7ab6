//! Service layer over the API gateway.
//!
//! Each service borrows the gateway and maps one backend resource onto typed calls. The
//! auth service additionally owns the rules for creating and destroying the session.

pub mod auth;
pub mod department;
pub mod employee;
pub mod stats;

pub use auth::AuthService;
pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use stats::{ChartKind, StatsService};
