pub mod dashboard;
pub mod departments;
pub mod employees;

pub use dashboard::Dashboard;
pub use departments::Departments;
pub use employees::Employees;
