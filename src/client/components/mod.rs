pub mod auth;
pub mod employee_modal;
pub mod employee_table;
pub mod page;
pub mod stat_card;

pub use employee_modal::EmployeeModal;
pub use employee_table::EmployeeTable;
pub use page::Page;
pub use stat_card::StatCard;
