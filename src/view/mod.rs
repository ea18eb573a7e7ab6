//! Controllers behind the resource views.
//!
//! Views keep only local display state. After any create, update or delete they re-read
//! the whole collection from the backend instead of patching what they hold; the re-read
//! is awaited as part of the action and reported through [`ViewPhase`] so a page can tell
//! "saving" from "refreshing".

pub mod dashboard;
pub mod department;
pub mod employee;
pub mod format;
pub mod prompt;

pub use dashboard::{Dashboard, DashboardData};
pub use department::{DepartmentForm, DepartmentRoster};
pub use employee::{EmployeeForm, EmployeeRoster};
pub use prompt::{HeadlessPrompt, Prompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    /// First load of the view's data.
    Loading,
    /// A mutation is in flight.
    Saving,
    /// The mutation succeeded and the collection is being re-read.
    Refreshing,
}

impl ViewPhase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
