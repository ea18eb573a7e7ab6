pub mod layout;
pub mod sidebar;

pub use layout::AuthLayout;
pub use sidebar::Sidebar;
