pub mod app;
pub mod components;
pub mod context;
pub mod router;
pub mod routes;

pub use app::App;
