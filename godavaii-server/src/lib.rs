pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod render;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
