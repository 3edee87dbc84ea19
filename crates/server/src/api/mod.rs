pub mod exhibitors;
pub mod handlers;
pub mod middleware;
pub mod orders;
pub mod routes;
pub mod stats;

pub use routes::create_router;
