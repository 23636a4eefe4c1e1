pub mod controller;
pub mod crud;
pub mod model;
pub mod planner;
pub mod routes;
pub mod schema;

pub use routes::expense_routes;
