pub mod controller;
pub mod crud;
pub mod model;
pub mod operation;
pub mod routes;
pub mod schema;

pub use routes::calculation_routes;
