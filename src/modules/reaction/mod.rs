pub mod controller;
pub mod crud;
pub mod model;
pub mod routes;
pub mod schema;

pub use model::{ReactionKind, ReactionTarget, ReactionsSummary};
pub use routes::reaction_routes;
