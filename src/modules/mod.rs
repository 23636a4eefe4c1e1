pub mod auth;
pub mod blog;
pub mod calculation;
pub mod comment;
pub mod common;
pub mod expense;
pub mod identity;
pub mod market;
pub mod metrics;
pub mod priority;
pub mod profile;
pub mod reaction;
pub mod share;
pub mod task;
