pub mod guard;
pub mod hashing;
pub mod jwt;
pub mod metrics;
pub mod notification;
pub mod rate_limit;
pub mod scheduler;
pub mod security;
