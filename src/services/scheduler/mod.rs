pub mod engine;
pub mod jobs;

pub use engine::{RunReport, TaskScheduler};
pub use jobs::{expire_overdue_tasks, mark_accomplished_tasks};
