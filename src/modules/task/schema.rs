use serde::Deserialize;
use validator::Validate;

use super::model::TaskStatus;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 500, message = "description must be 1-500 characters"))]
    pub description: String,
    // negative offsets produce an already-overdue task
    #[validate(range(min = -3650, max = 3650, message = "days_to_execution out of range"))]
    pub days_to_execution: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 500, message = "description must be 1-500 characters"))]
    pub description: Option<String>,
}

// Optional filters for GET /tasks
#[derive(Debug, Default, Deserialize)]
pub struct TaskFilter {
    pub complete: Option<bool>,
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Deserialize)]
pub struct TaskSearch {
    #[serde(default)]
    pub description: String,
}
