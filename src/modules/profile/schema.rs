use serde::Serialize;

use crate::modules::auth::schema::UserResponse;
use crate::modules::blog::model::BlogView;
use crate::modules::comment::model::CommentView;
use crate::modules::common::Paginated;
use crate::modules::expense::model::Expense;
use crate::modules::priority::model::Priority;
use crate::modules::share::model::Share;
use crate::modules::task::model::Task;

/// Everything the caller owns, each collection paged with the same window.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub blogs: Paginated<BlogView>,
    pub comments: Paginated<CommentView>,
    pub tasks: Paginated<Task>,
    pub shares: Paginated<Share>,
    pub expenses: Paginated<Expense>,
    pub priorities: Paginated<Priority>,
}
