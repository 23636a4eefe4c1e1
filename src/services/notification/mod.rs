pub mod dispatcher;
pub mod mailer;
pub mod types;

pub use dispatcher::*;
pub use mailer::*;
pub use types::*;
