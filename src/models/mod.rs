pub mod task;
pub mod user;

pub use task::{NewTask, TaskInput, TaskRecord, TaskView};
pub use user::User;
