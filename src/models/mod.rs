pub use course::*;
pub use course_draft::*;
pub use lesson::*;
pub use level::*;
pub use user::*;

mod course;
mod course_draft;
mod lesson;
mod level;
mod user;
