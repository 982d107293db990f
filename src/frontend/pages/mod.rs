//! Routed pages of the learning hub

mod auth;
mod course_detail;
mod dashboard;
mod instructor;
mod landing;
mod lesson_player;

pub use auth::{LoginPage, SignupPage};
pub use course_detail::CourseDetailPage;
pub use dashboard::DashboardPage;
pub use instructor::InstructorPage;
pub use landing::LandingPage;
pub use lesson_player::LessonPlayerPage;
