//! Reusable UI components for the Paxora frontend

mod alert;
mod button;
mod course_card;
mod feature_card;
mod footer;
mod input;
mod language_switcher;
mod loading;
mod nav;
mod progress_bar;
mod stat_card;

pub use alert::{Alert, AlertVariant, ErrorAlert};
pub use button::{Button, ButtonVariant};
pub use course_card::CourseCard;
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use input::{EmailInput, PasswordInput, TextArea, TextInput};
pub use language_switcher::LanguageSwitcher;
pub use loading::Loading;
pub use nav::Navbar;
pub use progress_bar::{ProgressBar, ProgressColor, ProgressSize};
pub use stat_card::StatCard;
