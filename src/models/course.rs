use serde::{Deserialize, Serialize};

use super::Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
}

/// A catalog entry as listed on the dashboard and the course page.
///
/// `progress` is only meaningful for enrolled courses; nothing enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub instructor: Instructor,
    pub duration: String,
    pub students_count: u32,
    pub rating: f32,
    pub price: f64,
    pub category: String,
    pub level: Level,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub enrolled: bool,
    pub lessons_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Course {
    /// Fixture progress of an enrolled course, `None` otherwise.
    pub fn enrolled_progress(&self) -> Option<u8> {
        if self.enrolled { self.progress } else { None }
    }

    /// Enrolled and somewhere between the first and the last lesson.
    pub fn is_in_progress(&self) -> bool {
        matches!(self.enrolled_progress(), Some(p) if p > 0 && p < 100)
    }
}
