use super::progress;
use crate::models::Course;

/// Figures for the learner dashboard's stat cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LearnerSummary {
    pub enrolled: usize,
    pub average_progress: u8,
}

impl LearnerSummary {
    /// Courses without a progress value count as 0%.
    pub fn from_enrolled(courses: &[&Course]) -> Self {
        Self {
            enrolled: courses.len(),
            average_progress: progress::average(
                courses.iter().map(|c| c.progress.unwrap_or(0)),
            ),
        }
    }
}

/// Figures for the instructor dashboard's stat cards.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InstructorSummary {
    pub total_students: u64,
    pub gross_revenue: f64,
    pub active_courses: usize,
    pub average_rating: f32,
}

impl InstructorSummary {
    pub fn from_courses(courses: &[&Course]) -> Self {
        let total_students = courses.iter().map(|c| u64::from(c.students_count)).sum();
        let gross_revenue = courses
            .iter()
            .map(|c| c.price * f64::from(c.students_count))
            .sum();
        let average_rating = if courses.is_empty() {
            0.0
        } else {
            courses.iter().map(|c| c.rating).sum::<f32>() / courses.len() as f32
        };

        Self {
            total_students,
            gross_revenue,
            active_courses: courses.len(),
            average_rating,
        }
    }
}
