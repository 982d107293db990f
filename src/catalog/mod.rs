//! Read-only course and lesson fixtures and the lookups the pages need.

mod filter;
pub mod progress;
mod sequence;
mod summary;

pub use filter::CourseFilter;
pub use sequence::LessonSequence;
pub use summary::{InstructorSummary, LearnerSummary};

use std::sync::OnceLock;

use crate::common::CatalogError;
use crate::models::{Course, Lesson};

const COURSES_JSON: &str = include_str!("../../fixtures/courses.json");
const LESSONS_JSON: &str = include_str!("../../fixtures/lessons.json");

/// Number of fixture courses shown as the instructor's own.
const INSTRUCTOR_COURSE_COUNT: usize = 3;

static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>, lessons: Vec<Lesson>) -> Self {
        Self { courses, lessons }
    }

    pub fn from_json(courses: &str, lessons: &str) -> Result<Self, CatalogError> {
        let courses = serde_json::from_str(courses).map_err(|source| CatalogError::Fixture {
            collection: "courses",
            source,
        })?;
        let lessons = serde_json::from_str(lessons).map_err(|source| CatalogError::Fixture {
            collection: "lessons",
            source,
        })?;

        Ok(Self::new(courses, lessons))
    }

    /// The fixtures compiled into the crate, parsed on first use.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            let catalog = Self::from_json(COURSES_JSON, LESSONS_JSON)
                .expect("Embedded fixtures must be valid JSON");
            log::debug!(
                "loaded {} courses and {} lessons",
                catalog.courses.len(),
                catalog.lessons.len()
            );
            catalog
        })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        let found = self.courses.iter().find(|c| c.id == id);
        if found.is_none() {
            log::debug!("no course with id {id:?}");
        }
        found
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        let found = self.lessons.iter().find(|l| l.id == id);
        if found.is_none() {
            log::debug!("no lesson with id {id:?}");
        }
        found
    }

    /// Lessons of a course in ascending `order`. Equal orders keep their
    /// fixture order. An unknown course id gives an empty list.
    pub fn lessons_of(&self, course_id: &str) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .collect();
        lessons.sort_by_key(|l| l.order);
        lessons
    }

    /// Progress shown on the course page: completed lessons over all
    /// lessons of the course, `None` unless enrolled. The fixture's stored
    /// `progress` is not used here.
    pub fn course_progress(&self, course: &Course) -> Option<u8> {
        course
            .enrolled
            .then(|| LessonSequence::for_course(self, &course.id).progress())
    }

    pub fn enrolled_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.enrolled).collect()
    }

    /// Enrolled courses that are started but not finished.
    pub fn continue_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.is_in_progress()).collect()
    }

    pub fn recommended_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| !c.enrolled).collect()
    }

    pub fn instructor_courses(&self) -> Vec<&Course> {
        self.courses.iter().take(INSTRUCTOR_COURSE_COUNT).collect()
    }
}
