use crate::models::{Course, Level};

/// Dashboard search box plus level chips.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CourseFilter {
    pub term: String,
    pub level: Option<Level>,
}

impl CourseFilter {
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.level.is_none()
    }

    pub fn matches(&self, course: &Course) -> bool {
        if self.level.is_some_and(|level| level != course.level) {
            return false;
        }

        let term = self.term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        let contains = |text: &str| text.to_lowercase().contains(&term);
        contains(&course.title)
            || contains(&course.description)
            || contains(&course.category)
            || contains(&course.instructor.name)
            || course.tags.iter().any(|tag| contains(tag))
    }

    pub fn apply<'a>(&self, courses: Vec<&'a Course>) -> Vec<&'a Course> {
        courses.into_iter().filter(|c| self.matches(c)).collect()
    }
}
