use super::{Catalog, progress};
use crate::models::Lesson;
use crate::routing::AppRoute;

/// The lessons of one course in play order.
///
/// Neighbours are found by position in the sorted list, so gaps in `order`
/// values do not matter.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonSequence<'a> {
    course_id: String,
    lessons: Vec<&'a Lesson>,
}

impl<'a> LessonSequence<'a> {
    pub fn for_course(catalog: &'a Catalog, course_id: &str) -> Self {
        Self {
            course_id: course_id.to_string(),
            lessons: catalog.lessons_of(course_id),
        }
    }

    /// The sequence the given lesson belongs to.
    pub fn containing(catalog: &'a Catalog, lesson: &Lesson) -> Self {
        Self::for_course(catalog, &lesson.course_id)
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn lessons(&self) -> &[&'a Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Where "start course" leads.
    pub fn first(&self) -> Option<&'a Lesson> {
        self.lessons.first().copied()
    }

    pub fn position(&self, lesson_id: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == lesson_id)
    }

    pub fn next(&self, lesson_id: &str) -> Option<&'a Lesson> {
        let index = self.position(lesson_id)?;
        self.lessons.get(index + 1).copied()
    }

    pub fn previous(&self, lesson_id: &str) -> Option<&'a Lesson> {
        let index = self.position(lesson_id)?;
        index
            .checked_sub(1)
            .and_then(|i| self.lessons.get(i))
            .copied()
    }

    pub fn completed_count(&self) -> usize {
        self.lessons.iter().filter(|l| l.completed).count()
    }

    pub fn progress(&self) -> u8 {
        progress::percent(self.completed_count(), self.len())
    }

    /// Where "mark as completed" navigates: the next lesson, or back to the
    /// course page after the last one. Nothing is recorded.
    pub fn completion_target(&self, lesson_id: &str) -> AppRoute {
        match self.next(lesson_id) {
            Some(next) => AppRoute::Lesson(next.id.clone()),
            None => AppRoute::Course(self.course_id.clone()),
        }
    }
}
