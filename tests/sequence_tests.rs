mod common;

#[cfg(test)]
pub mod sequence_tests {
    use pretty_assertions::assert_eq;

    use super::common::*;

    use paxora::catalog::{Catalog, LessonSequence};
    use paxora::routing::AppRoute;

    #[test]
    fn test_progress_from_completed_lessons() {
        let sequence = LessonSequence::for_course(Catalog::global(), "1");
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.completed_count(), 2);
        assert_eq!(sequence.progress(), 50);
    }

    #[test]
    fn test_fully_completed_course_is_100() {
        assert_eq!(LessonSequence::for_course(Catalog::global(), "3").progress(), 100);
    }

    #[test]
    fn test_empty_course_has_zero_progress_and_no_first_lesson() {
        let sequence = LessonSequence::for_course(Catalog::global(), "6");
        assert!(sequence.is_empty());
        assert_eq!(sequence.progress(), 0);
        assert!(sequence.first().is_none());
    }

    #[test]
    fn test_first_lesson_is_lowest_order() {
        let sequence = LessonSequence::for_course(Catalog::global(), "1");
        assert_eq!(sequence.first().map(|l| l.id.as_str()), Some("101"));
    }

    #[test]
    fn test_neighbours_in_the_middle() {
        let sequence = LessonSequence::for_course(Catalog::global(), "1");
        assert_eq!(sequence.previous("102").map(|l| l.id.as_str()), Some("101"));
        assert_eq!(sequence.next("102").map(|l| l.id.as_str()), Some("103"));
    }

    #[test]
    fn test_no_neighbours_past_the_ends() {
        let sequence = LessonSequence::for_course(Catalog::global(), "1");
        assert!(sequence.previous("101").is_none());
        assert!(sequence.next("104").is_none());
    }

    #[test]
    fn test_unknown_lesson_has_no_position() {
        let sequence = LessonSequence::for_course(Catalog::global(), "1");
        assert_eq!(sequence.position("201"), None);
        assert!(sequence.next("201").is_none());
        assert!(sequence.previous("201").is_none());
    }

    #[test]
    fn test_position_ignores_gaps_in_order() {
        let catalog = small_catalog();
        let sequence = LessonSequence::for_course(&catalog, "c1");
        assert_eq!(lesson_ids(sequence.lessons().iter().copied()), vec!["l1", "l2", "l3"]);
        assert_eq!(sequence.position("l3"), Some(2));
        assert_eq!(sequence.next("l1").map(|l| l.id.as_str()), Some("l2"));
    }

    #[test]
    fn test_containing_finds_the_owning_course() {
        let catalog = Catalog::global();
        let lesson = catalog.lesson("202").expect("lesson 202 exists");
        let sequence = LessonSequence::containing(catalog, lesson);
        assert_eq!(sequence.course_id(), "2");
        assert_eq!(sequence.position("202"), Some(1));
    }

    #[test]
    fn test_completion_target_moves_to_next_lesson() {
        let sequence = LessonSequence::for_course(Catalog::global(), "1");
        assert_eq!(sequence.completion_target("103"), AppRoute::Lesson("104".to_string()));
    }

    #[test]
    fn test_completion_target_after_last_lesson_is_course_page() {
        let sequence = LessonSequence::for_course(Catalog::global(), "1");
        assert_eq!(sequence.completion_target("104"), AppRoute::Course("1".to_string()));
    }

    #[test]
    fn test_completion_of_dangling_lesson_points_at_missing_course() {
        let catalog = Catalog::global();
        let lesson = catalog.lesson("999").expect("orphan lesson exists");
        let sequence = LessonSequence::containing(catalog, lesson);
        assert_eq!(sequence.completion_target("999").href(), "/course/99");
    }

    #[test]
    fn test_course_page_progress_comes_from_lessons() {
        let catalog = Catalog::global();
        let course = catalog.course("1").expect("course 1 exists");
        assert_eq!(course.enrolled_progress(), Some(65));
        assert_eq!(catalog.course_progress(course), Some(50));
    }

    #[test]
    fn test_course_page_progress_of_partial_and_empty_courses() {
        let catalog = small_catalog();
        let c1 = catalog.course("c1").expect("c1 exists");
        assert_eq!(catalog.course_progress(c1), Some(33));

        let mut empty = catalog.course("c2").cloned().expect("c2 exists");
        empty.enrolled = true;
        assert_eq!(catalog.course_progress(&empty), Some(0));
    }

    #[test]
    fn test_course_page_progress_hidden_when_not_enrolled() {
        let catalog = Catalog::global();
        let course = catalog.course("5").expect("course 5 exists");
        assert_eq!(catalog.course_progress(course), None);
    }

    #[test]
    fn test_lesson_resolves_its_course_title() {
        let catalog = Catalog::global();
        let lesson = catalog.lesson("102").expect("lesson 102 exists");
        let title = catalog.course(&lesson.course_id).map(|c| c.title.as_str());
        assert_eq!(title, Some("Complete Web Development Bootcamp"));

        let orphan = catalog.lesson("999").expect("orphan lesson exists");
        assert_eq!(catalog.course(&orphan.course_id).map(|c| c.title.as_str()), None);
    }
}
