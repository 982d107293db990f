mod common;

#[cfg(test)]
pub mod catalog_tests {
    use pretty_assertions::assert_eq;

    use super::common::*;

    use paxora::catalog::Catalog;
    use paxora::common::CatalogError;
    use paxora::models::*;

    #[test]
    fn test_global_catalog_loads_embedded_fixtures() {
        let catalog = Catalog::global();
        assert_eq!(catalog.courses().len(), 6);
        assert_eq!(catalog.lessons().len(), 13);
    }

    #[test]
    fn test_global_catalog_is_parsed_once() {
        assert!(std::ptr::eq(Catalog::global(), Catalog::global()));
    }

    #[test]
    fn test_course_lookup_success() {
        let course = Catalog::global().course("1").expect("course 1 exists");
        assert_eq!(course.title, "Complete Web Development Bootcamp");
        assert_eq!(course.level, Level::Beginner);
        assert_eq!(course.enrolled_progress(), Some(65));
    }

    #[test]
    fn test_course_lookup_unknown_id_is_none() {
        assert!(Catalog::global().course("does-not-exist").is_none());
        assert!(Catalog::global().course("").is_none());
    }

    #[test]
    fn test_lesson_lookup_unknown_id_is_none() {
        assert!(Catalog::global().lesson("0").is_none());
    }

    #[test]
    fn test_lessons_of_sorts_by_order() {
        let catalog = Catalog::global();
        assert_eq!(lesson_ids(catalog.lessons_of("1")), vec!["101", "102", "103", "104"]);
    }

    #[test]
    fn test_lessons_of_keeps_fixture_order_on_ties() {
        let catalog = Catalog::global();
        assert_eq!(lesson_ids(catalog.lessons_of("2")), vec!["201", "202", "203"]);
    }

    #[test]
    fn test_lessons_of_course_without_lessons_is_empty() {
        assert!(Catalog::global().lessons_of("6").is_empty());
        assert!(Catalog::global().lessons_of("unknown").is_empty());
    }

    #[test]
    fn test_dangling_lesson_resolves_without_its_course() {
        let catalog = Catalog::global();
        let lesson = catalog.lesson("999").expect("orphan lesson exists");
        assert!(catalog.course(&lesson.course_id).is_none());
        assert_eq!(lesson_ids(catalog.lessons_of("99")), vec!["999"]);
    }

    #[test]
    fn test_unknown_resource_type_maps_to_other() {
        let lesson = Catalog::global().lesson("202").expect("lesson 202 exists");
        assert_eq!(lesson.resources[0].kind, ResourceKind::Other);
    }

    #[test]
    fn test_enrolled_courses_selection() {
        assert_eq!(course_ids(Catalog::global().enrolled_courses()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_continue_courses_excludes_finished_and_unstarted() {
        assert_eq!(course_ids(Catalog::global().continue_courses()), vec!["1", "2"]);
    }

    #[test]
    fn test_recommended_courses_are_not_enrolled() {
        assert_eq!(course_ids(Catalog::global().recommended_courses()), vec!["4", "5", "6"]);
    }

    #[test]
    fn test_instructor_courses_are_the_first_three() {
        assert_eq!(course_ids(Catalog::global().instructor_courses()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let catalog = small_catalog();
        let course = catalog.course("c2").expect("c2 exists");
        assert!(!course.enrolled);
        assert_eq!(course.progress, None);
        assert!(course.tags.is_empty());

        let lesson = catalog.lesson("l3").expect("l3 exists");
        assert!(!lesson.completed);
        assert!(lesson.resources.is_empty());
        assert_eq!(lesson.transcript, "");
    }

    #[test]
    fn test_progress_of_unenrolled_course_is_ignored() {
        let mut course = small_catalog().course("c2").cloned().expect("c2 exists");
        course.progress = Some(50);
        assert_eq!(course.enrolled_progress(), None);
        assert!(!course.is_in_progress());
    }

    #[test]
    fn test_from_json_reports_bad_collection() {
        let err = Catalog::from_json("[]", "{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Fixture { collection: "lessons", .. }));
        assert!(err.to_string().starts_with("Failed to parse lessons fixtures"));
    }

    #[test]
    fn test_from_json_rejects_unknown_level() {
        let courses = r#"[{
            "id": "x", "title": "", "description": "", "thumbnail": "",
            "instructor": { "id": "", "name": "", "avatar": "", "bio": "" },
            "duration": "", "studentsCount": 0, "rating": 0, "price": 0,
            "category": "", "level": "Expert", "lessonsCount": 0
        }]"#;
        let err = Catalog::from_json(courses, "[]").unwrap_err();
        assert!(matches!(err, CatalogError::Fixture { collection: "courses", .. }));
    }
}
