mod common;

#[cfg(test)]
pub mod filter_summary_tests {
    use pretty_assertions::assert_eq;

    use super::common::*;

    use paxora::catalog::{Catalog, CourseFilter, InstructorSummary, LearnerSummary};
    use paxora::models::Level;

    fn filter(term: &str, level: Option<Level>) -> CourseFilter {
        CourseFilter {
            term: term.to_string(),
            level,
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let catalog = Catalog::global();
        let all: Vec<_> = catalog.courses().iter().collect();
        assert!(CourseFilter::default().is_empty());
        assert!(filter("   ", None).is_empty());
        assert_eq!(CourseFilter::default().apply(all.clone()), all);
    }

    #[test]
    fn test_term_matches_title_case_insensitively() {
        let catalog = small_catalog();
        let found = filter("rust FOR", None).apply(catalog.courses().iter().collect());
        assert_eq!(course_ids(found), vec!["c1"]);
    }

    #[test]
    fn test_term_matches_instructor_and_tags() {
        let catalog = small_catalog();
        let courses: Vec<_> = catalog.courses().iter().collect();
        assert_eq!(course_ids(filter("ada", None).apply(courses.clone())), vec!["c2"]);
        assert_eq!(course_ids(filter("systems", None).apply(courses)), vec!["c1"]);
    }

    #[test]
    fn test_level_must_match() {
        let catalog = Catalog::global();
        let courses = catalog.courses().iter().collect();
        assert_eq!(course_ids(filter("", Some(Level::Advanced)).apply(courses)), vec!["5", "6"]);
    }

    #[test]
    fn test_term_and_level_combine() {
        let catalog = Catalog::global();
        let courses: Vec<_> = catalog.courses().iter().collect();
        assert_eq!(
            course_ids(filter("michael", Some(Level::Advanced)).apply(courses.clone())),
            vec!["6"]
        );
        assert!(filter("photography", Some(Level::Beginner)).apply(courses).is_empty());
    }

    #[test]
    fn test_learner_summary_from_fixtures() {
        let summary = LearnerSummary::from_enrolled(&Catalog::global().enrolled_courses());
        assert_eq!(summary, LearnerSummary { enrolled: 3, average_progress: 65 });
    }

    #[test]
    fn test_learner_summary_without_courses() {
        assert_eq!(LearnerSummary::from_enrolled(&[]), LearnerSummary::default());
    }

    #[test]
    fn test_instructor_summary() {
        let catalog = small_catalog();
        let courses: Vec<_> = catalog.courses().iter().collect();
        let summary = InstructorSummary::from_courses(&courses);
        assert_eq!(summary.total_students, 1250);
        assert_eq!(summary.gross_revenue, 10.0 * 1000.0 + 20.5 * 250.0);
        assert_eq!(summary.active_courses, 2);
        assert_eq!(summary.average_rating, 4.0);
    }

    #[test]
    fn test_instructor_summary_without_courses() {
        let summary = InstructorSummary::from_courses(&[]);
        assert_eq!(summary.total_students, 0);
        assert_eq!(summary.active_courses, 0);
        assert_eq!(summary.average_rating, 0.0);
    }
}
