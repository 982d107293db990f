#[cfg(test)]
pub mod draft_tests {
    use pretty_assertions::assert_eq;

    use paxora::common::DraftError;
    use paxora::models::*;

    fn complete_draft() -> CourseDraft {
        CourseDraft {
            title: "  Intro to Rust ".to_string(),
            description: "Learn the basics".to_string(),
            category: COURSE_CATEGORIES[0].to_string(),
            level: Level::Intermediate,
            price: "49.99".to_string(),
        }
    }

    #[test]
    fn test_validate_success_trims_values() {
        let valid = complete_draft().validate().expect("draft is complete");
        assert_eq!(
            valid,
            ValidCourseDraft {
                title: "Intro to Rust".to_string(),
                description: "Learn the basics".to_string(),
                category: "Web Development".to_string(),
                level: Level::Intermediate,
                price: 49.99,
            }
        );
    }

    #[test]
    fn test_validate_accepts_free_course() {
        let draft = CourseDraft {
            price: "0".to_string(),
            ..complete_draft()
        };
        assert_eq!(draft.validate().map(|v| v.price), Ok(0.0));
    }

    #[test]
    fn test_validate_empty_draft_reports_title_first() {
        assert_eq!(CourseDraft::default().validate(), Err(DraftError::MissingField("title")));
    }

    #[test]
    fn test_validate_blank_fields() {
        let draft = CourseDraft {
            description: "   ".to_string(),
            ..complete_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingField("description")));

        let draft = CourseDraft {
            category: String::new(),
            ..complete_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingField("category")));

        let draft = CourseDraft {
            price: String::new(),
            ..complete_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingField("price")));
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        for raw in ["abc", "-1", "NaN", "inf"] {
            let draft = CourseDraft {
                price: raw.to_string(),
                ..complete_draft()
            };
            assert_eq!(draft.validate(), Err(DraftError::InvalidPrice(raw.to_string())));
        }
    }

    #[test]
    fn test_draft_error_messages() {
        assert_eq!(DraftError::MissingField("title").to_string(), "title is required");
        assert_eq!(DraftError::InvalidPrice("x".to_string()).to_string(), "Invalid price: \"x\"");
    }

    #[test]
    fn test_level_parses_case_insensitively() {
        assert_eq!(" advanced ".parse::<Level>(), Ok(Level::Advanced));
        assert!("expert".parse::<Level>().is_err());
        assert!(Level::Beginner == "BEGINNER");
    }
}
