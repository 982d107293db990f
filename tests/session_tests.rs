#[cfg(test)]
pub mod session_tests {
    use pretty_assertions::assert_eq;

    use paxora::models::{MockUser, UserRole};
    use paxora::routing::AppRoute;
    use paxora::session::Session;

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.logged_in);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_public_pages_do_not_sign_in() {
        let mut session = Session::default();
        for path in ["/", "/login", "/signup", "/unknown"] {
            session.observe(path);
        }
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_courses_listing_path_does_not_sign_in() {
        let mut session = Session::default();
        session.observe("/courses");
        assert_eq!(AppRoute::parse("/courses"), AppRoute::Landing);
        assert!(!session.logged_in);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_learner_pages_sign_in_the_student() {
        for path in ["/dashboard", "/course/1", "/lesson/101"] {
            let mut session = Session::default();
            session.observe(path);
            assert!(session.logged_in, "{path} should sign in");
            assert_eq!(session.current_user(), Some(&MockUser::STUDENT));
        }
    }

    #[test]
    fn test_instructor_page_signs_in_the_instructor() {
        let mut session = Session::default();
        session.observe("/instructor");
        assert_eq!(session.current_user(), Some(&MockUser::INSTRUCTOR));
        assert_eq!(session.home_route(), AppRoute::Instructor);
    }

    #[test]
    fn test_login_is_sticky_on_public_pages() {
        let mut session = Session::default();
        session.observe("/dashboard");
        session.observe("/");
        session.observe("/login");
        assert!(session.logged_in);
        assert_eq!(session.user.role, UserRole::Student);
    }

    #[test]
    fn test_role_follows_the_last_private_page() {
        let mut session = Session::default();
        session.observe("/instructor");
        session.observe("/course/2");
        assert_eq!(session.user.role, UserRole::Student);
        assert_eq!(session.home_route(), AppRoute::Dashboard);
    }

    #[test]
    fn test_logout_resets_to_anonymous() {
        let mut session = Session::signed_in(UserRole::Instructor);
        session.logout();
        assert_eq!(session, Session::default());
        assert!(session.current_user().is_none());
    }
}
