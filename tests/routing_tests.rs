#[cfg(test)]
pub mod routing_tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use paxora::routing::AppRoute;

    #[rstest]
    #[case("/", AppRoute::Landing)]
    #[case("", AppRoute::Landing)]
    #[case("/login", AppRoute::Login)]
    #[case("/signup", AppRoute::Signup)]
    #[case("/dashboard", AppRoute::Dashboard)]
    #[case("/dashboard/", AppRoute::Dashboard)]
    #[case("/instructor", AppRoute::Instructor)]
    #[case("/course/42", AppRoute::Course("42".to_string()))]
    #[case("/lesson/101", AppRoute::Lesson("101".to_string()))]
    #[case("/lesson/101?t=30#notes", AppRoute::Lesson("101".to_string()))]
    fn test_parse_known_routes(#[case] path: &str, #[case] expected: AppRoute) {
        assert_eq!(AppRoute::parse(path), expected);
    }

    #[rstest]
    #[case("/courses")]
    #[case("/course/")]
    #[case("/course")]
    #[case("/course/1/extra")]
    #[case("/admin")]
    #[case("/Dashboard")]
    fn test_parse_unmatched_falls_back_to_landing(#[case] path: &str) {
        assert_eq!(AppRoute::parse(path), AppRoute::Landing);
    }

    #[test]
    fn test_href_round_trips_through_parse() {
        let routes = [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::Dashboard,
            AppRoute::Course("3".to_string()),
            AppRoute::Lesson("302".to_string()),
            AppRoute::Instructor,
        ];
        for route in routes {
            assert_eq!(AppRoute::parse(&route.href()), route);
        }
    }

    #[test]
    fn test_display_is_href() {
        assert_eq!(AppRoute::Course("5".to_string()).to_string(), "/course/5");
        assert_eq!(AppRoute::default().to_string(), "/");
    }
}
