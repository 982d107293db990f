#[cfg(test)]
pub mod format_tests {
    use rstest::rstest;

    use paxora::format;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(15420, "15,420")]
    #[case(1234567, "1,234,567")]
    fn test_count(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format::count(value), expected);
    }

    #[rstest]
    #[case(99.0, "$99")]
    #[case(89.99, "$89.99")]
    #[case(0.5, "$0.50")]
    #[case(1387645.8, "$1,387,645.80")]
    fn test_price(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format::price(value), expected);
    }

    #[rstest]
    #[case(0, "0:00")]
    #[case(65, "1:05")]
    #[case(754, "12:34")]
    fn test_timestamp(#[case] seconds: u32, #[case] expected: &str) {
        assert_eq!(format::timestamp(seconds), expected);
    }

    #[rstest]
    #[case("08:20", Some(500))]
    #[case("24:10", Some(1450))]
    #[case("1:02:03", Some(3723))]
    #[case("12:60", None)]
    #[case("1:60:00", None)]
    #[case("12 min", None)]
    #[case("", None)]
    fn test_parse_duration_label(#[case] label: &str, #[case] expected: Option<u32>) {
        assert_eq!(format::parse_duration_label(label), expected);
    }
}
