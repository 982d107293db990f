#[cfg(test)]
pub mod progress_tests {
    use rstest::rstest;

    use paxora::catalog::progress;

    #[rstest]
    #[case(0, 4, 0)]
    #[case(2, 4, 50)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(4, 4, 100)]
    fn test_percent(#[case] completed: usize, #[case] total: usize, #[case] expected: u8) {
        assert_eq!(progress::percent(completed, total), expected);
    }

    #[test]
    fn test_percent_of_empty_course_is_zero() {
        assert_eq!(progress::percent(0, 0), 0);
        assert_eq!(progress::percent(3, 0), 0);
    }

    #[test]
    fn test_percent_caps_completed_at_total() {
        assert_eq!(progress::percent(7, 4), 100);
    }

    #[rstest]
    #[case(-10.0, 0.0)]
    #[case(0.0, 0.0)]
    #[case(42.5, 42.5)]
    #[case(150.0, 100.0)]
    #[case(f64::INFINITY, 100.0)]
    fn test_clamp(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(progress::clamp(value), expected);
    }

    #[test]
    fn test_clamp_nan_is_zero() {
        assert_eq!(progress::clamp(f64::NAN), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(progress::average([65, 30, 100]), 65);
        assert_eq!(progress::average([1, 2]), 2);
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        assert_eq!(progress::average(std::iter::empty()), 0);
    }
}
