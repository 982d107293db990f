#[cfg(test)]
pub mod i18n_tests {
    use rstest::rstest;

    use paxora::i18n::{Locale, translate};

    #[rstest]
    #[case(Locale::En, "nav.dashboard", "Dashboard")]
    #[case(Locale::Fr, "nav.dashboard", "Tableau de bord")]
    #[case(Locale::Es, "nav.dashboard", "Panel")]
    #[case(Locale::Fr, "landing.hero.title", "Apprenez Tout, Partout")]
    #[case(Locale::Es, "dashboard.welcome", "¡Bienvenido de vuelta!")]
    fn test_translate(#[case] locale: Locale, #[case] key: &str, #[case] expected: &str) {
        assert_eq!(translate(locale, key), expected);
    }

    #[rstest]
    #[case(Locale::En)]
    #[case(Locale::Fr)]
    #[case(Locale::Es)]
    fn test_missing_key_returns_the_key(#[case] locale: Locale) {
        assert_eq!(translate(locale, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_every_locale_covers_the_navigation() {
        let keys = ["nav.courses", "nav.dashboard", "nav.login", "nav.signup", "nav.logout", "nav.instructor"];
        for locale in Locale::ALL {
            for key in keys {
                assert_ne!(translate(locale, key), key, "{locale} lacks {key}");
            }
        }
    }

    #[rstest]
    #[case("en", Locale::En)]
    #[case("FR", Locale::Fr)]
    #[case("fr-CA", Locale::Fr)]
    #[case("es_MX", Locale::Es)]
    #[case(" es ", Locale::Es)]
    fn test_locale_from_str(#[case] input: &str, #[case] expected: Locale) {
        assert_eq!(input.parse::<Locale>(), Ok(expected));
    }

    #[test]
    fn test_locale_from_str_rejects_unsupported() {
        assert_eq!("de".parse::<Locale>(), Err("unsupported locale: de".to_string()));
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_defaults_to_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().to_string(), "en");
        assert_eq!(Locale::Es.name(), "Español");
    }
}
