#![cfg(feature = "ssr")]

#[cfg(test)]
pub mod config_tests {
    use std::net::SocketAddr;

    use paxora::common::ConfigError;
    use paxora::config::resolve_bind_addr;

    fn site_addr() -> SocketAddr {
        "127.0.0.1:3000".parse().expect("valid address")
    }

    #[test]
    fn test_no_override_uses_site_addr() {
        assert_eq!(resolve_bind_addr(site_addr(), None).ok(), Some(site_addr()));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(resolve_bind_addr(site_addr(), Some("  ")).ok(), Some(site_addr()));
    }

    #[test]
    fn test_override_wins() {
        let addr = resolve_bind_addr(site_addr(), Some(" 0.0.0.0:8080 ")).expect("valid override");
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        let err = resolve_bind_addr(site_addr(), Some("localhost")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
    }
}
