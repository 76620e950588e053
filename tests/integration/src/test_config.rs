//! Environment-driven configuration of verifiers and logging.

#[cfg(test)]
mod tests {
    use gav_core::GavConfig;

    use crate::log_filter;

    #[test]
    fn test_should_use_configured_log_level_without_rust_log() {
        let config =
            GavConfig::from_lookup(|key| (key == "LOG_LEVEL").then(|| "debug".to_owned()));
        assert_eq!(log_filter(None, &config.log_level).to_string(), "debug");
    }

    #[test]
    fn test_should_prefer_rust_log_over_log_level() {
        let filter = log_filter(Some("gav_auth=trace"), "info");
        assert_eq!(filter.to_string(), "gav_auth=trace");
    }

    #[test]
    fn test_should_default_to_info() {
        let config = GavConfig::from_lookup(|_| None);
        assert_eq!(log_filter(None, &config.log_level).to_string(), "info");
    }
}
