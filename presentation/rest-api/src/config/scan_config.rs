use std::time::Duration;

use super::env_parse;

/// Overall deadline for scanning the candidates of one request.
///
/// Environment variables:
/// - SCAN_TIMEOUT_SECS: Whole-scan deadline in seconds; unset or 0 disables it
pub struct ScanConfig {
    pub timeout: Option<Duration>,
}

impl ScanConfig {
    pub fn from_env() -> Self {
        Self::from_secs(env_parse("SCAN_TIMEOUT_SECS"))
    }

    fn from_secs(secs: Option<u64>) -> Self {
        Self {
            timeout: secs.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_disable_deadline_when_unset_or_zero() {
        assert_eq!(ScanConfig::from_secs(None).timeout, None);
        assert_eq!(ScanConfig::from_secs(Some(0)).timeout, None);
    }

    #[test]
    fn should_convert_seconds_to_deadline() {
        assert_eq!(
            ScanConfig::from_secs(Some(90)).timeout,
            Some(Duration::from_secs(90))
        );
    }
}
