use dotenv::dotenv;

pub const AUDIT_API_ENV: &str = "AUDIT_API";
pub const DEFAULT_AUDIT_API: &str = "http://localhost:8080";

/// Where the audit service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub base_url: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AUDIT_API.to_string(),
        }
    }
}

impl AuditConfig {
    /// Reads `AUDIT_API` (a `.env` file is loaded first), falling back to
    /// `http://localhost:8080`.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_value(std::env::var(AUDIT_API_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// `{base}/{path}` with exactly one slash in between.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_blank_uses_default() {
        assert_eq!(AuditConfig::from_value(None).base_url, DEFAULT_AUDIT_API);
        assert_eq!(
            AuditConfig::from_value(Some("  ".to_string())).base_url,
            DEFAULT_AUDIT_API
        );
    }

    #[test]
    fn supplied_value_wins() {
        let config = AuditConfig::from_value(Some("https://qa.internal:9000".to_string()));
        assert_eq!(config.base_url, "https://qa.internal:9000");
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = AuditConfig::default().with_base_url("http://svc:8080/");
        assert_eq!(config.endpoint("audit"), "http://svc:8080/audit");
        assert_eq!(config.endpoint(""), "http://svc:8080/");
        assert_eq!(
            AuditConfig::default().endpoint("/audit"),
            "http://localhost:8080/audit"
        );
    }
}
