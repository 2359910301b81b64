use chrono::NaiveDate;
use thiserror::Error;
use validator::Validate;

use crate::models::CalendarEvent;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The response body was not a list of events
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for CalendarApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, CalendarApiError>;

// ============================================================================
// Client Contract
// ============================================================================

/// Source of calendar events, one day at a time.
///
/// Implementations do not retry and impose no timeout; every failure is
/// handed back to the caller.
#[allow(async_fn_in_trait)]
pub trait CalendarApi {
    async fn get_calendar_events(&self, date: NaiveDate) -> ApiResult<Vec<CalendarEvent>>;
}

/// Decode a `GET /events` response body.
pub fn decode_events(body: &str) -> ApiResult<Vec<CalendarEvent>> {
    Ok(serde_json::from_str(body)?)
}

// ============================================================================
// Client Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ClientConfig {
    #[validate(url)]
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> ApiResult<Self> {
        let trimmed = api_base_url.trim().trim_end_matches('/');

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(CalendarApiError::InvalidConfig(format!(
                "API base URL must start with http:// or https://, got {:?}",
                api_base_url
            )));
        }

        let config = Self {
            api_base_url: trimmed.to_string(),
        };
        config
            .validate()
            .map_err(|e| CalendarApiError::InvalidConfig(e.to_string()))?;

        Ok(config)
    }

    /// Resolve the configuration from an optional environment value.
    ///
    /// Missing or blank values select the default URL; invalid ones are
    /// logged and also fall back to the default.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Self::default(),
            Some(url) => Self::new(url).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to {}", DEFAULT_API_BASE_URL);
                Self::default()
            }),
        }
    }

    pub fn events_url(&self, date: NaiveDate) -> String {
        format!("{}/events?date={}", self.api_base_url, date.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::from_env_value(None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = ClientConfig::from_env_value(Some("   "));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_trailing_slashes_are_stripped() {
        let config = ClientConfig::new("https://calendar.example.com/api//").unwrap();
        assert_eq!(config.api_base_url, "https://calendar.example.com/api");
    }

    #[test]
    fn test_missing_scheme_is_rejected() {
        let err = ClientConfig::new("calendar.example.com").unwrap_err();
        assert!(matches!(err, CalendarApiError::InvalidConfig(_)));

        let config = ClientConfig::from_env_value(Some("calendar.example.com"));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        let err = ClientConfig::new("http://not a url").unwrap_err();
        assert!(matches!(err, CalendarApiError::InvalidConfig(_)));

        let config = ClientConfig::from_env_value(Some("https://bad host/api"));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_events_url() {
        let config = ClientConfig::new("https://calendar.example.com/api").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            config.events_url(date),
            "https://calendar.example.com/api/events?date=2024-03-09"
        );
    }

    #[test]
    fn test_decode_events() {
        let body = r#"[
            {"title": "Standup", "durationInMinutes": 15, "id": 1},
            {"title": "Review", "durationInMinutes": 60}
        ]"#;
        let events = decode_events(body).unwrap();
        assert_eq!(
            events,
            vec![
                CalendarEvent::new("Standup", 15),
                CalendarEvent::new("Review", 60)
            ]
        );
        assert!(decode_events("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_list() {
        let err = decode_events(r#"{"events": []}"#).unwrap_err();
        assert!(matches!(err, CalendarApiError::Decode(_)));
    }
}
