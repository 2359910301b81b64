use chrono::NaiveDate;
use gloo_net::http::Request;
use shared::api::{decode_events, ApiResult, CalendarApi, CalendarApiError, ClientConfig};
use shared::models::CalendarEvent;

/// Calendar API client backed by the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct GlooCalendarApi {
    config: ClientConfig,
}

impl GlooCalendarApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Client for the URL given in `CALENDAR_API_URL` at build time.
    pub fn from_build_env() -> Self {
        Self::new(ClientConfig::from_env_value(option_env!("CALENDAR_API_URL")))
    }
}

impl CalendarApi for GlooCalendarApi {
    async fn get_calendar_events(&self, date: NaiveDate) -> ApiResult<Vec<CalendarEvent>> {
        let url = self.config.events_url(date);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| CalendarApiError::Request(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(CalendarApiError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CalendarApiError::Request(format!("{:?}", e)))?;

        decode_events(&body)
    }
}
