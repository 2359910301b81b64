//! Data model, calendar API contract and weekly aggregation shared by the
//! dashboard frontend.

pub mod api;
pub mod fetch;
pub mod models;
pub mod summary;

pub use api::{ApiResult, CalendarApi, CalendarApiError, ClientConfig};
pub use fetch::{fetch_week, week_days, DAYS_IN_WINDOW};
pub use models::{CalendarEvent, WeeklyEvents};
pub use summary::{DaySummary, SummaryState, TotalSummary, WeeklySummary};
