//! Fetching a week of events from a [`CalendarApi`].

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use futures::future::join_all;

use crate::api::{ApiResult, CalendarApi};
use crate::models::WeeklyEvents;

/// Number of consecutive days fetched, starting with today.
pub const DAYS_IN_WINDOW: u64 = 7;

/// The days of the window starting at `now`.
///
/// The first day is the UTC date of `now`; the rest follow it as
/// consecutive calendar dates, so the window never repeats a day across a
/// DST change. Days beyond chrono's representable range are skipped.
pub fn week_days<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<NaiveDate> {
    let first = now.with_timezone(&Utc).date_naive();

    (0..DAYS_IN_WINDOW)
        .filter_map(|offset| first.checked_add_days(Days::new(offset)))
        .collect()
}

/// Fetch every day of the window concurrently and join the results.
///
/// The join is all-or-nothing: all requests run to completion, and if any of
/// them failed the first failure in day order is returned and no per-day
/// data is kept.
pub async fn fetch_week<A, Tz>(api: &A, now: &DateTime<Tz>) -> ApiResult<WeeklyEvents>
where
    A: CalendarApi,
    Tz: TimeZone,
{
    let days = week_days(now);

    let requests = days.iter().map(|day| {
        tracing::debug!(%day, "Requesting calendar events");
        api.get_calendar_events(*day)
    });
    let responses = join_all(requests).await;

    let week = days
        .iter()
        .zip(responses)
        .map(|(day, response)| response.map(|events| (*day, events)))
        .collect::<ApiResult<WeeklyEvents>>()?;

    tracing::info!(
        days = week.len(),
        events = week.total_event_count(),
        "Fetched weekly calendar events"
    );

    Ok(week)
}
