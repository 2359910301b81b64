use chrono::NaiveDate;

use crate::api::ApiResult;
use crate::models::{CalendarEvent, WeeklyEvents};

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub event_count: usize,
    pub total_duration: u64,
    pub longest_title: Option<String>,
}

/// The bold total row under the day rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalSummary {
    pub event_count: usize,
    pub total_duration: u64,
    /// Taken from the first day only.
    pub longest_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySummary {
    pub days: Vec<DaySummary>,
    pub total: TotalSummary,
}

fn title_of(event: Option<&CalendarEvent>) -> Option<String> {
    event.map(|e| e.title.clone())
}

impl WeeklySummary {
    /// Aggregate `events` into table rows. Pure; callers recompute it on
    /// every render.
    pub fn from_events(events: &WeeklyEvents) -> Self {
        let days = events
            .days()
            .map(|date| DaySummary {
                date,
                event_count: events.event_count_for_day(date),
                total_duration: events.total_duration_for_day(date),
                longest_title: title_of(events.longest_event_for_day(date)),
            })
            .collect();

        let total = TotalSummary {
            event_count: events.total_event_count(),
            total_duration: events.total_duration(),
            longest_title: title_of(events.first_day_longest_event()),
        };

        Self { days, total }
    }
}

/// State of the weekly summary component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryState {
    #[default]
    Loading,
    Loaded(WeeklyEvents),
}

impl SummaryState {
    /// Transition taken when the weekly fetch completes.
    ///
    /// A failed fetch is logged and leaves the component loaded with no
    /// events; it is never retried.
    pub fn from_fetch(result: ApiResult<WeeklyEvents>) -> Self {
        match result {
            Ok(events) => Self::Loaded(events),
            Err(e) => {
                tracing::error!("Error fetching calendar events: {}", e);
                Self::Loaded(WeeklyEvents::default())
            }
        }
    }

    pub fn summary(&self) -> Option<WeeklySummary> {
        match self {
            Self::Loading => None,
            Self::Loaded(events) => Some(WeeklySummary::from_events(events)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CalendarApiError;

    fn day(offset: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6 + offset).unwrap()
    }

    fn week_of(events_for: impl Fn(u32) -> Vec<CalendarEvent>) -> WeeklyEvents {
        (0..7).map(|offset| (day(offset), events_for(offset))).collect()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = SummaryState::default();
        assert_eq!(state, SummaryState::Loading);
        assert!(state.summary().is_none());
    }

    #[test]
    fn test_summary_rows_for_sample_week() {
        let week = week_of(|offset| match offset {
            0 => vec![CalendarEvent::new("Standup", 15)],
            2 => vec![
                CalendarEvent::new("Review", 60),
                CalendarEvent::new("1:1", 30),
            ],
            _ => Vec::new(),
        });

        let summary = SummaryState::from_fetch(Ok(week)).summary().unwrap();

        assert_eq!(summary.days.len(), 7);
        assert_eq!(
            summary.days[0],
            DaySummary {
                date: day(0),
                event_count: 1,
                total_duration: 15,
                longest_title: Some("Standup".to_string()),
            }
        );
        assert_eq!(summary.days[2].total_duration, 90);
        assert_eq!(summary.days[2].longest_title.as_deref(), Some("Review"));
        assert_eq!(
            summary.total,
            TotalSummary {
                event_count: 3,
                total_duration: 105,
                longest_title: Some("Standup".to_string()),
            }
        );
    }

    #[test]
    fn test_all_days_empty() {
        let summary = WeeklySummary::from_events(&week_of(|_| Vec::new()));

        assert_eq!(summary.days.len(), 7);
        for row in &summary.days {
            assert_eq!(row.event_count, 0);
            assert_eq!(row.total_duration, 0);
            assert!(row.longest_title.is_none());
        }
        assert_eq!(summary.total, TotalSummary::default());
    }

    #[test]
    fn test_total_longest_comes_from_first_day() {
        let week = week_of(|offset| match offset {
            3 => vec![CalendarEvent::new("Workshop", 240)],
            _ => Vec::new(),
        });

        let summary = WeeklySummary::from_events(&week);

        assert_eq!(summary.days[3].longest_title.as_deref(), Some("Workshop"));
        assert!(summary.total.longest_title.is_none());
    }

    #[test]
    fn test_failed_fetch_ends_loaded_and_empty() {
        let state = SummaryState::from_fetch(Err(CalendarApiError::Status(502)));

        assert_eq!(state, SummaryState::Loaded(WeeklyEvents::default()));
        let summary = state.summary().unwrap();
        assert!(summary.days.is_empty());
        assert_eq!(summary.total, TotalSummary::default());
    }
}
