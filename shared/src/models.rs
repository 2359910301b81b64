use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// A single scheduled item as returned by the calendar API.
///
/// Only the title and duration are kept; any other fields in the response
/// are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub duration_in_minutes: u32,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, duration_in_minutes: u32) -> Self {
        Self {
            title: title.into(),
            duration_in_minutes,
        }
    }
}

/// Events for a window of days, keyed by calendar date.
///
/// Keys iterate in chronological order, which is also the order of their
/// `YYYY-MM-DD` string form. The mapping is built once per fetch and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyEvents(BTreeMap<NaiveDate, Vec<CalendarEvent>>);

impl WeeklyEvents {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Days in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[CalendarEvent])> + '_ {
        self.0.iter().map(|(day, events)| (*day, events.as_slice()))
    }

    /// Events of `day`, or an empty slice when the day is not present.
    pub fn events_for_day(&self, day: NaiveDate) -> &[CalendarEvent] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn event_count_for_day(&self, day: NaiveDate) -> usize {
        self.events_for_day(day).len()
    }

    /// Sum of event durations for `day`, 0 when the day has no events.
    pub fn total_duration_for_day(&self, day: NaiveDate) -> u64 {
        self.events_for_day(day)
            .iter()
            .map(|event| u64::from(event.duration_in_minutes))
            .sum()
    }

    /// Longest event of `day`. The first event wins on ties.
    ///
    /// `None` stands for the zero-duration placeholder: it is returned for a
    /// day without events, and also when every event of the day lasts zero
    /// minutes, since an event only replaces the running maximum when it is
    /// strictly longer.
    pub fn longest_event_for_day(&self, day: NaiveDate) -> Option<&CalendarEvent> {
        self.events_for_day(day)
            .iter()
            .fold(None, |longest: Option<&CalendarEvent>, event| {
                let max = longest.map_or(0, |current| current.duration_in_minutes);
                if event.duration_in_minutes > max {
                    Some(event)
                } else {
                    longest
                }
            })
    }

    pub fn total_event_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn total_duration(&self) -> u64 {
        self.days().map(|day| self.total_duration_for_day(day)).sum()
    }

    /// Longest event shown in the weekly total row.
    ///
    /// This looks at the first day only, not at the whole week.
    pub fn first_day_longest_event(&self) -> Option<&CalendarEvent> {
        self.days()
            .next()
            .and_then(|day| self.longest_event_for_day(day))
    }
}

impl FromIterator<(NaiveDate, Vec<CalendarEvent>)> for WeeklyEvents {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Vec<CalendarEvent>)>>(iter: I) -> Self {
        WeeklyEvents(iter.into_iter().collect())
    }
}
