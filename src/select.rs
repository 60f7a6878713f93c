use chrono::NaiveDate;

use crate::catalog::{recurrence_pattern, recurring_definition};
use crate::structs::{display_time, Catalog, Category, EventInstance};

/// Reduces the catalog to the view shown on listing pages: every
/// non-recurring instance, followed by one instance per recurring series —
/// its nearest occurrence on or after `today`, or the most recent past one
/// when the series has run out.
pub fn relevant_occurrences(catalog: &Catalog, today: NaiveDate) -> Vec<EventInstance> {
    let mut selected: Vec<EventInstance> = catalog
        .events
        .iter()
        .filter(|event| event.series.is_none())
        .cloned()
        .collect();

    let mut seen = Vec::new();

    for event in &catalog.events {
        let Some(series) = event.series else {
            continue;
        };

        if seen.contains(&series) {
            continue;
        }
        seen.push(series);

        let group: Vec<&EventInstance> = catalog
            .events
            .iter()
            .filter(|event| event.series == Some(series))
            .collect();

        if let Some(occurrence) = nearest_occurrence(&group, today) {
            selected.push(occurrence.clone());
        }
    }

    selected
}

fn nearest_occurrence<'a>(
    group: &[&'a EventInstance],
    today: NaiveDate,
) -> Option<&'a EventInstance> {
    group
        .iter()
        .filter(|event| event.date.is_some_and(|date| date >= today))
        .min_by_key(|event| event.date)
        .or_else(|| {
            group
                .iter()
                .filter(|event| event.date.is_some())
                .max_by_key(|event| event.date)
        })
        .or_else(|| group.first())
        .copied()
}

/// Looks up an instance by id. An id carrying a recurring series prefix
/// resolves to the series' nearest occurrence (with the derived recurrence
/// text attached); anything else is an exact match. `None` is the normal
/// not-found outcome.
pub fn find_event(catalog: &Catalog, id: &str, today: NaiveDate) -> Option<EventInstance> {
    if let Some(definition) = recurring_definition(id) {
        let group: Vec<&EventInstance> = catalog
            .events
            .iter()
            .filter(|event| event.series == Some(definition.slug))
            .collect();

        let occurrence = group
            .iter()
            .filter(|event| event.date.is_some_and(|date| date >= today))
            .min_by_key(|event| event.date)
            .or_else(|| group.first())
            .copied()?;

        let mut event = occurrence.clone();
        event.recurrence_pattern = Some(recurrence_pattern(definition));
        return Some(event);
    }

    catalog.events.iter().find(|event| event.id == id).cloned()
}

#[must_use]
pub fn format_event_date(event: &EventInstance) -> String {
    let Some(date) = event.date else {
        return "Date to be announced".to_string();
    };

    let start = long_date(date);

    if event.is_multi_day {
        if let Some(end) = event.end_date {
            return format!("{start} - {}", long_date(end));
        }
    }

    match event.time {
        Some(time) => format!("{start} at {}", display_time(time)),
        None => format!("{start} (Time to be announced)"),
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Case-insensitive substring search over title, description, and location.
/// A blank term returns the input unchanged.
pub fn search_events(events: &[EventInstance], term: &str) -> Vec<EventInstance> {
    let term = term.trim().to_lowercase();

    if term.is_empty() {
        return events.to_vec();
    }

    events
        .iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&term)
                || event.description.to_lowercase().contains(&term)
                || event.location.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    All,
    Upcoming,
    Past,
}

/// The Events page's dropdown filters. Undated instances only show up
/// under `TimeFilter::All`.
pub fn filter_events(
    events: &[EventInstance],
    time: TimeFilter,
    category: Option<Category>,
    today: NaiveDate,
) -> Vec<EventInstance> {
    events
        .iter()
        .filter(|event| match time {
            TimeFilter::All => true,
            TimeFilter::Upcoming => event.date.is_some_and(|date| date >= today),
            TimeFilter::Past => event.date.is_some_and(|date| date < today),
        })
        .filter(|event| category.map_or(true, |category| event.category == category))
        .cloned()
        .collect()
}

/// Instances falling on exactly `date`; backs the calendar grid's day click.
pub fn events_on(events: &[EventInstance], date: NaiveDate) -> Vec<EventInstance> {
    events
        .iter()
        .filter(|event| event.date == Some(date))
        .cloned()
        .collect()
}
