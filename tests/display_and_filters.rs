//! Display formatting, the trivial list filters, and the export surfaces.

use chrono::{NaiveDate, NaiveTime};

use vision_schedule::{
    build_catalog, events_on, filter_events, format_event_date, relevant_occurrences,
    search_events, Category, EventInstance, TimeFilter,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn instance(date: Option<NaiveDate>, time: Option<NaiveTime>) -> EventInstance {
    EventInstance {
        id: "spring-festival-2025".to_string(),
        title: "Spring Festival".to_string(),
        date,
        end_date: None,
        time,
        location: "Vision Church".to_string(),
        description: "An afternoon together on the lawn.".to_string(),
        image: "/images/Events/SpringFestival.jpg".to_string(),
        category: Category::Workshop,
        is_multi_day: false,
        is_recurring: false,
        series: None,
        recurrence_pattern: None,
    }
}

// =============================================================================
// Date formatting
// =============================================================================

#[test]
fn undated_events_format_to_the_announcement_text() {
    let mut event = instance(None, NaiveTime::from_hms_opt(10, 0, 0));
    assert_eq!(format_event_date(&event), "Date to be announced");

    // other fields never override a missing date
    event.is_multi_day = true;
    event.end_date = Some(ymd(2025, 10, 5));
    assert_eq!(format_event_date(&event), "Date to be announced");
}

#[test]
fn dated_events_format_with_weekday_month_and_time() {
    let event = instance(Some(ymd(2025, 4, 20)), NaiveTime::from_hms_opt(10, 0, 0));
    assert_eq!(
        format_event_date(&event),
        "Sunday, April 20, 2025 at 10:00 AM"
    );
}

#[test]
fn unconfirmed_times_are_called_out() {
    let event = instance(Some(ymd(2025, 4, 20)), None);
    assert_eq!(
        format_event_date(&event),
        "Sunday, April 20, 2025 (Time to be announced)"
    );
}

#[test]
fn multi_day_events_format_as_a_range() {
    let mut event = instance(Some(ymd(2025, 10, 3)), None);
    event.is_multi_day = true;
    event.end_date = Some(ymd(2025, 10, 5));

    assert_eq!(
        format_event_date(&event),
        "Friday, October 3, 2025 - Sunday, October 5, 2025"
    );
}

#[test]
fn multi_day_without_a_known_end_falls_back_to_the_time_forms() {
    let mut event = instance(Some(ymd(2025, 10, 3)), None);
    event.is_multi_day = true;

    assert_eq!(
        format_event_date(&event),
        "Friday, October 3, 2025 (Time to be announced)"
    );
}

// =============================================================================
// Search and filters
// =============================================================================

#[test]
fn search_is_case_insensitive_across_title_description_and_location() {
    let catalog = build_catalog(2025);
    let listing = relevant_occurrences(&catalog, ymd(2025, 6, 4));

    let by_title = search_events(&listing, "BAPTISM");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "water-baptism-2025");

    let by_location = search_events(&listing, "kambri");
    assert_eq!(by_location.len(), 1);
    assert_eq!(by_location[0].id, "heaven-invade-2025");

    let by_description = search_events(&listing, "games, stories");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].title, "Kids Church");
}

#[test]
fn blank_search_returns_everything() {
    let catalog = build_catalog(2025);
    let listing = relevant_occurrences(&catalog, ymd(2025, 6, 4));

    assert_eq!(search_events(&listing, "").len(), listing.len());
    assert_eq!(search_events(&listing, "   ").len(), listing.len());
}

#[test]
fn time_filters_split_on_today_and_drop_undated_events() {
    let catalog = build_catalog(2025);
    let listing = relevant_occurrences(&catalog, ymd(2025, 6, 4));
    let today = ymd(2025, 6, 4);

    let upcoming = filter_events(&listing, TimeFilter::Upcoming, None, today);
    let past = filter_events(&listing, TimeFilter::Past, None, today);
    let all = filter_events(&listing, TimeFilter::All, None, today);

    assert!(upcoming.iter().all(|event| event.date.unwrap() >= today));
    assert!(past.iter().all(|event| event.date.unwrap() < today));
    assert!(upcoming.iter().all(|event| event.id != "church-camp-2025"));
    assert!(past.iter().all(|event| event.id != "church-camp-2025"));
    assert!(all.iter().any(|event| event.id == "church-camp-2025"));
    assert_eq!(all.len(), listing.len());
}

#[test]
fn category_filter_matches_exactly() {
    let catalog = build_catalog(2025);
    let listing = relevant_occurrences(&catalog, ymd(2025, 6, 4));

    let worship = filter_events(&listing, TimeFilter::All, Some(Category::Worship), ymd(2025, 6, 4));

    assert!(!worship.is_empty());
    assert!(worship
        .iter()
        .all(|event| event.category == Category::Worship));
}

#[test]
fn events_on_returns_the_instances_of_a_single_day() {
    let catalog = build_catalog(2025);

    let easter_day = events_on(&catalog.events, ymd(2025, 4, 20));
    assert!(easter_day.iter().any(|event| event.id == "easter-service-2025"));

    // Easter 2025 is a Sunday, so the weekly Sunday series land there too
    assert!(easter_day.iter().any(|event| event.series == Some("sunday-service")));

    assert!(events_on(&catalog.events, ymd(2025, 1, 1)).is_empty());
}

// =============================================================================
// Export surfaces
// =============================================================================

#[test]
fn instances_serialize_with_the_site_data_shape() {
    let catalog = build_catalog(2025);
    let easter = catalog
        .events
        .iter()
        .find(|event| event.id == "easter-service-2025")
        .unwrap();

    let json = serde_json::to_value(easter).unwrap();

    assert_eq!(json["date"], "2025-04-20");
    assert_eq!(json["time"], "10:00 AM");
    assert_eq!(json["isMultiDay"], false);
    assert_eq!(json["isRecurring"], false);
    assert_eq!(json["category"], "Service");
    assert!(json.get("endDate").is_none());
    assert!(json.get("recurrencePattern").is_none());

    let camp = catalog
        .events
        .iter()
        .find(|event| event.id == "church-camp-2025")
        .unwrap();
    let json = serde_json::to_value(camp).unwrap();

    assert_eq!(json["date"], serde_json::Value::Null);
    assert_eq!(json["time"], "TBC");
}

#[test]
fn the_ics_feed_carries_every_dated_instance() {
    let catalog = build_catalog(2025);
    let feed = catalog.to_ics().to_string();

    let dated = catalog
        .events
        .iter()
        .filter(|event| event.date.is_some())
        .count();

    assert_eq!(feed.matches("BEGIN:VEVENT").count(), dated);
    assert!(feed.contains("Australia/Sydney"));
    assert!(feed.contains("SUMMARY:Sunday Service"));
    assert!(!feed.contains("church-camp-2025"));
}
