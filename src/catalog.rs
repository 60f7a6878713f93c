use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use log::debug;
use once_cell::sync::Lazy;

use crate::dates::{easter_sunday, monthly_dates, weekly_dates};
use crate::structs::{
    display_time, Anchor, Catalog, Category, EventDefinition, EventInstance, Schedule, WeekOfMonth,
};

const CALENDAR_NAME: &str = "Vision Church";

const WEEKLY_OCCURRENCES: usize = 104;
const MONTHLY_OCCURRENCES: usize = 24;

fn at(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

static DEFINITIONS: Lazy<Vec<EventDefinition>> = Lazy::new(|| {
    vec![
        EventDefinition {
            slug: "sunday-service",
            schedule: Schedule::Weekly {
                weekday: Weekday::Sun,
            },
            title: "Sunday Service",
            time: at(10, 0),
            location: "Copland Theater",
            description: "Join us for our weekly worship service.",
            image: "/images/Events/SundayService.jpg",
            category: Category::Service,
        },
        EventDefinition {
            slug: "kids-church",
            schedule: Schedule::Weekly {
                weekday: Weekday::Sun,
            },
            title: "Kids Church",
            time: at(10, 0),
            location: "Kids Area",
            description: "A special program for children with games, stories, and activities.",
            image: "/images/Events/KidsChurch.jpg",
            category: Category::Children,
        },
        EventDefinition {
            slug: "community-service",
            schedule: Schedule::Weekly {
                weekday: Weekday::Sat,
            },
            title: "Community Service",
            time: at(10, 0),
            location: "The Early Morning Centre",
            description: "Serving our local community through various outreach projects.",
            image: "/images/Events/Community Service.jpg",
            category: Category::Service,
        },
        EventDefinition {
            slug: "encounter-night",
            schedule: Schedule::Monthly {
                weekday: Weekday::Tue,
                week: WeekOfMonth::Last,
            },
            title: "Encounter Night",
            time: at(19, 0),
            location: "Vision Church",
            description: "A night of extended worship and prayer.",
            image: "/images/Events/Encounter Night.jpg",
            category: Category::Worship,
        },
        EventDefinition {
            slug: "easter-service",
            schedule: Schedule::Annual {
                anchor: Anchor::Easter,
                multi_day: false,
                duration_days: None,
            },
            title: "Easter Service",
            time: at(10, 0),
            location: "Copland Theater",
            description: "Celebrate the resurrection of Jesus together with our church family.",
            image: "/images/Events/EasterService.jpg",
            category: Category::Service,
        },
        EventDefinition {
            slug: "christmas-service",
            schedule: Schedule::Annual {
                anchor: Anchor::Fixed { month: 12, day: 25 },
                multi_day: false,
                duration_days: None,
            },
            title: "Christmas Service",
            time: at(9, 30),
            location: "Copland Theater",
            description: "A Christmas morning celebration of carols and the story of Jesus.",
            image: "/images/Events/ChristmasService.jpg",
            category: Category::Service,
        },
        EventDefinition {
            slug: "church-camp",
            schedule: Schedule::Annual {
                anchor: Anchor::Unscheduled,
                multi_day: true,
                duration_days: None,
            },
            title: "Church Camp",
            time: None,
            location: "Warrambui Retreat and Conference Centre",
            description: "A weekend away of teaching, worship, and community.",
            image: "/images/Events/ChurchCamp.jpg",
            category: Category::Workshop,
        },
        EventDefinition {
            slug: "heaven-invade",
            schedule: Schedule::Annual {
                anchor: Anchor::Unscheduled,
                multi_day: false,
                duration_days: None,
            },
            title: "Heaven Invade Worship Concert",
            time: None,
            location: "T2 Kambri",
            description: "A special concert of worship and praise with our worship team.",
            image: "/images/Worship3.jpg",
            category: Category::Worship,
        },
        EventDefinition {
            slug: "womens-morning-tea",
            schedule: Schedule::OneTime {
                date: NaiveDate::from_ymd_opt(2025, 3, 1),
            },
            title: "Women's Morning Tea",
            time: at(10, 0),
            location: "Rotate in different locations",
            description: "A time of fellowship and encouragement for women.",
            image: "/images/Events/Women's Morning Tea.jpg",
            category: Category::Workshop,
        },
        EventDefinition {
            slug: "water-baptism",
            schedule: Schedule::OneTime {
                date: NaiveDate::from_ymd_opt(2025, 2, 19),
            },
            title: "Water Baptism",
            time: at(18, 0),
            location: "Depends on the weather",
            description: "Witness and celebrate new believers taking their next step in faith.",
            image: "/images/Events/WaterBaptism.jpg",
            category: Category::Service,
        },
    ]
});

/// Materializes the authored event table into the instance catalog covering
/// `current_year` and the year after. Deterministic: the same year always
/// produces the same catalog.
pub fn build_catalog(current_year: i32) -> Catalog {
    let mut events = Vec::new();

    for definition in DEFINITIONS.iter() {
        let mut instances = materialize(definition, current_year);
        debug!("{}: {} occurrence(s)", definition.slug, instances.len());
        events.append(&mut instances);
    }

    let mut ids = HashSet::new();
    for event in &events {
        assert!(
            ids.insert(event.id.as_str()),
            "duplicate event id: {}",
            event.id
        );
    }

    Catalog {
        name: CALENDAR_NAME.to_string(),
        year: current_year,
        events,
    }
}

pub(crate) fn materialize(definition: &EventDefinition, current_year: i32) -> Vec<EventInstance> {
    let end_year = current_year + 1;

    match definition.schedule {
        Schedule::Weekly { weekday } => {
            weekly_dates(current_year, end_year, weekday, WEEKLY_OCCURRENCES)
                .enumerate()
                .map(|(ordinal, date)| {
                    instance(
                        definition,
                        format!("{}-{ordinal}", definition.slug),
                        Some(date),
                        None,
                        false,
                    )
                })
                .collect()
        }
        Schedule::Monthly { weekday, week } => {
            monthly_dates(current_year, end_year, weekday, week, MONTHLY_OCCURRENCES)
                .enumerate()
                .map(|(ordinal, date)| {
                    instance(
                        definition,
                        format!("{}-{ordinal}", definition.slug),
                        Some(date),
                        None,
                        false,
                    )
                })
                .collect()
        }
        Schedule::Annual {
            anchor,
            multi_day,
            duration_days,
        } => {
            let date = match anchor {
                Anchor::Fixed { month, day } => Some(
                    NaiveDate::from_ymd_opt(current_year, month, day).unwrap_or_else(|| {
                        panic!("invalid fixed date for {}: {month:02}-{day:02}", definition.slug)
                    }),
                ),
                Anchor::Easter => Some(easter_sunday(current_year)),
                Anchor::Unscheduled => None,
            };

            let end_date = match (date, duration_days) {
                (Some(start), Some(days)) => Some(start + Duration::days(days - 1)),
                _ => None,
            };

            vec![instance(
                definition,
                format!("{}-{current_year}", definition.slug),
                date,
                end_date,
                multi_day,
            )]
        }
        Schedule::OneTime { date } => {
            let year = date.map_or(current_year, |date| date.year());
            vec![instance(
                definition,
                format!("{}-{year}", definition.slug),
                date,
                None,
                false,
            )]
        }
    }
}

fn instance(
    definition: &EventDefinition,
    id: String,
    date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    multi_day: bool,
) -> EventInstance {
    let recurring = definition.schedule.is_recurring();

    EventInstance {
        id,
        title: definition.title.to_string(),
        date,
        end_date,
        time: definition.time,
        location: definition.location.to_string(),
        description: definition.description.to_string(),
        image: definition.image.to_string(),
        category: definition.category,
        is_multi_day: multi_day,
        is_recurring: recurring,
        series: recurring.then_some(definition.slug),
        recurrence_pattern: None,
    }
}

/// The recurring definition whose slug prefixes `id`, if any. The id string
/// is the public handle for a whole recurring series, so any ordinal
/// resolves to the same definition.
pub(crate) fn recurring_definition(id: &str) -> Option<&'static EventDefinition> {
    DEFINITIONS
        .iter()
        .find(|definition| definition.schedule.is_recurring() && id.starts_with(definition.slug))
}

pub(crate) fn recurrence_pattern(definition: &EventDefinition) -> String {
    let time_suffix = definition
        .time
        .map(|time| format!(" at {}", display_time(time)))
        .unwrap_or_default();

    match definition.schedule {
        Schedule::Weekly { weekday } => format!("Every {}{time_suffix}", weekday_name(weekday)),
        Schedule::Monthly { weekday, week } => match week {
            WeekOfMonth::Nth(n) => format!(
                "{} {} of each month{time_suffix}",
                ordinal_name(n),
                weekday_name(weekday)
            ),
            WeekOfMonth::Last => {
                format!("Last {} of each month{time_suffix}", weekday_name(weekday))
            }
        },
        Schedule::Annual { .. } | Schedule::OneTime { .. } => unreachable!(),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn ordinal_name(n: u8) -> &'static str {
    match n {
        1 => "First",
        2 => "Second",
        3 => "Third",
        4 => "Fourth",
        _ => unreachable!(),
    }
}
