use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Serialize, Serializer};

fn serialize_display_time<S: Serializer>(
    time: &Option<NaiveTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => serializer.serialize_str(&display_time(*time)),
        None => serializer.serialize_str("TBC"),
    }
}

pub(crate) fn display_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Service,
    Worship,
    Workshop,
    Children,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Service => "Service",
            Category::Worship => "Worship",
            Category::Workshop => "Workshop",
            Category::Children => "Children",
        }
    }
}

/// Which occurrence of a weekday a monthly schedule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOfMonth {
    /// The nth occurrence within the month, 1 through 4.
    Nth(u8),
    /// The final occurrence within the month.
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    Fixed { month: u32, day: u32 },
    Easter,
    Unscheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Schedule {
    Weekly {
        weekday: Weekday,
    },
    Monthly {
        weekday: Weekday,
        week: WeekOfMonth,
    },
    Annual {
        anchor: Anchor,
        multi_day: bool,
        duration_days: Option<i64>,
    },
    OneTime {
        date: Option<NaiveDate>,
    },
}

impl Schedule {
    pub(crate) fn is_recurring(self) -> bool {
        matches!(self, Schedule::Weekly { .. } | Schedule::Monthly { .. })
    }
}

/// One row of the authored event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EventDefinition {
    pub slug: &'static str,
    pub schedule: Schedule,
    pub title: &'static str,
    pub time: Option<NaiveTime>,
    pub location: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: Category,
}

/// A single materialized occurrence of an event. A `date` of `None` means
/// the occurrence has not been announced yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInstance {
    pub id: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(serialize_with = "serialize_display_time")]
    pub time: Option<NaiveTime>,
    pub location: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub is_multi_day: bool,
    pub is_recurring: bool,
    /// Definition slug shared by every occurrence of a recurring series.
    #[serde(skip)]
    pub series: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub name: String,
    pub year: i32,
    pub events: Vec<EventInstance>,
}
