mod catalog;
mod dates;
mod ics;
mod select;
mod structs;

pub use catalog::build_catalog;
pub use dates::{easter_sunday, monthly_dates, weekly_dates, MonthlyDates, WeeklyDates};
pub use select::{
    events_on, filter_events, find_event, format_event_date, relevant_occurrences, search_events,
    TimeFilter,
};
pub use structs::{Catalog, Category, EventInstance, WeekOfMonth};
