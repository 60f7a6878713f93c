use chrono::Duration;
use ics::properties::{Categories, Description, DtEnd, DtStart, Location, RRule, Summary, TzName};
use ics::{Daylight, Standard, TimeZone};

use crate::structs::{Catalog, EventInstance};

impl Catalog {
    #[must_use]
    pub fn to_ics(&self) -> ics::ICalendar<'_> {
        let mut aest_standard = Standard::new("19700405T030000", "+1100", "+1000");
        aest_standard.push(TzName::new("AEST"));
        aest_standard.push(RRule::new("FREQ=YEARLY;BYMONTH=4;BYDAY=1SU"));

        let mut aedt_daylight = Daylight::new("19701004T020000", "+1000", "+1100");
        aedt_daylight.push(TzName::new("AEDT"));
        aedt_daylight.push(RRule::new("FREQ=YEARLY;BYMONTH=10;BYDAY=1SU"));

        let mut timezone = TimeZone::daylight("Australia/Sydney", aedt_daylight);
        timezone.add_standard(aest_standard);

        let mut icalendar = ics::ICalendar::new("2.0", &self.name);
        icalendar.add_timezone(timezone);

        for event in &self.events {
            if let Some(ics_event) = event.to_ics() {
                icalendar.add_event(ics_event);
            }
        }

        icalendar
    }
}

impl EventInstance {
    /// `None` for unannounced instances; an event without a date has no
    /// place on a calendar feed.
    #[must_use]
    pub fn to_ics(&self) -> Option<ics::Event<'_>> {
        let date = self.date?;

        let start = match self.time {
            Some(time) => format!("{}T{}00", date.format("%Y%m%d"), time.format("%H%M")),
            None => date.format("%Y%m%d").to_string(),
        };

        let mut ics_event = ics::Event::new(self.id.clone(), start.clone());

        ics_event.push(DtStart::new(start));

        if let Some(end) = self.end_date {
            let exclusive_end = end + Duration::days(1);
            ics_event.push(DtEnd::new(exclusive_end.format("%Y%m%d").to_string()));
        }

        ics_event.push(Summary::new(&self.title));
        ics_event.push(Location::new(&self.location));
        ics_event.push(Description::new(&self.description));
        ics_event.push(Categories::new(self.category.as_str()));

        Some(ics_event)
    }
}
