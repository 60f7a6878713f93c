mod cli;

use std::env;

use chrono::{Datelike, Utc};
use log::info;

use vision_schedule::{build_catalog, format_event_date, relevant_occurrences};

use crate::cli::Output;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "vision_schedule=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

fn main() {
    setup_logging();

    let args = cli::parse(env::args().skip(1).collect());
    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());

    let catalog = build_catalog(today.year());
    info!(
        "built catalog of {} occurrences for {}-{}",
        catalog.events.len(),
        catalog.year,
        catalog.year + 1
    );

    if let Output::Ics = args.output {
        print!("{}", catalog.to_ics());
        return;
    }

    let events = if args.all {
        catalog.events.clone()
    } else {
        relevant_occurrences(&catalog, today)
    };

    match args.output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&events).unwrap()),
        Output::Text => {
            for event in &events {
                println!("{}", event.title);
                println!("  {}", format_event_date(event));
                println!("  {}", event.location);
                println!();
            }
        }
        Output::Ics => unreachable!(),
    }
}
