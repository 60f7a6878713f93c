use std::process;

use chrono::NaiveDate;
use getopts::Options;

pub enum Output {
    Text,
    Json,
    Ics,
}

pub struct Args {
    pub today: Option<NaiveDate>,
    pub all: bool,
    pub output: Output,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "d",
        "date",
        "Date to treat as today when selecting occurrences [Default: current UTC date]",
        "YYYY-MM-DD",
    );
    opts.optflag(
        "a",
        "all",
        "List every generated occurrence instead of the reduced view",
    );
    opts.optflag("j", "json", "Print events as JSON");
    opts.optflag("i", "ics", "Print the full catalog as an iCalendar feed");
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let today = match matches.opt_get::<NaiveDate>("date") {
        Ok(date) => date,
        Err(err) => {
            eprintln!("Provided value for option 'date' is invalid: {err}");
            process::exit(1);
        }
    };

    if matches.opt_present("json") && matches.opt_present("ics") {
        eprintln!("Options 'json' and 'ics' are mutually exclusive");
        process::exit(1);
    }

    let output = if matches.opt_present("json") {
        Output::Json
    } else if matches.opt_present("ics") {
        Output::Ics
    } else {
        Output::Text
    };

    Args {
        today,
        all: matches.opt_present("all"),
        output,
    }
}
