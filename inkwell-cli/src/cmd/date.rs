use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use inkwell_core::{INVALID_DATE, format_date};
use log::warn;

pub fn make_subcommand() -> Command {
    Command::new("date")
        .about("Format dates as \"Month Day\" labels")
        .arg(
            Arg::new("dates")
                .value_name("DATE")
                .help("Dates to format, e.g. 2023-01-05")
                .required(true)
                .num_args(1..),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    for label in labels(args) {
        println!("{}", label);
    }

    Ok(())
}

fn labels(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>("dates")
        .unwrap_or_default()
        .map(|input| {
            let label = format_date(input);
            if label == INVALID_DATE {
                warn!("could not read {:?} as a date", input);
            }
            label
        })
        .collect()
}
