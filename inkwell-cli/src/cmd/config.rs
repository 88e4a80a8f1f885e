use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use inkwell_core::Config;

use crate::config::load;

pub fn add_override_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("target")
                .long("target")
                .value_name("TARGET")
                .help("Rendering target")
                .value_parser(["static", "server"]),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("THEME")
                .help("Syntax highlighting theme"),
        )
        .arg(
            Arg::new("toc-depth")
                .long("toc-depth")
                .value_name("LEVEL")
                .help("Deepest heading level listed in the table of contents")
                .value_parser(value_parser!(u8)),
        )
        .arg(
            Arg::new("toc-search-depth")
                .long("toc-search-depth")
                .value_name("LEVEL")
                .help("Deepest heading level scanned for table of contents entries")
                .value_parser(value_parser!(u8)),
        )
}

pub fn make_subcommand() -> Command {
    add_override_args(Command::new("config"))
        .about("Print the resolved site configuration")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print as JSON instead of TOML")
                .action(ArgAction::SetTrue),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load(args)?;
    print!("{}", render(&config, args.get_flag("json"))?);

    Ok(())
}

fn render(config: &Config, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(config)? + "\n")
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}
