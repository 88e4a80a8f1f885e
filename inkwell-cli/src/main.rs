mod cmd;
mod config;
mod logging;

use anyhow::{Result, bail};
use clap::{Arg, ArgAction, Command};

fn cli() -> Command {
    Command::new("inkwell")
        .about("Date labels and site configuration for the blog")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value(config::DEFAULT_CONFIG_FILE)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(cmd::date::make_subcommand())
        .subcommand(cmd::config::make_subcommand())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    logging::init_logging(matches.get_flag("quiet"));

    match matches.subcommand() {
        Some(("date", args)) => cmd::date::execute(args),
        Some(("config", args)) => cmd::config::execute(args),
        Some((name, _)) => bail!("unknown command: {}", name),
        None => bail!("no command given"),
    }
}
