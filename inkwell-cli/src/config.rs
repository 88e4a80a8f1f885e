use anyhow::Result;
use clap::{ArgMatches, parser::ValueSource};
use config::{Config as ConfigBuilder, Environment, File, FileFormat, Map};
use inkwell_core::Config;
use log::debug;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "./inkwell.toml";

/// Keys whose environment values are comma separated lists.
const LIST_KEYS: &[&str] = &["modules", "content.highlight.preload"];

/// Load configuration with cascading precedence:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (INKWELL_*)
/// 3. Configuration file
/// 4. Defaults (lowest priority)
pub fn load(args: &ArgMatches) -> Result<Config> {
    load_with_env(args, None)
}

/// Same as [`load`], reading `INKWELL_*` variables from `env` instead of the
/// process environment when given.
pub fn load_with_env(args: &ArgMatches, env: Option<Map<String, String>>) -> Result<Config> {
    let mut builder = ConfigBuilder::builder();

    // 1. Start with defaults
    builder = builder.add_source(config::Config::try_from(&Config::default())?);

    // 2. Add configuration file. Only a file named on the command line has
    // to exist.
    if let Some(config_file) = args.try_get_one::<String>("config").unwrap_or(None) {
        let explicit = args.value_source("config") == Some(ValueSource::CommandLine);
        let path = Path::new(config_file);

        if explicit || path.exists() {
            debug!("using config file {}", path.display());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(explicit),
            );
        }
    }

    // 3. Add environment variables with INKWELL_ prefix
    let mut env_source = Environment::with_prefix("INKWELL")
        .prefix_separator("_")
        .separator("__") // Use double underscore for nested keys
        .list_separator(",")
        .try_parsing(true)
        .source(env);
    for key in LIST_KEYS {
        env_source = env_source.with_list_parse_key(key);
    }
    builder = builder.add_source(env_source);

    // 4. Override with CLI arguments (highest priority). Only the ones
    // defined for this command are looked at.
    if let Some(target) = args.try_get_one::<String>("target").unwrap_or(None) {
        builder = builder.set_override("target", target.as_str())?;
    }
    if let Some(theme) = args.try_get_one::<String>("theme").unwrap_or(None) {
        builder = builder.set_override("content.highlight.theme", theme.as_str())?;
    }
    if let Some(depth) = args.try_get_one::<u8>("toc-depth").unwrap_or(None) {
        builder = builder.set_override("content.markdown.toc.depth", i64::from(*depth))?;
    }
    if let Some(depth) = args.try_get_one::<u8>("toc-search-depth").unwrap_or(None) {
        builder = builder.set_override("content.markdown.toc.search_depth", i64::from(*depth))?;
    }

    // Build, deserialize and check the merged result
    let config: Config = builder.build()?.try_deserialize()?;
    config.validate()?;

    Ok(config)
}
