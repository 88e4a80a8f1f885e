use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Log to stderr so command output on stdout stays clean. `RUST_LOG`
/// defaults to `info`; `quiet` drops everything below errors.
pub fn init_logging(quiet: bool) {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    let mut builder = Builder::from_env(logging_env);

    if quiet {
        builder.filter_level(LevelFilter::Error);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}",
                record.level().as_str().to_ascii_lowercase(),
                record.args()
            )
        })
        .init();
}
