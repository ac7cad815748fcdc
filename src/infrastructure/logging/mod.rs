use std::io::Write as _;

use log::{Level, LevelFilter};
use pretty_env_logger::env_logger;

/// Coloured, timestamped logger. `RUST_LOG` overrides the `info` default.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        level_style.set_color(match record.level() {
            Level::Error => env_logger::fmt::Color::Red,
            Level::Warn => env_logger::fmt::Color::Yellow,
            Level::Info => env_logger::fmt::Color::Green,
            Level::Debug => env_logger::fmt::Color::Blue,
            Level::Trace => env_logger::fmt::Color::Magenta,
        });
        level_style.set_bold(true);

        let target = record
            .target()
            .strip_prefix("lexicount::")
            .unwrap_or(record.target());

        writeln!(
            buf,
            "{} {} {} > {}",
            buf.timestamp_millis(),
            level_style.value(format!("{:<5}", record.level())),
            target,
            record.args()
        )
    });

    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}
