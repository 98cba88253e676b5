use std::io::Write;

use log::Level;

/// Message prefix printed in front of a log record of the given level.
pub fn level_prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR! ",
        Level::Warn => "Warning! ",
        _ => "",
    }
}

pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format(|buf, record| {
            writeln!(buf, "{}{}", level_prefix(record.level()), record.args())
        })
        .init();
}
