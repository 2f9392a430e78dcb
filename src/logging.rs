//! log4rs setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Warnings and errors to stderr, used when no config file is present.
pub fn fallback_config() -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
}

/// Initialise log4rs from `path`, or from [`fallback_config`] if it does not exist.
pub fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())?;
    } else {
        log4rs::init_config(fallback_config()?)?;
    }
    Ok(())
}
