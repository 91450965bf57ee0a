//! File logging for the terminal binary.
//!
//! The game owns the terminal, so log records go to a file. Logging stays off
//! unless `BLOCKFALL_LOG_PATH` is set.

use anyhow::Result;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use crate::engine::EngineConfig;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Install the global logger. Returns `Ok(false)` when no log path is configured.
pub fn init(config: &EngineConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };
    let level = config.log_level;

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)?;

    let log_config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;

    log4rs::init_config(log_config)?;
    Ok(true)
}
