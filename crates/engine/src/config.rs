//! Engine configuration loaded from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_FALL_MS` | 1000 | Fall tick interval in milliseconds |
//! | `BLOCKFALL_FPS` | 60 | Render cadence |
//! | `BLOCKFALL_SEED` | time based | Piece RNG seed |
//! | `BLOCKFALL_LOG_PATH` | unset | Log file (logging is off when unset) |
//! | `BLOCKFALL_LOG_LEVEL` | info | Log level filter |

use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{warn, LevelFilter};

use crate::types::{FALL_INTERVAL_MS, RENDER_FPS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub fall_interval: Duration,
    pub render_interval: Duration,
    pub seed: u32,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fall_interval: Duration::from_millis(FALL_INTERVAL_MS),
            render_interval: render_interval_for(RENDER_FPS),
            seed: time_seed(),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl EngineConfig {
    /// Load configuration from `BLOCKFALL_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing, unparseable or zero values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let fall_interval = parse_positive::<u64>(&lookup, "BLOCKFALL_FALL_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.fall_interval);

        let render_interval = parse_positive::<u32>(&lookup, "BLOCKFALL_FPS")
            .and_then(|fps| {
                let interval = render_interval_for(fps);
                if interval.is_zero() {
                    warn!("BLOCKFALL_FPS={} is above {}, using default", fps, MAX_FPS);
                    return None;
                }
                Some(interval)
            })
            .unwrap_or(defaults.render_interval);

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| parse_or_warn::<u32>("BLOCKFALL_SEED", &s))
            .unwrap_or(defaults.seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| parse_or_warn::<LevelFilter>("BLOCKFALL_LOG_LEVEL", &s))
            .unwrap_or(defaults.log_level);

        Self {
            fall_interval,
            render_interval,
            seed,
            log_path,
            log_level,
        }
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr + PartialOrd + Default,
{
    let value = parse_or_warn::<T>(key, &lookup(key)?)?;
    if value <= T::default() {
        warn!("{} must be greater than zero, using default", key);
        return None;
    }
    Some(value)
}

fn parse_or_warn<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}

/// Highest frame rate with a non-zero interval at microsecond resolution
pub const MAX_FPS: u32 = 1_000_000;

/// Frame interval for a frames-per-second rate (60 -> ~16.7ms).
///
/// Rates above [`MAX_FPS`] yield a zero duration.
pub fn render_interval_for(fps: u32) -> Duration {
    Duration::from_micros(1_000_000 / fps.max(1) as u64)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
