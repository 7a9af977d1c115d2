mod config;
mod error;
mod install;
mod object;

pub use config::{ENV_LOG_COLOR, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_TZ, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, LoggerTimer, init_local_offset};

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Can succeed once per process; later calls return
/// [`LoggerError::AlreadyInitialized`]. With [`LoggerTimeZone::Local`], call
/// [`init_local_offset`] first, before any thread is spawned.
///
/// ```rust
/// use placer_observe::{LoggerConfig, init_logger};
///
/// let cfg = LoggerConfig::from_env().unwrap_or_default();
/// init_logger(&cfg).expect("first initialization succeeds");
/// tracing::debug!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    if cfg.tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    match cfg.format {
        LoggerFormat::Text => install::install_text(cfg),
        LoggerFormat::Json => install::install_json(cfg),
        LoggerFormat::Journald => install::install_journald(cfg),
    }
}
