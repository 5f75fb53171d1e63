use std::{
    fs::File,
    io::{self, IsTerminal},
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

/// Filter used when neither `--log-level` nor `RUST_LOG` is given.
/// Kept quiet so log lines do not interleave with the order form.
const DEFAULT_FILTER: &str = "warn";

/// Where log records go and how many of them.
#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    /// `EnvFilter` directive. Overrides `RUST_LOG` when set.
    pub filter: Option<String>,
    /// Append records to this file as well as stderr.
    pub file: Option<PathBuf>,
}

// --- Formatter ---

/// `<local time> <LEVEL> <file:line> <fields>`, coloured when the writer
/// supports ANSI.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        if ansi {
            let colour = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m \x1b[{colour}m{:>5}\x1b[0m ",
                meta.level()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Runtime filter handle ---

type SetFilterFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

static SET_LOG_LEVEL: OnceLock<SetFilterFn> = OnceLock::new();

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter '{directive}'"))
}

fn initial_filter(settings: &LogSettings) -> Result<EnvFilter> {
    match &settings.filter {
        Some(directive) => parse_filter(directive),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

fn store_filter_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_LOG_LEVEL.set(Box::new(move |filter: EnvFilter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    }));
}

// --- Public API ---

/// Replaces the active log filter. Accepts a bare level ("debug") or any
/// `EnvFilter` directive ("pizza_core=debug,warn").
///
/// The directive is checked before anything else, so a bad one is reported
/// even when logging has not been set up.
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = parse_filter(directive)?;
    match SET_LOG_LEVEL.get() {
        Some(set) => set(filter),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// - stderr: coloured on a terminal, plain when redirected.
/// - file: plain text, appended, only when `settings.file` is set.
///
/// A second call leaves the first subscriber in place.
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    let (level_filter, level_handle) = reload::Layer::new(initial_filter(settings)?);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match &settings.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LocalFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        store_filter_handle(level_handle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_filter_rejects_bad_directive() {
        let settings = LogSettings {
            filter: Some("pizza_core=notalevel".to_string()),
            file: None,
        };

        assert!(initial_filter(&settings).is_err());
    }

    #[test]
    fn initial_filter_accepts_bare_level() {
        let settings = LogSettings {
            filter: Some("debug".to_string()),
            file: None,
        };

        assert!(initial_filter(&settings).is_ok());
    }

    // Nothing in this test binary installs the global subscriber, so the
    // reload handle is never set.

    #[test]
    fn set_log_level_rejects_bad_directive() {
        let error = set_log_level("pizza_core=notalevel").unwrap_err();

        assert!(error.to_string().contains("invalid log filter 'pizza_core=notalevel'"));
    }

    #[test]
    fn set_log_level_before_init_is_an_error() {
        let error = set_log_level("debug").unwrap_err();

        assert_eq!(error.to_string(), "logging not yet initialized");
    }
}
