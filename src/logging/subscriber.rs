//! Tracing subscriber: stderr console output plus a per-command log file.
use std::fmt;
use std::fs::File;
use std::io::Write as _;
use std::sync::{Mutex, PoisonError};

use tracing::field::Field;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::utils::{format_utc_datetime, format_utc_time, log_file_path, strip_ansi};

/// Target used for stage headers (`==> ...`).
pub const STAGE_TARGET: &str = "iconkit::stage";

const RULE: &str = "==========================================";

/// One event reduced to what iconkit prints.
struct Line {
    level: Level,
    stage: bool,
    message: String,
}

impl Line {
    fn from_event(event: &Event<'_>) -> Self {
        let metadata = event.metadata();
        let mut message = String::new();
        let mut visit = |field: &Field, value: &dyn fmt::Debug| {
            if field.name() == "message" {
                message = format!("{value:?}");
            }
        };
        event.record(&mut visit);
        Self {
            level: *metadata.level(),
            stage: *metadata.level() == Level::INFO && metadata.target() == STAGE_TARGET,
            message,
        }
    }

    /// `[HH:MM:SS]`-prefixed, ANSI-free form written to the log file.
    fn file_line(&self, time: &str) -> String {
        let msg = strip_ansi(&self.message);
        if self.stage {
            format!("[{time}] ==> {msg}")
        } else if self.level == Level::INFO {
            format!("[{time}]     {msg}")
        } else {
            let tag = self.level.as_str().to_ascii_lowercase();
            format!("[{time}]     [{tag}] {msg}")
        }
    }

    fn console_line(&self) -> String {
        let msg = &self.message;
        match self.level {
            Level::ERROR => format!("\x1b[31mERROR\x1b[0m {msg}"),
            Level::WARN => format!("\x1b[33mWARN\x1b[0m  {msg}"),
            Level::INFO if self.stage => format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m"),
            Level::INFO => format!("  {msg}"),
            _ => format!("  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Appends every event to `$XDG_CACHE_HOME/iconkit/<command>.log`.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<File>,
}

impl FileLayer {
    /// Truncate the log file for `command` and write a run header.
    ///
    /// Returns `None` if the file cannot be created.
    pub(super) fn new(command: &str) -> Option<Self> {
        let mut file = File::create(log_file_path(command)?).ok()?;
        writeln!(
            file,
            "{RULE}\niconkit {} {}\n{RULE}",
            super::version(),
            format_utc_datetime()
        )
        .ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let line = Line::from_event(event).file_line(&format_utc_time());
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(file, "{line}").ok();
    }
}

/// Console event format: coloured level prefixes and stage arrows.
struct ConsoleFormat;

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        writeln!(writer, "{}", Line::from_event(event).console_line())
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Console events go to stderr so command output on stdout stays
/// pipeable; `DEBUG` events reach the console only when `verbose` is set.
/// The file layer records everything at `DEBUG` and above.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(ConsoleFormat)
        .with_writer(std::io::stderr)
        .with_filter(console_level);

    let file_layer = FileLayer::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
