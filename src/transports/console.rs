//! Console transport implementation
//!
//! [`ConsoleTransport`] wraps a [`Console`]: an object with one write method
//! per severity. The rendered message is passed through unmodified; what the
//! console does with it is up to the console.

use crate::core::{LogLevel, LoggerError, Result, Transport};
use parking_lot::Mutex;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::Arc;

#[cfg(feature = "console")]
use colored::Colorize;

/// Sink contract wrapped by [`ConsoleTransport`]
pub trait Console: Send + Sync {
    fn debug(&self, message: &str) -> io::Result<()>;
    fn info(&self, message: &str) -> io::Result<()>;
    fn warn(&self, message: &str) -> io::Result<()>;
    fn error(&self, message: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for Arc<C> {
    fn debug(&self, message: &str) -> io::Result<()> {
        (**self).debug(message)
    }

    fn info(&self, message: &str) -> io::Result<()> {
        (**self).info(message)
    }

    fn warn(&self, message: &str) -> io::Result<()> {
        (**self).warn(message)
    }

    fn error(&self, message: &str) -> io::Result<()> {
        (**self).error(message)
    }
}

/// Console over two writers: debug/info go to `out`, warn/error to `err`.
///
/// Each message is written followed by a newline and the stream is flushed.
pub struct StreamConsole<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
    #[cfg(feature = "console")]
    use_colors: bool,
}

/// Console backed by the process standard streams
pub type StdConsole = StreamConsole<Stdout, Stderr>;

impl StreamConsole<Stdout, Stderr> {
    pub fn std() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> StreamConsole<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    /// Colour each line by its severity
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Consume the console and hand back both writers
    pub fn into_inner(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    fn paint(&self, message: &str, level: LogLevel) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            return message.color(level.color_code()).to_string();
        }
        let _ = level;
        message.to_string()
    }

    fn write_line<W: Write>(writer: &Mutex<W>, line: &str) -> io::Result<()> {
        let mut writer = writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl<O, E> Console for StreamConsole<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    fn debug(&self, message: &str) -> io::Result<()> {
        Self::write_line(&self.out, &self.paint(message, LogLevel::Debug))
    }

    fn info(&self, message: &str) -> io::Result<()> {
        Self::write_line(&self.out, &self.paint(message, LogLevel::Info))
    }

    fn warn(&self, message: &str) -> io::Result<()> {
        Self::write_line(&self.err, &self.paint(message, LogLevel::Warn))
    }

    fn error(&self, message: &str) -> io::Result<()> {
        Self::write_line(&self.err, &self.paint(message, LogLevel::Error))
    }
}

type SinkFn = Box<dyn Fn(&str) -> io::Result<()> + Send + Sync>;

/// A console assembled at runtime from per-severity closures.
///
/// Every method is optional while building; [`ConsoleTransport::from_sinks`]
/// rejects a table that lacks any of the four.
#[derive(Default)]
pub struct ConsoleSinks {
    debug: Option<SinkFn>,
    info: Option<SinkFn>,
    warn: Option<SinkFn>,
    error: Option<SinkFn>,
}

impl ConsoleSinks {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn debug<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) -> io::Result<()> + Send + Sync + 'static,
    {
        self.debug = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn info<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) -> io::Result<()> + Send + Sync + 'static,
    {
        self.info = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn warn<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) -> io::Result<()> + Send + Sync + 'static,
    {
        self.warn = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn error<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) -> io::Result<()> + Send + Sync + 'static,
    {
        self.error = Some(Box::new(sink));
        self
    }

    /// Names of the severity methods not yet supplied
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.debug.is_none(), LogLevel::Debug),
            (self.info.is_none(), LogLevel::Info),
            (self.warn.is_none(), LogLevel::Warn),
            (self.error.is_none(), LogLevel::Error),
        ]
        .into_iter()
        .filter(|(absent, _)| *absent)
        .map(|(_, level)| level.sink_name())
        .collect()
    }

    fn validate(self) -> Result<SinkTable> {
        let missing = self.missing();
        match (self.debug, self.info, self.warn, self.error) {
            (Some(debug), Some(info), Some(warn), Some(error)) => Ok(SinkTable {
                debug,
                info,
                warn,
                error,
            }),
            _ => Err(LoggerError::invalid_sink(missing)),
        }
    }
}

struct SinkTable {
    debug: SinkFn,
    info: SinkFn,
    warn: SinkFn,
    error: SinkFn,
}

impl Console for SinkTable {
    fn debug(&self, message: &str) -> io::Result<()> {
        (self.debug)(message)
    }

    fn info(&self, message: &str) -> io::Result<()> {
        (self.info)(message)
    }

    fn warn(&self, message: &str) -> io::Result<()> {
        (self.warn)(message)
    }

    fn error(&self, message: &str) -> io::Result<()> {
        (self.error)(message)
    }
}

/// Transport writing to a [`Console`], one method per severity
pub struct ConsoleTransport {
    console: Arc<dyn Console>,
}

impl ConsoleTransport {
    /// Transport over the process standard streams
    pub fn new() -> Self {
        Self::with_console(StdConsole::std())
    }

    pub fn with_console<C: Console + 'static>(console: C) -> Self {
        Self {
            console: Arc::new(console),
        }
    }

    /// Transport over a runtime-assembled sink table.
    ///
    /// Fails with [`LoggerError::InvalidSink`] unless all four severity
    /// methods are present.
    ///
    /// # Example
    ///
    /// ```
    /// use structured_logger::transports::{ConsoleSinks, ConsoleTransport};
    ///
    /// let incomplete = ConsoleSinks::new().info(|_| Ok(()));
    /// assert!(ConsoleTransport::from_sinks(incomplete).is_err());
    /// ```
    pub fn from_sinks(sinks: ConsoleSinks) -> Result<Self> {
        Ok(Self::with_console(sinks.validate()?))
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ConsoleTransport {
    fn log(&self, message: &str, level: LogLevel) -> Result<()> {
        let written = match level {
            LogLevel::Debug => self.console.debug(message),
            LogLevel::Info => self.console.info(message),
            LogLevel::Warn => self.console.warn(message),
            LogLevel::Error => self.console.error(message),
        };
        written.map_err(|e| LoggerError::sink_write(level, e))
    }

    fn name(&self) -> &str {
        "console"
    }
}
