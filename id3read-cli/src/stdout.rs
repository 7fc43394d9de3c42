//! Colored terminal output, both for tag listings and for log records.

use id3read::id3v2::Version;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static LOGGER: PedanticLogger = PedanticLogger;

/// A logger that colors records by level and nothing else.
///
/// Info goes to stdout so that it interleaves with the listing, while warnings and errors
/// go to stderr.
pub struct PedanticLogger;

impl PedanticLogger {
    pub fn setup(level: LevelFilter) {
        // Only fails if a logger was already installed, in which case that one is used.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(level);
    }
}

impl Log for PedanticLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut spec = ColorSpec::new();

        let mut out = match record.level() {
            Level::Info => {
                spec.set_dimmed(true);
                StandardStream::stdout(ColorChoice::Auto)
            }

            Level::Warn => {
                spec.set_fg(Some(Color::Red)).set_intense(true);
                StandardStream::stderr(ColorChoice::Auto)
            }

            Level::Error => {
                spec.set_fg(Some(Color::Red));
                StandardStream::stderr(ColorChoice::Auto)
            }

            Level::Debug | Level::Trace => StandardStream::stderr(ColorChoice::Auto),
        };

        let module = record.module_path().unwrap_or_default();

        // A broken terminal is not worth aborting over.
        let _ = write_styled(&mut out, &spec, format_args!("{}: {}", module, record.args()))
            .and_then(|_| writeln!(out));
    }

    fn flush(&self) {}
}

/// The listing printed for each file.
pub struct Listing {
    out: StandardStream,
}

impl Listing {
    pub fn new() -> Self {
        Listing {
            out: StandardStream::stdout(ColorChoice::Auto),
        }
    }

    /// Prints the line that opens the listing of a tag, such as `song.mp3 [ID3v2.4.0]:`.
    pub fn tag(&mut self, path: &Path, version: Version, revision: u8) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true).set_intense(true).set_fg(Some(Color::Blue));

        write_styled(
            &mut self.out,
            &spec,
            format_args!(
                "{} [ID3v2.{}.{}]:",
                path.display(),
                version.major(),
                revision
            ),
        )?;

        writeln!(self.out)
    }

    /// Prints an indented `name: value` line under the current tag.
    pub fn field(&mut self, name: impl Display, value: impl Display) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));

        write_styled(&mut self.out, &spec, format_args!("  {}:", name))?;
        writeln!(self.out, " {}", value)
    }
}

/// Reports a file that could not be listed.
pub fn file_error(path: &str, err: impl Display) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);

    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red)).set_bold(true);

    let _ = write_styled(&mut stderr, &spec, "error")
        .and_then(|_| writeln!(stderr, ": {}: {}", path, err));
}

fn write_styled(out: &mut impl WriteColor, spec: &ColorSpec, text: impl Display) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}
