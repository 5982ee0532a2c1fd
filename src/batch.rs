use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{debug, info, warn};

use crate::{error::{BatchError, ExprError}, evaluate, util::num::format_number};

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "input.txt";
/// Output file used when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// A blank or separator line, copied through after trimming.
    Passthrough(String),
    /// The expression evaluated to this value.
    Value(f64),
    /// The expression failed; the batch carries on with the next line.
    Failed(ExprError),
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough(line) => write!(f, "{line}"),
            Self::Value(value) => write!(f, "{}", format_number(*value)),
            Self::Failed(e) => write!(f, "Error: {e}"),
        }
    }
}

/// Counts of line outcomes for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines that produced a value.
    pub evaluated:      usize,
    /// Blank and separator lines.
    pub passed_through: usize,
    /// Lines that produced an `Error:` line.
    pub failed:         usize,
}

impl Summary {
    /// Total number of lines processed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.evaluated + self.passed_through + self.failed
    }

    fn record(&mut self, outcome: &LineOutcome) {
        match outcome {
            LineOutcome::Passthrough(_) => self.passed_through += 1,
            LineOutcome::Value(_) => self.evaluated += 1,
            LineOutcome::Failed(_) => self.failed += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{} lines: {} evaluated, {} passed through, {} failed",
               self.total(),
               self.evaluated,
               self.passed_through,
               self.failed)
    }
}

/// Returns `true` for lines that are copied to the output unchanged: empty
/// lines and lines made only of `-`.
///
/// The line is expected to be trimmed already.
///
/// # Example
/// ```
/// use stackcalc::batch::is_passthrough;
///
/// assert!(is_passthrough(""));
/// assert!(is_passthrough("-----"));
/// assert!(!is_passthrough("-- 1"));
/// ```
#[must_use]
pub fn is_passthrough(line: &str) -> bool {
    line.chars().all(|c| c == '-')
}

/// Processes one raw input line.
///
/// Surrounding whitespace is trimmed first. Separator and blank lines pass
/// through; everything else is evaluated.
///
/// # Example
/// ```
/// use stackcalc::batch::process_line;
///
/// assert_eq!(process_line("  6 / 3 ").to_string(), "2");
/// assert_eq!(process_line("5 / 0").to_string(), "Error: Division by zero");
/// assert_eq!(process_line("-----").to_string(), "-----");
/// ```
#[must_use]
pub fn process_line(line: &str) -> LineOutcome {
    let expr = line.trim();

    if is_passthrough(expr) {
        return LineOutcome::Passthrough(expr.to_string());
    }

    match evaluate(expr) {
        Ok(value) => LineOutcome::Value(value),
        Err(e) => LineOutcome::Failed(e),
    }
}

/// Processes every line of `reader`, writing one output line per input line
/// to `writer` in the same order.
///
/// Per-line failures are written as `Error: <message>` lines and never stop
/// the run. Lines are decoded one at a time; bytes that are not valid UTF-8
/// become replacement characters, so such a line fails on its own as an
/// invalid token.
///
/// # Errors
/// Returns the first I/O error raised by the reader or the writer.
///
/// # Example
/// ```
/// use stackcalc::batch::process_lines;
///
/// let input = "2 + 3 * 4\n---\n1 / 0\n";
/// let mut output = Vec::new();
/// let summary = process_lines(input.as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "14\n---\nError: Division by zero\n");
/// assert_eq!(summary.failed, 1);
/// ```
pub fn process_lines<R, W>(reader: R, mut writer: W) -> io::Result<Summary>
    where R: BufRead,
          W: Write
{
    let mut summary = Summary::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let outcome = process_line(&String::from_utf8_lossy(&line));

        if let LineOutcome::Failed(e) = &outcome {
            warn!(line = index + 1, "{e}");
        }

        writeln!(writer, "{outcome}")?;
        summary.record(&outcome);
    }

    writer.flush()?;
    Ok(summary)
}

/// Processes the file at `input` and writes the results to `output`.
///
/// The input is opened and its first block read before the output is
/// touched, so a missing or unreadable input (such as a directory) leaves no
/// output file behind.
///
/// # Errors
/// - `BatchError::InputNotFound` if `input` does not exist.
/// - `BatchError::Io` if reading or writing fails.
pub fn process_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Summary, BatchError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    if !input.exists() {
        return Err(BatchError::InputNotFound { path: input.to_path_buf() });
    }

    let io_error = |source| BatchError::Io { input: input.to_path_buf(),
                                             output: output.to_path_buf(),
                                             source };

    debug!("processing '{}' into '{}'", input.display(), output.display());

    let mut reader = File::open(input).map(BufReader::new).map_err(io_error)?;
    reader.fill_buf().map_err(io_error)?;

    let writer = File::create(output).map(BufWriter::new).map_err(io_error)?;
    let summary = process_lines(reader, writer).map_err(io_error)?;

    info!("{summary}");
    Ok(summary)
}
