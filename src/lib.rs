//! Right-leaning diagonal lines drawn one character at a time
//!
//! ```rust
//! // Prints a three-row diagonal to standard output.
//! fn main() -> std::io::Result<()> {
//!     diagonal_line::print(3)
//! }
//! ```
//!
//! ```text
//! \
//!  \
//!   \
//! ```
//!
//! The renderer itself only needs something that accepts characters (see [`Emit`]), so the same
//! output can be captured in memory:
//!
//! ```rust
//! let mut out = String::new();
//! diagonal_line::render(3, &mut |c| out.push(c));
//! assert_eq!(out, "\\\n \\\n  \\\n");
//! ```

use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::{iter, mem};

/// The character drawn once on every row.
pub const GLYPH: char = '\\';

/// The character that ends every row.
pub const LINE_TERMINATOR: char = '\n';

const SPACE: char = ' ';

/// A sink that accepts one character at a time.
///
/// The renderer never learns whether a character reached its destination. Sinks that can fail,
/// such as [`WriteEmitter`], keep the failure to themselves and report it once rendering is over.
///
/// Every `FnMut(char)` closure is a sink.
pub trait Emit {
    /// Appends `c` to the destination.
    fn emit(&mut self, c: char);
}

impl<F: FnMut(char)> Emit for F {
    #[inline]
    fn emit(&mut self, c: char) {
        self(c)
    }
}

/// Emits the diagonal for `count` rows into `emit`.
///
/// Row `k` (counting from 1) is `k - 1` spaces, the [`GLYPH`] and the [`LINE_TERMINATOR`]. A
/// `count` of zero or less emits a single [`LINE_TERMINATOR`] and nothing else.
///
/// # Examples
///
/// ```rust
/// let mut out = String::new();
/// diagonal_line::render(0, &mut |c| out.push(c));
/// assert_eq!(out, "\n");
/// ```
#[tracing::instrument(level = "trace", skip(emit))]
pub fn render<E: Emit + ?Sized>(count: i64, emit: &mut E) {
    if count <= 0 {
        tracing::debug!("non-positive count, emitting a blank line");
        emit.emit(LINE_TERMINATOR);
    } else {
        for row in 1..=count {
            emit_row(row, emit);
        }
    }
}

fn emit_row<E: Emit + ?Sized>(row: i64, emit: &mut E) {
    for _ in 1..row {
        emit.emit(SPACE);
    }
    emit.emit(GLYPH);
    emit.emit(LINE_TERMINATOR);
}

/// Prints the diagonal for `count` rows to standard output and flushes it.
///
/// # Errors
///
/// Returns the first error raised while writing to or flushing standard output.
pub fn print(count: i64) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    new(count).write_to(&mut stdout)?;
    stdout.flush()
}

/// Returns a diagonal of `count` rows.
///
/// See the [crate documentation](crate) or [`Diagonal`] for usage examples.
pub fn new(count: i64) -> Diagonal {
    Diagonal { count }
}

/// A diagonal line of a given number of rows, ready to be rendered in several ways.
///
/// # Examples
///
/// ```rust
/// let diagonal = diagonal_line::new(2);
/// assert_eq!(diagonal.to_string(), "\\\n \\\n");
/// assert_eq!(diagonal.line_iter().collect::<Vec<_>>(), ["\\\n", " \\\n"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diagonal {
    count: i64,
}

impl Diagonal {
    /// Returns the requested number of rows as given, which may be zero or negative.
    pub fn count(self) -> i64 {
        self.count
    }

    /// Emits the diagonal into `emit`. Same as [`render`].
    pub fn render<E: Emit + ?Sized>(self, emit: &mut E) {
        render(self.count, emit)
    }

    /// Returns an iterator over the rendered lines.
    ///
    /// Each line keeps its trailing [`LINE_TERMINATOR`], so concatenating the lines gives exactly
    /// what [`render`](Self::render) emits. A non-positive count yields a single `"\n"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// for (i, line) in diagonal_line::new(3).line_iter().enumerate() {
    ///     print!("[{}] {}", i, line);
    /// }
    /// assert_eq!(diagonal_line::new(-1).line_iter().collect::<Vec<_>>(), ["\n"]);
    /// ```
    pub fn line_iter(self) -> impl Iterator<Item = String> {
        let mut blank = self.count <= 0;
        let mut rows = 1..=self.count;
        iter::from_fn(move || {
            if mem::take(&mut blank) {
                return Some(LINE_TERMINATOR.to_string());
            }
            let row = rows.next()?;
            let mut line = String::new();
            emit_row(row, &mut |c| line.push(c));
            Some(line)
        })
    }

    /// Writes the diagonal to `writer` as UTF-8.
    ///
    /// Rendering always runs to the end. Once a write fails, the remaining characters are
    /// dropped and the first error is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `writer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut buf = Vec::new();
    /// diagonal_line::new(2).write_to(&mut buf)?;
    /// assert_eq!(buf, b"\\\n \\\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_to<W: Write>(self, writer: W) -> io::Result<()> {
        let mut emitter = WriteEmitter::new(writer);
        self.render(&mut emitter);
        emitter.finish()?;
        Ok(())
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.render(&mut |c| {
            if result.is_ok() {
                result = f.write_char(c);
            }
        });
        result
    }
}

/// An [`Emit`] sink that writes characters to an [`io::Write`] as UTF-8.
///
/// The first write error is kept and every character after it is dropped without touching the
/// writer again. The error comes back from [`finish`](Self::finish).
#[derive(Debug)]
pub struct WriteEmitter<W> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Returns the writer, or the first error raised while emitting into it.
    ///
    /// The writer is not flushed.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.writer),
        }
    }
}

impl<W: Write> Emit for WriteEmitter<W> {
    fn emit(&mut self, c: char) {
        if self.error.is_some() {
            return;
        }
        let mut buf = [0; 4];
        if let Err(e) = self.writer.write_all(c.encode_utf8(&mut buf).as_bytes()) {
            tracing::warn!(error = %e, "write failed, dropping the rest of the output");
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn capture(count: i64) -> String {
        let mut out = String::new();
        render(count, &mut |c| out.push(c));
        out
    }

    #[test_case(i64::MIN, "\n" ; "minimum")]
    #[test_case(-5, "\n" ; "negative")]
    #[test_case(0, "\n" ; "zero")]
    #[test_case(1, "\\\n" ; "one")]
    #[test_case(3, "\\\n \\\n  \\\n" ; "three")]
    fn renders(count: i64, expected: &str) {
        assert_eq!(capture(count), expected);
    }

    #[test]
    fn row_k_has_k_minus_one_leading_spaces() {
        for count in 1..=40 {
            let out = capture(count);
            let lines: Vec<_> = out.split_inclusive(LINE_TERMINATOR).collect();
            assert_eq!(lines.len(), usize::try_from(count).unwrap());
            for (i, line) in lines.iter().enumerate() {
                assert_eq!(*line, format!("{}\\\n", " ".repeat(i)));
            }
        }
    }

    #[test]
    fn emits_triangular_number_of_spaces() {
        let out = capture(10);
        assert_eq!(out.chars().filter(|&c| c == SPACE).count(), 45);
        assert_eq!(out.chars().filter(|&c| c == GLYPH).count(), 10);
        assert_eq!(out.chars().filter(|&c| c == LINE_TERMINATOR).count(), 10);
        assert_eq!(out.len(), 65);
    }

    #[test]
    fn same_count_same_output() {
        for count in -3..=12 {
            assert_eq!(capture(count), capture(count));
        }
    }

    #[test]
    fn next_count_appends_one_row() {
        for n in 1..=20 {
            let spaces = " ".repeat(usize::try_from(n).unwrap());
            assert_eq!(capture(n + 1), format!("{}{}\\\n", capture(n), spaces));
        }
    }

    #[test]
    fn only_the_sink_observes_output() {
        let mut calls = 0;
        render(4, &mut |_: char| calls += 1);
        // 6 spaces, 4 glyphs, 4 terminators
        assert_eq!(calls, 14);
    }

    #[test_case(-2 ; "negative")]
    #[test_case(0 ; "zero")]
    #[test_case(1 ; "one")]
    #[test_case(7 ; "seven")]
    fn line_iter_agrees_with_render(count: i64) {
        let diagonal = new(count);
        assert_eq!(diagonal.count(), count);
        assert_eq!(diagonal.line_iter().collect::<String>(), capture(count));
        assert_eq!(diagonal.to_string(), capture(count));
    }

    #[test]
    fn line_iter_is_fused_after_last_row() {
        let mut lines = new(0).line_iter();
        assert_eq!(lines.next().as_deref(), Some("\n"));
        assert_eq!(lines.next(), None);
        assert_eq!(lines.next(), None);

        let mut lines = new(2).line_iter();
        assert_eq!(lines.next().as_deref(), Some("\\\n"));
        assert_eq!(lines.next().as_deref(), Some(" \\\n"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn write_to_writes_utf8_bytes() {
        let mut buf = Vec::new();
        new(3).write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), capture(3));
    }

    #[test]
    fn display_composes_with_surrounding_text() {
        assert_eq!(format!("{}", new(-9)), "\n");
        assert_eq!(format!("[{}]", new(1)), "[\\\n]");
    }
}
