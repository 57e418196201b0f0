//! Supporting helpers: diagnostic prefixes and line reading.

use owo_colors::OwoColorize;
use std::io::{self, BufRead, IsTerminal};

/// Whether to colorize output written to a stream.
pub fn use_colors(is_terminal: bool) -> bool {
    is_terminal && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors(io::stderr().is_terminal()) {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors(io::stderr().is_terminal()) {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Feed each line of `reader` to `f`.
///
/// Lines end at `\n`; one trailing `\r` is dropped and nothing else is
/// trimmed. Invalid UTF-8 is decoded lossily. A final line without a
/// terminator is still delivered. On a read error, lines already delivered
/// stay delivered and the error is returned.
pub fn for_each_line<R: BufRead>(mut reader: R, mut f: impl FnMut(String)) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        f(String::from_utf8_lossy(&buf).into_owned());
    }
}

/// Reader that yields `data` once, then fails every later read.
#[cfg(test)]
pub(crate) struct FailAfter<'a> {
    data: &'a [u8],
    done: bool,
}

#[cfg(test)]
impl<'a> FailAfter<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, done: false }
    }
}

#[cfg(test)]
impl io::Read for FailAfter<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.done {
            return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
        }
        self.done = true;
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        Ok(n)
    }
}
