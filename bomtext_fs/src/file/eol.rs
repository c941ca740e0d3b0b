//! End-of-line handling: splitting decoded text into lines, and the separator
//! used when writing them.

use std::io::{self, BufRead};

/// Line terminator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EolType {
    /// Line Feed (Unix/Linux/macOS) - \n
    Lf,
    /// Carriage Return + Line Feed (Windows) - \r\n
    Crlf,
    /// Carriage Return (old macOS) - \r
    Cr,
}

impl EolType {
    /// Separator of the platform this binary was built for.
    pub const fn native() -> Self {
        if cfg!(windows) { EolType::Crlf } else { EolType::Lf }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            EolType::Lf => "\n",
            EolType::Crlf => "\r\n",
            EolType::Cr => "\r",
        }
    }
}

/// Splits a UTF-8 [`BufRead`] into lines ended by LF, CRLF or a lone CR.
///
/// Terminators are stripped. A CR that ends one buffer and an LF that starts
/// the next still count as a single CRLF. A trailing terminator does not
/// produce an empty last line.
#[derive(Debug)]
pub struct LineSplitter<R> {
    inner: R,
    skip_lf: bool,
}

impl<R: BufRead> LineSplitter<R> {
    pub fn new(inner: R) -> Self {
        LineSplitter {
            inner,
            skip_lf: false,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Next line, or `None` at end of stream.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut saw_content = false;

        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                self.skip_lf = false;
                break;
            }

            let mut start = 0;
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    start = 1;
                }
            }

            match available[start..]
                .iter()
                .position(|&b| b == b'\n' || b == b'\r')
            {
                Some(offset) => {
                    let end = start + offset;
                    bytes.extend_from_slice(&available[start..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.inner.consume(end + 1);
                    return into_line(bytes).map(Some);
                }
                None => {
                    let len = available.len();
                    bytes.extend_from_slice(&available[start..]);
                    saw_content |= len > start;
                    self.inner.consume(len);
                }
            }
        }

        if saw_content {
            into_line(bytes).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<R: BufRead> Iterator for LineSplitter<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

// Terminators are ASCII, so a split never lands inside a UTF-8 sequence.
fn into_line(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
