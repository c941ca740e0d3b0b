//! Byte stream with a small unread buffer, so probing never consumes content.

use std::io::{self, Read};

use crate::bom::MAX_BOM_LENGTH;

/// Wraps a reader and lets up to [`MAX_BOM_LENGTH`] bytes be pushed back.
///
/// Pushed-back bytes are served before the inner reader is touched again, so
/// what follows an unread is byte-identical to an unprobed stream.
#[derive(Debug)]
pub struct PushbackReader<R> {
    inner: R,
    pushed: [u8; MAX_BOM_LENGTH],
    start: usize,
    end: usize,
}

impl<R: Read> PushbackReader<R> {
    pub fn new(inner: R) -> Self {
        PushbackReader {
            inner,
            pushed: [0; MAX_BOM_LENGTH],
            start: 0,
            end: 0,
        }
    }

    /// Bytes waiting to be read again.
    pub fn pending(&self) -> &[u8] {
        &self.pushed[self.start..self.end]
    }

    /// Push `bytes` back in front of anything still pending.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] when the total would exceed
    /// the buffer capacity; the stream is left untouched in that case.
    pub fn unread(&mut self, bytes: &[u8]) -> io::Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let pending = self.end - self.start;
        if pending + bytes.len() > MAX_BOM_LENGTH {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "pushback buffer full: {} pending, {} more requested, capacity {}",
                    pending,
                    bytes.len(),
                    MAX_BOM_LENGTH
                ),
            ));
        }

        let mut merged = [0u8; MAX_BOM_LENGTH];
        merged[..bytes.len()].copy_from_slice(bytes);
        merged[bytes.len()..bytes.len() + pending].copy_from_slice(self.pending());
        self.pushed = merged;
        self.start = 0;
        self.end = bytes.len() + pending;
        Ok(())
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the inner reader; pending bytes are discarded.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for PushbackReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.start < self.end {
            let n = (self.end - self.start).min(buf.len());
            buf[..n].copy_from_slice(&self.pushed[self.start..self.start + n]);
            self.start += n;
            return Ok(n);
        }
        self.inner.read(buf)
    }
}
