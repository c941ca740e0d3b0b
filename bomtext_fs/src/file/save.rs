//! Write side: signature handling and immediately-flushed encoded writes.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::encoding::Encoding;

/// Outcome of the write-encoding decision for one `open_write` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritePlan {
    pub encoding: Encoding,
    /// Whether the file's existing bytes are kept (append to an existing file).
    pub append: bool,
}

/// An open file positioned for writing encoded text.
#[derive(Debug)]
pub struct WriteCursor {
    file: File,
    encoding: Encoding,
    bytes_written: u64,
    wrote_bom: bool,
}

impl WriteCursor {
    /// Open `path` according to `plan`.
    ///
    /// Overwrites and new files are truncated and start with the encoding's
    /// signature. Appends leave everything already on disk untouched.
    pub fn open(path: &Path, plan: WritePlan) -> io::Result<Self> {
        if plan.append && path.exists() {
            let file = OpenOptions::new().append(true).open(path)?;
            return Ok(WriteCursor {
                file,
                encoding: plan.encoding,
                bytes_written: 0,
                wrote_bom: false,
            });
        }

        let mut file = File::create(path)?;
        let bom = plan.encoding.bom();
        if !bom.is_empty() {
            file.write_all(bom)?;
            file.flush()?;
        }
        Ok(WriteCursor {
            file,
            encoding: plan.encoding,
            bytes_written: bom.len() as u64,
            wrote_bom: !bom.is_empty(),
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn wrote_bom(&self) -> bool {
        self.wrote_bom
    }

    /// Bytes written through this cursor, signature included.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Write already-encoded bytes and flush them out.
    pub fn write_encoded(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.file.write_all(bytes)?;
        self.file.flush()?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }
}
