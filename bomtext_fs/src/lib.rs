//! # bomtext_fs - BOM-aware text file access
//!
//! Opens text files, resolves their encoding from a leading byte-order mark
//! (or a configured default) and exposes line, whole-file, paginated and tail
//! reads, plus writes that keep or set the signature.
//!
//! Modules:
//! - `bom` for the signature table and in-memory detection
//! - `pushback` for the unread buffer used while probing
//! - `resolve` for probing streams and files
//! - `encoding` for streaming decode and one-shot encode
//! - `file` for sessions, scans and the raw cursors
//! - `logger` for the injectable activity sink

pub mod bom;
pub mod encoding;
mod error;
pub mod file;
pub mod logger;
pub mod pushback;
pub mod resolve;

pub use bom::{BOM_TABLE, BomProbe, MAX_BOM_LENGTH, bom_bytes, detect_bom};
pub use encoding::{EncodeError, Encoding, UnknownEncoding};
pub use error::{FileTextError, FileTextResult};
pub use file::{
    EolType, FileText, FileTextConfig, PageRequest, TailResult, TextFileReader, TextPage,
};
pub use logger::{ActivityLogger, Level, NullLogger, TracingLogger};
pub use pushback::PushbackReader;
pub use resolve::{EncodingResolver, ProbePolicy, Resolution};
