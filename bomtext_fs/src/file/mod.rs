//! File-level access built on the encoding layer.
//!
//! - `text` holds the `FileText` session (one cursor, read or write)
//! - `reader` runs whole-file scans on a private cursor
//! - `load` / `save` wrap the raw read and write streams
//! - `eol` splits decoded text into lines
//! - `page` holds the scan result types

pub mod eol;
pub mod load;
pub mod page;
pub mod reader;
pub mod save;
pub mod text;

pub use eol::{EolType, LineSplitter};
pub use load::{ReadCursor, load_with_encoding};
pub use page::{PageRequest, TailResult, TextPage};
pub use reader::{TextFileReader, line_matches};
pub use save::{WriteCursor, WritePlan};
pub use text::{FileText, FileTextConfig};
