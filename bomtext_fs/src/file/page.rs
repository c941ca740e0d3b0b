//! Value types produced by the paginator and the tail engine.

use crate::error::{FileTextError, FileTextResult};

/// Offset and size of a page, validated from signed caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(offset: usize, size: usize) -> Self {
        PageRequest { offset, size }
    }

    /// Negative values are rejected rather than clamped.
    pub fn try_new(offset: i64, size: i64) -> FileTextResult<Self> {
        let offset = usize::try_from(offset).map_err(|_| FileTextError::InvalidArgument {
            op: "page",
            reason: format!("line offset must not be negative (got {offset})"),
        })?;
        let size = usize::try_from(size).map_err(|_| FileTextError::InvalidArgument {
            op: "page",
            reason: format!("page size must not be negative (got {size})"),
        })?;
        Ok(PageRequest { offset, size })
    }
}

/// A window of matching lines, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPage {
    offset: usize,
    page_size: usize,
    filter: Option<String>,
    lines: Vec<String>,
    matched_seen: u64,
    has_more: bool,
}

impl TextPage {
    pub(crate) fn new(
        request: PageRequest,
        filter: Option<&str>,
        lines: Vec<String>,
        matched_seen: u64,
        has_more: bool,
    ) -> Self {
        TextPage {
            offset: request.offset,
            page_size: request.size,
            filter: filter.map(str::to_string),
            lines,
            matched_seen,
            has_more,
        }
    }

    /// Line offset that was requested.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of lines that was requested.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines actually returned; below `page_size` at end of data.
    pub fn returned(&self) -> usize {
        self.lines.len()
    }

    /// Matching lines the scan went through: skipped plus returned.
    pub fn matched_seen(&self) -> u64 {
        self.matched_seen
    }

    /// Whether at least one more matching line follows this page.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "offset": self.offset,
            "pageSize": self.page_size,
            "returned": self.returned(),
            "grep": self.filter,
            "matchedSeen": self.matched_seen,
            "hasMore": self.has_more,
            "lines": self.lines,
        })
    }
}

/// The last lines of a file, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailResult {
    requested: usize,
    lines: Vec<String>,
    matched_total: u64,
}

impl TailResult {
    pub(crate) fn new(requested: usize, lines: Vec<String>, matched_total: u64) -> Self {
        TailResult {
            requested,
            lines,
            matched_total,
        }
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Matching lines in the whole file.
    pub fn matched_total(&self) -> u64 {
        self.matched_total
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
