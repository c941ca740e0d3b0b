//! Whole-file scans on a private cursor: line counts, pages and tails.
//!
//! Every call opens the file afresh, scans from the first line and closes it
//! again, so results never depend on another open cursor.

use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use super::load::ReadCursor;
use super::page::{PageRequest, TailResult, TextPage};
use super::text::FileTextConfig;
use crate::error::{FileTextError, FileTextResult};
use crate::logger::{ActivityLogger, Level, null_logger};
use crate::resolve::EncodingResolver;

/// Whether `line` passes `filter`; no filter or an empty one matches all.
pub fn line_matches(line: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(needle) if !needle.is_empty() => line.contains(needle),
        _ => true,
    }
}

fn effective_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|needle| !needle.is_empty())
}

/// Scanning reader for one file path.
#[derive(Clone)]
pub struct TextFileReader {
    path: PathBuf,
    resolver: EncodingResolver,
    logger: Arc<dyn ActivityLogger>,
}

impl TextFileReader {
    pub fn new(path: impl Into<PathBuf>, config: &FileTextConfig) -> Self {
        TextFileReader {
            path: path.into(),
            resolver: EncodingResolver::new(config.default_encoding, config.probe_policy),
            logger: null_logger(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.resolver = self.resolver.with_logger(Arc::clone(&logger));
        self.logger = logger;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Feed every matching line to `visit` until it breaks or the file ends.
    fn scan<F>(&self, filter: Option<&str>, op: &'static str, mut visit: F) -> FileTextResult<()>
    where
        F: FnMut(String) -> ControlFlow<()>,
    {
        let mut cursor = ReadCursor::open(&self.path, &self.resolver)
            .map_err(FileTextError::io(&self.path, op))?;
        cursor
            .for_each_line(|line| {
                if line_matches(&line, filter) {
                    visit(line)
                } else {
                    ControlFlow::Continue(())
                }
            })
            .map_err(FileTextError::io(&self.path, op))
    }

    /// Number of lines, or of lines containing `filter`.
    pub fn count_lines(&self, filter: Option<&str>) -> FileTextResult<u64> {
        let started = Instant::now();
        let filter = effective_filter(filter);
        let mut count = 0u64;
        self.scan(filter, "count lines", |_| {
            count += 1;
            ControlFlow::Continue(())
        })?;
        if self.logger.is_enabled(Level::Debug) {
            self.logger.debug(format_args!(
                "counted {} lines in '{}' (grep: {:?}) in {:?}",
                count,
                self.path.display(),
                filter,
                started.elapsed()
            ));
        }
        Ok(count)
    }

    /// Lines `offset..offset + size` among the matching ones.
    ///
    /// The file is always opened, so a missing file fails whatever the size.
    /// A zero-sized page stops as soon as the offset is reached and does not
    /// look ahead, so its `has_more` is always false.
    pub fn page(
        &self,
        offset: usize,
        size: usize,
        filter: Option<&str>,
    ) -> FileTextResult<TextPage> {
        self.page_request(PageRequest::new(offset, size), filter)
    }

    pub fn page_request(
        &self,
        request: PageRequest,
        filter: Option<&str>,
    ) -> FileTextResult<TextPage> {
        let started = Instant::now();
        let filter = effective_filter(filter);
        let PageRequest { offset, size } = request;

        let mut skipped = 0usize;
        let mut lines = Vec::with_capacity(size.min(1024));
        let mut has_more = false;

        self.scan(filter, "read page", |line| {
            if skipped < offset {
                skipped += 1;
                return if size == 0 && skipped == offset {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                };
            }
            if lines.len() < size {
                lines.push(line);
                ControlFlow::Continue(())
            } else {
                has_more = size > 0;
                ControlFlow::Break(())
            }
        })?;

        let matched_seen = (skipped + lines.len()) as u64;
        if self.logger.is_enabled(Level::Debug) {
            self.logger.debug(format_args!(
                "page offset={} size={} returned={} has_more={} of '{}' in {:?}",
                offset,
                size,
                lines.len(),
                has_more,
                self.path.display(),
                started.elapsed()
            ));
        }
        Ok(TextPage::new(request, filter, lines, matched_seen, has_more))
    }

    /// The last `n` matching lines, oldest first, kept in an `n`-slot ring.
    pub fn tail(&self, n: usize, filter: Option<&str>) -> FileTextResult<TailResult> {
        let started = Instant::now();
        let filter = effective_filter(filter);
        let mut ring: VecDeque<String> = VecDeque::with_capacity(n.min(4096));
        let mut matched = 0u64;

        self.scan(filter, "tail", |line| {
            matched += 1;
            if n > 0 {
                if ring.len() == n {
                    ring.pop_front();
                }
                ring.push_back(line);
            }
            ControlFlow::Continue(())
        })?;

        if self.logger.is_enabled(Level::Debug) {
            self.logger.debug(format_args!(
                "tail {} of '{}' kept {} of {} matching lines in {:?}",
                n,
                self.path.display(),
                ring.len(),
                matched,
                started.elapsed()
            ));
        }
        Ok(TailResult::new(n, ring.into(), matched))
    }
}

impl std::fmt::Debug for TextFileReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFileReader")
            .field("path", &self.path)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
