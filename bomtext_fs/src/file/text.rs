//! `FileText`: one path, at most one open cursor, signature-aware reads and writes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::eol::EolType;
use super::load::{ReadCursor, load_with_encoding};
use super::page::{TailResult, TextPage};
use super::reader::TextFileReader;
use super::save::{WriteCursor, WritePlan};
use crate::encoding::{Encoding, encode_str};
use crate::error::{FileTextError, FileTextResult};
use crate::logger::{ActivityLogger, null_logger};
use crate::resolve::{EncodingResolver, ProbePolicy, Resolution};

/// Settings shared by sessions and scanning readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTextConfig {
    /// Used when a file carries no signature, or for new files.
    pub default_encoding: Encoding,
    /// Reuse an existing file's signature when overwriting it.
    pub keep_existing_bom: bool,
    /// Failure handling when reading the signature window.
    pub probe_policy: ProbePolicy,
}

impl Default for FileTextConfig {
    fn default() -> Self {
        FileTextConfig {
            default_encoding: Encoding::default(),
            keep_existing_bom: true,
            probe_policy: ProbePolicy::default(),
        }
    }
}

#[derive(Debug, Default)]
enum Cursor {
    #[default]
    Closed,
    Read(ReadCursor),
    Write(WriteCursor),
}

/// A text file session.
///
/// Holds a reader or a writer, never both. Opening either side closes whatever
/// was open before; dropping the session closes it too.
pub struct FileText {
    path: PathBuf,
    config: FileTextConfig,
    logger: Arc<dyn ActivityLogger>,
    cursor: Cursor,
    encoding: Option<Encoding>,
    has_bom: bool,
}

impl FileText {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileText::with_config(path, FileTextConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, config: FileTextConfig) -> Self {
        FileText {
            path: path.into(),
            config,
            logger: null_logger(),
            cursor: Cursor::Closed,
            encoding: None,
            has_bom: false,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether anything exists at the path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn config(&self) -> &FileTextConfig {
        &self.config
    }

    pub fn default_encoding(&self) -> Encoding {
        self.config.default_encoding
    }

    /// Applies from the next open on.
    pub fn set_default_encoding(&mut self, encoding: Encoding) {
        self.config.default_encoding = encoding;
    }

    pub fn set_keep_existing_bom(&mut self, keep: bool) {
        self.config.keep_existing_bom = keep;
    }

    pub fn set_probe_policy(&mut self, policy: ProbePolicy) {
        self.config.probe_policy = policy;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.cursor, Cursor::Closed)
    }

    pub fn is_open_read(&self) -> bool {
        matches!(self.cursor, Cursor::Read(_))
    }

    pub fn is_open_write(&self) -> bool {
        matches!(self.cursor, Cursor::Write(_))
    }

    /// Encoding of the open cursor; `None` while closed.
    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    /// Whether the open file starts with a signature.
    pub fn has_bom(&self) -> bool {
        self.has_bom
    }

    /// Reads and writes probe under the same configured policy.
    fn resolver(&self) -> EncodingResolver {
        EncodingResolver::new(self.config.default_encoding, self.config.probe_policy)
            .with_logger(Arc::clone(&self.logger))
    }

    fn scanner(&self) -> TextFileReader {
        TextFileReader::new(&self.path, &self.config).with_logger(Arc::clone(&self.logger))
    }

    /// Probe the signature without opening a session cursor.
    pub fn probe_encoding(&self) -> FileTextResult<Resolution> {
        self.resolver()
            .resolve_file(&self.path)
            .map_err(FileTextError::io(&self.path, "probe encoding"))
    }

    // ---- read side ----

    /// Open for line reading, positioned after any signature.
    pub fn open_read(&mut self) -> FileTextResult<()> {
        self.close();
        let cursor = ReadCursor::open(&self.path, &self.resolver())
            .map_err(FileTextError::io(&self.path, "open for read"))?;
        let resolution = cursor.resolution();
        self.encoding = Some(resolution.encoding);
        self.has_bom = resolution.has_bom();
        self.cursor = Cursor::Read(cursor);
        self.logger.info(format_args!(
            "opened '{}' for read ({}, bom: {})",
            self.path.display(),
            resolution.encoding,
            self.has_bom
        ));
        Ok(())
    }

    /// Next line without its terminator, `None` at end of file.
    pub fn read_line(&mut self) -> FileTextResult<Option<String>> {
        match &mut self.cursor {
            Cursor::Read(cursor) => cursor
                .read_line()
                .map_err(FileTextError::io(&self.path, "read line")),
            _ => Err(FileTextError::not_open(&self.path, "read line")),
        }
    }

    /// Whole decoded content; opens, reads and closes.
    pub fn read_all(&mut self) -> FileTextResult<String> {
        self.open_read()?;
        let content = match &mut self.cursor {
            Cursor::Read(cursor) => cursor
                .read_remaining()
                .map_err(FileTextError::io(&self.path, "read all")),
            _ => Err(FileTextError::not_open(&self.path, "read all")),
        };
        self.close();
        content
    }

    /// Every line; opens, reads and closes.
    pub fn read_lines(&mut self) -> FileTextResult<Vec<String>> {
        self.open_read()?;
        let mut lines = Vec::new();
        let outcome = loop {
            match self.read_line() {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => break Ok(lines),
                Err(err) => break Err(err),
            }
        };
        self.close();
        outcome
    }

    /// Raw decode of the whole file as `encoding`, no probing.
    ///
    /// A leading signature is decoded like any other bytes.
    pub fn read_all_with(&mut self, encoding: Encoding) -> FileTextResult<String> {
        self.close();
        load_with_encoding(&self.path, encoding).map_err(FileTextError::io(&self.path, "read all"))
    }

    /// Count lines, or lines containing `filter`, on a private cursor.
    pub fn count_lines(&self, filter: Option<&str>) -> FileTextResult<u64> {
        self.scanner().count_lines(filter)
    }

    pub fn page(
        &self,
        offset: usize,
        size: usize,
        filter: Option<&str>,
    ) -> FileTextResult<TextPage> {
        self.scanner().page(offset, size, filter)
    }

    pub fn page_json(
        &self,
        offset: usize,
        size: usize,
        filter: Option<&str>,
    ) -> FileTextResult<serde_json::Value> {
        Ok(self.page(offset, size, filter)?.to_json())
    }

    pub fn tail(&self, n: usize, filter: Option<&str>) -> FileTextResult<TailResult> {
        self.scanner().tail(n, filter)
    }

    // ---- write side ----

    /// Open for writing.
    ///
    /// Without an explicit `encoding`, an existing file's signature is reused
    /// when appending or when `keep_existing_bom` is set; otherwise the default
    /// encoding applies. The signature is written unless appending to an
    /// existing file. A failing signature probe follows the configured
    /// [`ProbePolicy`], as it does for reads.
    pub fn open_write(&mut self, append: bool, encoding: Option<Encoding>) -> FileTextResult<()> {
        self.close();
        let exists = self.exists();
        let reuse_existing = append || (encoding.is_none() && self.config.keep_existing_bom);
        let existing = if exists && reuse_existing {
            Some(
                self.resolver()
                    .resolve_file(&self.path)
                    .map_err(FileTextError::io(&self.path, "open for write"))?,
            )
        } else {
            None
        };

        let encoding = encoding
            .or(existing.map(|resolution| resolution.encoding))
            .unwrap_or(self.config.default_encoding);
        let appending = append && exists;
        let cursor = WriteCursor::open(
            &self.path,
            WritePlan {
                encoding,
                append: appending,
            },
        )
        .map_err(FileTextError::io(&self.path, "open for write"))?;

        self.has_bom = if appending {
            existing.is_some_and(|resolution| resolution.has_bom())
        } else {
            cursor.wrote_bom()
        };
        self.encoding = Some(encoding);
        self.cursor = Cursor::Write(cursor);
        self.logger.info(format_args!(
            "opened '{}' for {} ({}, bom: {})",
            self.path.display(),
            if appending { "append" } else { "write" },
            encoding,
            self.has_bom
        ));
        Ok(())
    }

    pub fn open_append(&mut self, encoding: Option<Encoding>) -> FileTextResult<()> {
        self.open_write(true, encoding)
    }

    /// Encode and write `text`, flushed before returning.
    pub fn write(&mut self, text: &str) -> FileTextResult<()> {
        self.write_op(text, "write")
    }

    /// Write `text` followed by the platform line separator.
    pub fn write_line(&mut self, text: &str) -> FileTextResult<()> {
        let mut line = String::with_capacity(text.len() + 2);
        line.push_str(text);
        line.push_str(EolType::native().as_str());
        self.write_op(&line, "write line")
    }

    /// `write_line` for each item.
    pub fn write_lines<I>(&mut self, lines: I) -> FileTextResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if !self.is_open_write() {
            return Err(FileTextError::not_open(&self.path, "write lines"));
        }
        lines
            .into_iter()
            .try_for_each(|line| self.write_line(line.as_ref()))
    }

    /// Overwrite the file with `text`, then close.
    pub fn write_all(&mut self, text: &str) -> FileTextResult<()> {
        self.open_write(false, None)?;
        let outcome = self.write(text);
        self.close();
        outcome
    }

    /// Overwrite the file with one line per item, then close.
    pub fn write_all_lines<I>(&mut self, lines: I) -> FileTextResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.open_write(false, None)?;
        let outcome = self.write_lines(lines);
        self.close();
        outcome
    }

    fn write_op(&mut self, text: &str, op: &'static str) -> FileTextResult<()> {
        let Cursor::Write(cursor) = &mut self.cursor else {
            return Err(FileTextError::not_open(&self.path, op));
        };
        let bytes = encode_str(text, cursor.encoding()).map_err(|err| {
            FileTextError::UnsupportedEncoding {
                path: self.path.clone(),
                op,
                detail: err.to_string(),
            }
        })?;
        cursor
            .write_encoded(&bytes)
            .map_err(FileTextError::io(&self.path, op))
    }

    /// Release the cursor. Idempotent and infallible.
    pub fn close(&mut self) {
        if let Cursor::Write(cursor) = &self.cursor {
            self.logger.debug(format_args!(
                "closing '{}' after {} bytes",
                self.path.display(),
                cursor.bytes_written()
            ));
        }
        self.cursor = Cursor::Closed;
        self.encoding = None;
        self.has_bom = false;
    }
}

impl Drop for FileText {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for FileText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileText")
            .field("path", &self.path)
            .field("config", &self.config)
            .field("cursor", &self.cursor)
            .field("encoding", &self.encoding)
            .field("has_bom", &self.has_bom)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Level;
    use crate::logger::testing::RecordingLogger;
    use std::fs;

    fn nl() -> &'static str {
        EolType::native().as_str()
    }

    #[test]
    fn test_default_config() {
        let config = FileTextConfig::default();
        assert_eq!(config.default_encoding, Encoding::Utf8);
        assert!(config.keep_existing_bom);
        assert_eq!(config.probe_policy, ProbePolicy::Fail);
    }

    #[test]
    fn test_config_serde_fills_missing_fields() {
        let config: FileTextConfig =
            serde_json::from_str(r#"{"default_encoding":"latin1"}"#).unwrap();
        assert_eq!(config.default_encoding, Encoding::Latin1);
        assert!(config.keep_existing_bom);
    }

    #[test]
    fn test_state_machine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.txt");
        fs::write(&path, "one\ntwo\n").unwrap();
        let mut text = FileText::new(&path);

        assert!(!text.is_open());
        assert_eq!(text.encoding(), None);
        let err = text.read_line().unwrap_err();
        assert!(matches!(err, FileTextError::NotOpen { op: "read line", .. }));

        text.open_read().unwrap();
        assert!(text.is_open_read());
        assert!(!text.is_open_write());
        assert_eq!(text.encoding(), Some(Encoding::Utf8));
        assert_eq!(text.read_line().unwrap().as_deref(), Some("one"));

        // Reopening restarts at the first line.
        text.open_read().unwrap();
        assert_eq!(text.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(text.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(text.read_line().unwrap(), None);

        let err = text.write("x").unwrap_err();
        assert!(matches!(err, FileTextError::NotOpen { op: "write", .. }));
        assert_eq!(err.path(), Some(path.as_path()));

        text.close();
        text.close();
        assert!(!text.is_open());
        assert_eq!(text.encoding(), None);
        assert!(matches!(
            text.read_line(),
            Err(FileTextError::NotOpen { .. })
        ));
    }

    #[test]
    fn test_open_write_closes_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swap.txt");
        fs::write(&path, "a\n").unwrap();
        let mut text = FileText::new(&path);

        text.open_read().unwrap();
        text.open_write(false, None).unwrap();
        assert!(text.is_open_write());
        assert!(!text.is_open_read());
        assert!(matches!(text.read_line(), Err(FileTextError::NotOpen { .. })));
    }

    #[test]
    fn test_round_trip_every_encoding() {
        let dir = tempfile::tempdir().unwrap();
        for encoding in Encoding::ALL {
            let path = dir.path().join(format!("{encoding}.txt"));
            let mut text = FileText::new(&path);
            text.open_write(false, Some(encoding)).unwrap();
            text.write_line("première ligne").unwrap();
            text.write("zweite Zeile").unwrap();
            text.close();

            let raw = fs::read(&path).unwrap();
            assert!(raw.starts_with(encoding.bom()), "{encoding}");

            let mut text = FileText::new(&path);
            text.set_default_encoding(encoding);
            assert_eq!(
                text.read_lines().unwrap(),
                vec!["première ligne", "zweite Zeile"],
                "{encoding}"
            );
        }
    }

    #[test]
    fn test_open_read_reports_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marked.txt");
        fs::write(&path, [0xEF, 0xBB, 0xBF, b'h', b'i']).unwrap();
        let mut text = FileText::new(&path);
        text.open_read().unwrap();
        assert!(text.has_bom());
        assert_eq!(text.read_line().unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn test_latin1_without_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.txt");
        fs::write(&path, b"caf\xE9\r\n").unwrap();

        let mut text = FileText::with_config(
            &path,
            FileTextConfig {
                default_encoding: Encoding::Latin1,
                ..FileTextConfig::default()
            },
        );
        text.open_read().unwrap();
        assert_eq!(text.encoding(), Some(Encoding::Latin1));
        assert!(!text.has_bom());
        assert_eq!(text.read_line().unwrap().as_deref(), Some("café"));
        assert_eq!(text.read_line().unwrap(), None);
    }

    #[test]
    fn test_append_preserves_existing_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.txt");
        let mut text = FileText::new(&path);
        text.open_write(false, Some(Encoding::Utf16Le)).unwrap();
        text.write_line("first").unwrap();
        text.close();
        let before = fs::read(&path).unwrap();

        // Default is UTF-8, but the existing signature wins.
        text.open_append(None).unwrap();
        assert_eq!(text.encoding(), Some(Encoding::Utf16Le));
        assert!(text.has_bom());
        text.write_line("second").unwrap();
        text.close();

        let after = fs::read(&path).unwrap();
        assert!(after.starts_with(&before));
        assert_eq!(&after[..2], &[0xFF, 0xFE]);
        // Exactly one signature.
        assert_ne!(&after[before.len()..before.len() + 2], &[0xFF, 0xFE]);
        assert_eq!(text.read_lines().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_append_to_missing_file_writes_signature() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");
        let mut text = FileText::new(&path);
        text.open_append(None).unwrap();
        assert!(text.has_bom());
        text.write("x").unwrap();
        text.close();
        assert_eq!(fs::read(&path).unwrap(), vec![0xEF, 0xBB, 0xBF, b'x']);
    }

    #[test]
    fn test_overwrite_keeps_existing_bom_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keep.txt");
        fs::write(&path, [0xFE, 0xFF, 0x00, b'o', 0x00, b'l', 0x00, b'd']).unwrap();

        let mut text = FileText::new(&path);
        text.write_all("new").unwrap();
        assert_eq!(
            fs::read(&path).unwrap(),
            vec![0xFE, 0xFF, 0x00, b'n', 0x00, b'e', 0x00, b'w']
        );

        text.set_keep_existing_bom(false);
        text.write_all("new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![0xEF, 0xBB, 0xBF, b'n', b'e', b'w']);
    }

    #[test]
    fn test_overwrite_of_unmarked_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        fs::write(&path, "plain").unwrap();

        let mut text = FileText::with_config(
            &path,
            FileTextConfig {
                default_encoding: Encoding::Latin1,
                ..FileTextConfig::default()
            },
        );
        text.write_all("\u{E9}t\u{E9}").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"\xE9t\xE9");
    }

    #[test]
    fn test_explicit_encoding_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explicit.txt");
        fs::write(&path, [0xEF, 0xBB, 0xBF, b'a']).unwrap();

        let mut text = FileText::new(&path);
        text.open_write(false, Some(Encoding::Utf32Be)).unwrap();
        assert_eq!(text.encoding(), Some(Encoding::Utf32Be));
        text.close();
        assert_eq!(fs::read(&path).unwrap(), vec![0x00, 0x00, 0xFE, 0xFF]);
    }

    #[test]
    fn test_write_signature_failure_follows_configured_policy() {
        let dir = tempfile::tempdir().unwrap();
        // A directory opens for reading, but every read of it fails.
        let target = dir.path().join("not-a-file");
        fs::create_dir(&target).unwrap();
        let logger = Arc::new(RecordingLogger::default());

        let mut strict = FileText::new(&target).with_logger(logger.clone());
        let err = strict.open_append(None).unwrap_err();
        assert!(matches!(err, FileTextError::Io { op: "open for write", .. }));
        assert!(logger.messages(Level::Warn).is_empty());
        assert!(!strict.is_open());
        assert_eq!(strict.encoding(), None);

        let mut lenient = FileText::new(&target).with_logger(logger.clone());
        lenient.set_probe_policy(ProbePolicy::UseDefault);
        assert!(lenient.open_append(None).is_err());
        assert_eq!(logger.messages(Level::Warn).len(), 1);
    }

    #[test]
    fn test_unrepresentable_latin1_character() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.txt");
        let mut text = FileText::new(&path);
        text.open_write(false, Some(Encoding::Latin1)).unwrap();

        let err = text.write("price: \u{20AC}5").unwrap_err();
        assert!(matches!(
            err,
            FileTextError::UnsupportedEncoding { op: "write", .. }
        ));
        assert!(err.to_string().contains("ISO-8859-1"));
        // Nothing partial reaches the file.
        assert!(fs::read(&path).unwrap().is_empty());
    }

    #[test]
    fn test_write_lines_and_write_all_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        let mut text = FileText::new(&path);

        assert!(matches!(
            text.write_lines(["a"]),
            Err(FileTextError::NotOpen { op: "write lines", .. })
        ));

        text.write_all_lines(["alpha", "beta"]).unwrap();
        assert!(!text.is_open());
        let expected = format!("\u{FEFF}alpha{nl}beta{nl}", nl = nl());
        assert_eq!(text.read_all_with(Encoding::Utf8).unwrap(), expected);
        assert_eq!(text.read_all().unwrap(), format!("alpha{nl}beta{nl}", nl = nl()));

        text.open_append(None).unwrap();
        text.write_lines(vec!["gamma".to_string()]).unwrap();
        text.close();
        assert_eq!(text.read_lines().unwrap(), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, b"").unwrap();
        let mut text = FileText::new(&path);
        text.set_default_encoding(Encoding::Utf16Be);

        text.open_read().unwrap();
        assert_eq!(text.encoding(), Some(Encoding::Utf16Be));
        assert!(!text.has_bom());
        assert_eq!(text.read_line().unwrap(), None);

        assert!(text.read_lines().unwrap().is_empty());
        assert_eq!(text.read_all().unwrap(), "");
        assert!(text.tail(3, None).unwrap().is_empty());
    }

    #[test]
    fn test_read_all_closes_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all.txt");
        fs::write(&path, "x\r\ny").unwrap();
        let mut text = FileText::new(&path);
        assert_eq!(text.read_all().unwrap(), "x\r\ny");
        assert!(!text.is_open());
    }

    #[test]
    fn test_open_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut text = FileText::new(dir.path().join("missing.txt"));
        assert!(!text.exists());
        let err = text.open_read().unwrap_err();
        assert!(matches!(err, FileTextError::Io { op: "open for read", .. }));
        assert!(!text.is_open());
    }

    #[test]
    fn test_encoding_report_and_scans() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.txt");
        let mut text = FileText::new(&path);
        text.write_all_lines((1..=5).map(|i| format!("row {i}"))).unwrap();

        let resolution = text.probe_encoding().unwrap();
        assert_eq!(resolution.encoding, Encoding::Utf8);
        assert!(resolution.has_bom());

        assert_eq!(text.count_lines(None).unwrap(), 5);
        assert_eq!(text.tail(2, None).unwrap().lines(), &["row 4", "row 5"]);
        let json = text.page_json(1, 2, Some("row")).unwrap();
        assert_eq!(json["lines"][0], "row 2");
        assert_eq!(json["hasMore"], true);
    }

    #[test]
    fn test_scans_leave_session_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("busy.txt");
        fs::write(&path, "1\n2\n3\n").unwrap();
        let mut text = FileText::new(&path);
        text.open_read().unwrap();
        assert_eq!(text.read_line().unwrap().as_deref(), Some("1"));

        assert_eq!(text.count_lines(None).unwrap(), 3);
        assert_eq!(text.read_line().unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_sessions_log_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logged.txt");
        let logger = Arc::new(RecordingLogger::default());
        let mut text = FileText::new(&path).with_logger(logger.clone());
        text.write_all("x").unwrap();
        text.open_read().unwrap();

        let info = logger.messages(Level::Info);
        assert!(info.iter().any(|m| m.contains("for write (UTF-8, bom: true)")));
        assert!(info.iter().any(|m| m.contains("for read (UTF-8, bom: true)")));
    }
}
