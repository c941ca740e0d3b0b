//! Read side: open a file, resolve its encoding, expose decoded lines.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use super::eol::LineSplitter;
use crate::encoding::{DecodeReader, Encoding, decode_all};
use crate::pushback::PushbackReader;
use crate::resolve::{EncodingResolver, Resolution};

type DecodedLines = LineSplitter<DecodeReader<PushbackReader<File>>>;

/// An open decoding cursor over one file.
///
/// Dropping it closes the file.
pub struct ReadCursor {
    resolution: Resolution,
    lines: DecodedLines,
}

impl ReadCursor {
    /// Open `path`, probe its signature and position on the first content byte.
    ///
    /// On a probe failure the half-built stream is dropped before returning,
    /// so no handle outlives the error.
    pub fn open(path: &Path, resolver: &EncodingResolver) -> io::Result<Self> {
        let mut stream = PushbackReader::new(File::open(path)?);
        let resolution = resolver.resolve(&mut stream)?;
        let decoder = DecodeReader::new(stream, resolution.encoding);
        Ok(ReadCursor {
            resolution,
            lines: LineSplitter::new(decoder),
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn encoding(&self) -> Encoding {
        self.resolution.encoding
    }

    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.lines.read_line()
    }

    /// Everything not yet consumed, decoded, terminators included.
    pub fn read_remaining(&mut self) -> io::Result<String> {
        let mut content = String::new();
        self.lines.get_mut().read_to_string(&mut content)?;
        Ok(content)
    }

    /// Visit every remaining line until `visit` asks to stop.
    pub fn for_each_line<F>(&mut self, mut visit: F) -> io::Result<()>
    where
        F: FnMut(String) -> std::ops::ControlFlow<()>,
    {
        while let Some(line) = self.lines.read_line()? {
            if visit(line).is_break() {
                break;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ReadCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadCursor")
            .field("resolution", &self.resolution)
            .finish_non_exhaustive()
    }
}

/// Decode the whole file as `encoding`, signature bytes included.
pub fn load_with_encoding(path: &Path, encoding: Encoding) -> io::Result<String> {
    let raw = fs::read(path)?;
    Ok(decode_all(&raw, encoding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ProbePolicy;
    use std::io::Write;
    use std::ops::ControlFlow;
    use tempfile::NamedTempFile;

    fn temp_with(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    fn strict() -> EncodingResolver {
        EncodingResolver::new(Encoding::Latin1, ProbePolicy::Fail)
    }

    #[test]
    fn test_open_utf16be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend_from_slice(&[0x00, b'h', 0x00, b'i', 0x00, b'\n', 0x00, b'!']);
        let file = temp_with(&bytes);

        let mut cursor = ReadCursor::open(file.path(), &strict()).unwrap();
        assert_eq!(cursor.encoding(), Encoding::Utf16Be);
        assert!(cursor.resolution().has_bom());
        assert_eq!(cursor.read_line().unwrap().as_deref(), Some("hi"));
        assert_eq!(cursor.read_line().unwrap().as_deref(), Some("!"));
        assert_eq!(cursor.read_line().unwrap(), None);
    }

    #[test]
    fn test_open_without_bom_uses_default() {
        let file = temp_with(b"caf\xE9");
        let mut cursor = ReadCursor::open(file.path(), &strict()).unwrap();
        assert_eq!(cursor.encoding(), Encoding::Latin1);
        assert_eq!(cursor.read_remaining().unwrap(), "café");
    }

    #[test]
    fn test_for_each_line_stops_on_break() {
        let file = temp_with(b"a\nb\nc\n");
        let mut cursor = ReadCursor::open(file.path(), &strict()).unwrap();
        let mut seen = Vec::new();
        cursor
            .for_each_line(|line| {
                seen.push(line);
                if seen.len() == 2 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
        assert_eq!(seen, vec!["a", "b"]);
        assert_eq!(cursor.read_line().unwrap().as_deref(), Some("c"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReadCursor::open(&dir.path().join("nope"), &strict()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_load_with_encoding_keeps_signature() {
        let file = temp_with(&[0xEF, 0xBB, 0xBF, b'o', b'k']);
        assert_eq!(
            load_with_encoding(file.path(), Encoding::Utf8).unwrap(),
            "\u{FEFF}ok"
        );
        assert_eq!(
            load_with_encoding(file.path(), Encoding::Latin1).unwrap(),
            "\u{EF}\u{BB}\u{BF}ok"
        );
    }
}
