//! Streaming decoders from any supported encoding into UTF-8.
//!
//! UTF-8 and UTF-16 go through `encoding_rs`. It has no UTF-32 decoder and
//! maps the ISO-8859-1 label onto windows-1252, so those two are decoded here.
//! Malformed input becomes U+FFFD; nothing is rejected.

use std::io::{self, BufRead, Read};

use encoding_rs::{CoderResult, Decoder};

use super::Encoding;

const RAW_CHUNK_SIZE: usize = 8 * 1024;

enum Backend {
    Whatwg(Decoder),
    Utf32 {
        big_endian: bool,
        pending: [u8; 4],
        pending_len: usize,
    },
    Latin1,
}

/// Incremental decoder; code units split across input chunks are carried over.
pub struct StreamDecoder {
    encoding: Encoding,
    backend: Backend,
}

impl StreamDecoder {
    pub fn new(encoding: Encoding) -> Self {
        let backend = match encoding {
            Encoding::Utf8 => {
                Backend::Whatwg(encoding_rs::UTF_8.new_decoder_without_bom_handling())
            }
            Encoding::Utf16Le => {
                Backend::Whatwg(encoding_rs::UTF_16LE.new_decoder_without_bom_handling())
            }
            Encoding::Utf16Be => {
                Backend::Whatwg(encoding_rs::UTF_16BE.new_decoder_without_bom_handling())
            }
            Encoding::Utf32Le => Backend::Utf32 {
                big_endian: false,
                pending: [0; 4],
                pending_len: 0,
            },
            Encoding::Utf32Be => Backend::Utf32 {
                big_endian: true,
                pending: [0; 4],
                pending_len: 0,
            },
            Encoding::Latin1 => Backend::Latin1,
        };
        StreamDecoder { encoding, backend }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Decode `input` and append the text to `out`.
    ///
    /// `last` marks the end of the stream: an incomplete trailing sequence is
    /// then flushed as U+FFFD instead of being held back.
    pub fn decode(&mut self, input: &[u8], out: &mut String, last: bool) {
        match &mut self.backend {
            Backend::Whatwg(decoder) => decode_whatwg(decoder, input, out, last),
            Backend::Utf32 {
                big_endian,
                pending,
                pending_len,
            } => decode_utf32(*big_endian, pending, pending_len, input, out, last),
            Backend::Latin1 => out.extend(input.iter().map(|&b| char::from(b))),
        }
    }
}

fn decode_whatwg(decoder: &mut Decoder, mut input: &[u8], out: &mut String, last: bool) {
    loop {
        let needed = decoder
            .max_utf8_buffer_length(input.len())
            .unwrap_or(input.len().saturating_mul(3).saturating_add(16));
        out.reserve(needed);
        let (result, read, _had_replacements) = decoder.decode_to_string(input, out, last);
        input = &input[read..];
        match result {
            CoderResult::InputEmpty => break,
            CoderResult::OutputFull => continue,
        }
    }
}

fn decode_utf32(
    big_endian: bool,
    pending: &mut [u8; 4],
    pending_len: &mut usize,
    input: &[u8],
    out: &mut String,
    last: bool,
) {
    let unit_to_char = |unit: [u8; 4]| {
        let code = if big_endian {
            u32::from_be_bytes(unit)
        } else {
            u32::from_le_bytes(unit)
        };
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    };

    let mut rest = input;
    if *pending_len > 0 {
        let take = (4 - *pending_len).min(rest.len());
        pending[*pending_len..*pending_len + take].copy_from_slice(&rest[..take]);
        *pending_len += take;
        rest = &rest[take..];
        if *pending_len == 4 {
            out.push(unit_to_char(*pending));
            *pending_len = 0;
        }
    }

    let mut units = rest.chunks_exact(4);
    out.reserve(units.len());
    for unit in units.by_ref() {
        out.push(unit_to_char([unit[0], unit[1], unit[2], unit[3]]));
    }
    let tail = units.remainder();
    if !tail.is_empty() {
        pending[..tail.len()].copy_from_slice(tail);
        *pending_len = tail.len();
    }

    if last && *pending_len > 0 {
        out.push(char::REPLACEMENT_CHARACTER);
        *pending_len = 0;
    }
}

/// Decode a complete byte buffer.
pub fn decode_all(bytes: &[u8], encoding: Encoding) -> String {
    let mut out = String::with_capacity(bytes.len());
    StreamDecoder::new(encoding).decode(bytes, &mut out, true);
    out
}

/// Adapts a raw byte stream into a buffered stream of UTF-8 text.
///
/// The inner reader is pulled in fixed chunks; each chunk is decoded into an
/// owned buffer that [`BufRead::fill_buf`] hands out.
pub struct DecodeReader<R> {
    inner: R,
    decoder: StreamDecoder,
    raw: Box<[u8]>,
    decoded: String,
    pos: usize,
    eof: bool,
}

impl<R: Read> DecodeReader<R> {
    pub fn new(inner: R, encoding: Encoding) -> Self {
        DecodeReader {
            inner,
            decoder: StreamDecoder::new(encoding),
            raw: vec![0u8; RAW_CHUNK_SIZE].into_boxed_slice(),
            decoded: String::new(),
            pos: 0,
            eof: false,
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.decoder.encoding()
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> BufRead for DecodeReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.pos >= self.decoded.len() && !self.eof {
            self.decoded.clear();
            self.pos = 0;
            let read = match self.inner.read(&mut self.raw) {
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if read == 0 {
                self.eof = true;
                self.decoder.decode(&[], &mut self.decoded, true);
            } else {
                self.decoder.decode(&self.raw[..read], &mut self.decoded, false);
            }
        }
        Ok(&self.decoded.as_bytes()[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.decoded.len());
    }
}

impl<R: Read> Read for DecodeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}
