//! Encoding UTF-8 text back into a target encoding.

use thiserror::Error;

use super::Encoding;

/// A character the target encoding cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character {ch:?} cannot be encoded as {encoding}")]
pub struct EncodeError {
    pub ch: char,
    pub encoding: Encoding,
}

/// Encode `text` as `encoding`, without any signature.
pub fn encode_str(text: &str, encoding: Encoding) -> Result<Vec<u8>, EncodeError> {
    match encoding {
        Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
        Encoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        Encoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
        Encoding::Utf32Le => Ok(text.chars().flat_map(|ch| (ch as u32).to_le_bytes()).collect()),
        Encoding::Utf32Be => Ok(text.chars().flat_map(|ch| (ch as u32).to_be_bytes()).collect()),
        Encoding::Latin1 => text
            .chars()
            .map(|ch| u8::try_from(ch).map_err(|_| EncodeError { ch, encoding }))
            .collect(),
    }
}
