use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub mod decode;
pub mod encode;

pub use decode::{DecodeReader, StreamDecoder, decode_all};
pub use encode::{EncodeError, encode_str};

/// Text encodings this crate can detect, decode and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
    /// ISO-8859-1. Carries no signature.
    Latin1,
}

impl Encoding {
    pub const ALL: [Encoding; 6] = [
        Encoding::Utf8,
        Encoding::Utf16Be,
        Encoding::Utf16Le,
        Encoding::Utf32Be,
        Encoding::Utf32Le,
        Encoding::Latin1,
    ];

    /// Canonical label, as written in configuration files.
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf32Be => "UTF-32BE",
            Encoding::Utf32Le => "UTF-32LE",
            Encoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Signature bytes for this encoding (empty for ISO-8859-1).
    pub fn bom(&self) -> &'static [u8] {
        crate::bom::bom_bytes(*self)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label that does not name a supported encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding label '{0}'")]
pub struct UnknownEncoding(pub String);

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "utf8" => Ok(Encoding::Utf8),
            "utf16be" => Ok(Encoding::Utf16Be),
            "utf16le" => Ok(Encoding::Utf16Le),
            "utf32be" => Ok(Encoding::Utf32Be),
            "utf32le" => Ok(Encoding::Utf32Le),
            "iso88591" | "latin1" | "l1" => Ok(Encoding::Latin1),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}

impl Serialize for Encoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Encoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.label().parse::<Encoding>(), Ok(encoding));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("utf8".parse::<Encoding>(), Ok(Encoding::Utf8));
        assert_eq!("utf_16le".parse::<Encoding>(), Ok(Encoding::Utf16Le));
        assert_eq!(" Latin1 ".parse::<Encoding>(), Ok(Encoding::Latin1));
        assert_eq!("iso-8859-1".parse::<Encoding>(), Ok(Encoding::Latin1));
        assert_eq!(
            "EBCDIC".parse::<Encoding>(),
            Err(UnknownEncoding("EBCDIC".to_string()))
        );
    }

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Encoding::default(), Encoding::Utf8);
        assert_eq!(Encoding::default().to_string(), "UTF-8");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Encoding::Utf32Be).unwrap();
        assert_eq!(json, "\"UTF-32BE\"");
        let parsed: Encoding = serde_json::from_str("\"utf-16be\"").unwrap();
        assert_eq!(parsed, Encoding::Utf16Be);
        assert!(serde_json::from_str::<Encoding>("\"koi8-r\"").is_err());
    }
}
