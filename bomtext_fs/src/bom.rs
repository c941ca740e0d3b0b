use crate::encoding::Encoding;

/// Length of the longest known signature, and so of the resolver's probe window.
pub const MAX_BOM_LENGTH: usize = 4;

/// Known signatures, most specific first.
///
/// `FF FE` (UTF-16LE) is a byte prefix of `FF FE 00 00` (UTF-32LE), so the
/// four byte marks must be tested before the two byte ones.
pub const BOM_TABLE: [(Encoding, &[u8]); 5] = [
    (Encoding::Utf32Le, &[0xFF, 0xFE, 0x00, 0x00]),
    (Encoding::Utf32Be, &[0x00, 0x00, 0xFE, 0xFF]),
    (Encoding::Utf8, &[0xEF, 0xBB, 0xBF]),
    (Encoding::Utf16Le, &[0xFF, 0xFE]),
    (Encoding::Utf16Be, &[0xFE, 0xFF]),
];

/// Outcome of matching leading bytes against [`BOM_TABLE`].
///
/// "No signature" is an ordinary answer, not a failure: I/O problems while
/// gathering the bytes are reported separately by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomProbe {
    Found { encoding: Encoding, bom_length: usize },
    NotFound,
}

impl BomProbe {
    pub fn encoding(&self) -> Option<Encoding> {
        match self {
            BomProbe::Found { encoding, .. } => Some(*encoding),
            BomProbe::NotFound => None,
        }
    }

    /// Number of leading bytes spent by the signature (0 when none matched).
    pub fn bom_length(&self) -> usize {
        match self {
            BomProbe::Found { bom_length, .. } => *bom_length,
            BomProbe::NotFound => 0,
        }
    }

    pub fn encoding_or(&self, default: Encoding) -> Encoding {
        self.encoding().unwrap_or(default)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, BomProbe::Found { .. })
    }
}

/// Detect a Byte Order Mark at the start of `bytes`.
pub fn detect_bom(bytes: &[u8]) -> BomProbe {
    BOM_TABLE
        .iter()
        .find(|(_, signature)| bytes.starts_with(signature))
        .map(|&(encoding, signature)| BomProbe::Found {
            encoding,
            bom_length: signature.len(),
        })
        .unwrap_or(BomProbe::NotFound)
}

/// Signature bytes written ahead of content for `encoding`; empty for ISO-8859-1.
pub fn bom_bytes(encoding: Encoding) -> &'static [u8] {
    BOM_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == encoding)
        .map(|(_, signature)| *signature)
        .unwrap_or(&[])
}
