//! Encoding resolution: probe the leading bytes, give back what isn't a signature.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bom::{BomProbe, MAX_BOM_LENGTH, detect_bom};
use crate::encoding::Encoding;
use crate::logger::{ActivityLogger, null_logger};
use crate::pushback::PushbackReader;

/// What to do when reading the probe window fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbePolicy {
    /// Surface the I/O error.
    #[default]
    Fail,
    /// Log it and carry on with the default encoding.
    UseDefault,
}

/// Encoding chosen for a stream, with the signature match that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub encoding: Encoding,
    pub probe: BomProbe,
}

impl Resolution {
    pub fn has_bom(&self) -> bool {
        self.probe.is_found()
    }
}

/// Resolves the encoding of a byte stream from its signature.
///
/// The failure policy is fixed at construction so one resolver never mixes
/// "propagate" and "fall back" behaviour.
#[derive(Clone)]
pub struct EncodingResolver {
    default_encoding: Encoding,
    policy: ProbePolicy,
    logger: Arc<dyn ActivityLogger>,
}

impl EncodingResolver {
    pub fn new(default_encoding: Encoding, policy: ProbePolicy) -> Self {
        EncodingResolver {
            default_encoding,
            policy,
            logger: null_logger(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn default_encoding(&self) -> Encoding {
        self.default_encoding
    }

    pub fn policy(&self) -> ProbePolicy {
        self.policy
    }

    /// Probe `stream` and leave it positioned on the first content byte.
    ///
    /// Probe bytes past the matched signature (or all of them, when nothing
    /// matched) are pushed back onto `stream`.
    pub fn resolve<R: Read>(&self, stream: &mut PushbackReader<R>) -> io::Result<Resolution> {
        let mut window = [0u8; MAX_BOM_LENGTH];
        let mut filled = 0;
        let failure = loop {
            if filled == window.len() {
                break None;
            }
            match stream.read(&mut window[filled..]) {
                Ok(0) => break None,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => break Some(err),
            }
        };

        if let Some(err) = failure {
            stream.unread(&window[..filled])?;
            return self.on_probe_failure(err);
        }

        let probe = detect_bom(&window[..filled]);
        stream.unread(&window[probe.bom_length()..filled])?;

        let resolution = Resolution {
            encoding: probe.encoding_or(self.default_encoding),
            probe,
        };
        self.logger.debug(format_args!(
            "resolved encoding {} (bom: {}, probed {} bytes)",
            resolution.encoding,
            resolution.has_bom(),
            filled
        ));
        Ok(resolution)
    }

    /// Probe the signature of the file at `path` with a short-lived stream.
    ///
    /// Failing to open the file counts as a probe failure.
    pub fn resolve_file(&self, path: &Path) -> io::Result<Resolution> {
        match File::open(path) {
            Ok(file) => self.resolve(&mut PushbackReader::new(file)),
            Err(err) => self.on_probe_failure(err),
        }
    }

    fn on_probe_failure(&self, err: io::Error) -> io::Result<Resolution> {
        match self.policy {
            ProbePolicy::Fail => Err(err),
            ProbePolicy::UseDefault => {
                self.logger.warn(format_args!(
                    "signature probe failed ({}), using default encoding {}",
                    err, self.default_encoding
                ));
                Ok(Resolution {
                    encoding: self.default_encoding,
                    probe: BomProbe::NotFound,
                })
            }
        }
    }
}

impl std::fmt::Debug for EncodingResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodingResolver")
            .field("default_encoding", &self.default_encoding)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
