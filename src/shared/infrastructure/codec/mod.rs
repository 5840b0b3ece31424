// Request body codecs.
//
// A codec undoes the compression named by a `Content-Encoding` header. The
// registry resolves a header value to a codec and falls back to identity for
// anything it does not know, so an unsupported encoding is read as raw bytes.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::sync::Arc;
use thiserror::Error;

pub mod gzip;
pub mod identity;
pub mod zstandard;

pub use gzip::Gzip;
pub use identity::Identity;
pub use zstandard::Zstd;

pub trait ContentCodec: Send + Sync {
    /// Encoding token as it appears in `Content-Encoding`.
    fn name(&self) -> &'static str;

    fn decode<'a>(&self, body: &'a [u8]) -> io::Result<Cow<'a, [u8]>>;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown codec {0:?}, supported: gzip, zstd")]
pub struct UnknownCodec(pub String);

#[derive(Clone)]
pub struct CodecRegistry {
    codecs: Vec<Arc<dyn ContentCodec>>,
}

impl CodecRegistry {
    /// A registry that decodes nothing: every body is taken as is.
    pub fn identity_only() -> Self {
        Self { codecs: Vec::new() }
    }

    pub fn with_codec(mut self, codec: impl ContentCodec + 'static) -> Self {
        self.codecs.push(Arc::new(codec));
        self
    }

    /// Builds a registry from codec tokens such as `"gzip"` or `"zstd"`.
    /// `identity` is always available and accepted as a no-op.
    pub fn from_names<I, S>(names: I) -> Result<Self, UnknownCodec>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Self::identity_only(), |registry, name| {
                match name.as_ref().trim().to_ascii_lowercase().as_str() {
                    "" | "identity" => Ok(registry),
                    "gzip" => Ok(registry.with_codec(Gzip)),
                    "zstd" => Ok(registry.with_codec(Zstd)),
                    other => Err(UnknownCodec(other.to_string())),
                }
            })
    }

    pub fn resolve(&self, content_encoding: Option<&str>) -> &dyn ContentCodec {
        let Some(encoding) = content_encoding.map(str::trim) else {
            return &Identity;
        };
        self.codecs
            .iter()
            .find(|codec| codec.name().eq_ignore_ascii_case(encoding))
            .map(|codec| &**codec)
            .unwrap_or(&Identity)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.codecs.iter().map(|codec| codec.name()).collect()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::identity_only().with_codec(Gzip).with_codec(Zstd)
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
