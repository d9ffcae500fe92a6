use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::error::{SyndicationError, SyndicationResult};
use crate::infrastructure::encoding;

/// Options controlling feed serialization.
///
/// The encoding determines the `encoding` attribute of the XML declaration
/// and the bytes produced by [`serialize_to_vec`](super::serialize_to_vec).
/// It defaults to UTF-8. Output is indented with two spaces unless
/// `indent` is turned off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOption {
    #[serde(with = "encoding_label")]
    pub encoding: &'static Encoding,
    pub indent: bool,
}

impl Default for SerializeOption {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
            indent: true,
        }
    }
}

impl SerializeOption {
    /// Sets the output encoding. Decode-only encodings such as
    /// `encoding_rs::REPLACEMENT` make serialization fail.
    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Looks the encoding up by its WHATWG label (`"utf-16"`, `"latin1"`, ...)
    pub fn with_encoding_label(self, label: &str) -> SyndicationResult<Self> {
        let encoding = lookup(label)?;
        Ok(self.with_encoding(encoding))
    }

    #[must_use]
    pub fn indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }
}

fn lookup(label: &str) -> SyndicationResult<&'static Encoding> {
    match Encoding::for_label(label.trim().as_bytes()) {
        // "replacement" only exists to neuter hostile labels when decoding
        Some(found) if encoding::ensure_supported(found).is_ok() => Ok(found),
        _ => Err(SyndicationError::UnknownEncoding(label.to_string())),
    }
}

mod encoding_label {
    use encoding_rs::Encoding;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        encoding: &&'static Encoding,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(encoding.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<&'static Encoding, D::Error> {
        let label = String::deserialize(deserializer)?;
        super::lookup(&label).map_err(de::Error::custom)
    }
}
