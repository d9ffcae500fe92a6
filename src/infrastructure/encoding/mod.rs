//! Character-set handling for serialized documents.
//!
//! Single- and multi-byte charsets go through `encoding_rs`. UTF-16 is
//! encoded here because `encoding_rs` only decodes it.

use encoding_rs::{EncoderResult, Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::{SyndicationError, SyndicationResult};

const CHUNK_SIZE: usize = 4096;

pub fn is_utf16(encoding: &'static Encoding) -> bool {
    encoding == UTF_16LE || encoding == UTF_16BE
}

/// Fails for encodings `encoding_rs` never encodes into, i.e. `replacement`.
/// UTF-16 is encoded here instead.
pub fn ensure_supported(encoding: &'static Encoding) -> SyndicationResult<()> {
    if is_utf16(encoding) || encoding.output_encoding() == encoding {
        Ok(())
    } else {
        Err(SyndicationError::UnsupportedEncoding(encoding.name()))
    }
}

/// Name written to the `encoding` attribute of the XML declaration
pub fn declared_name(encoding: &'static Encoding) -> String {
    if is_utf16(encoding) {
        // byte order is carried by the BOM
        "utf-16".to_string()
    } else {
        encoding.name().to_ascii_lowercase()
    }
}

/// Encodes `text` into `encoding`, failing on the first character the
/// target charset cannot represent
pub fn encode(text: &str, encoding: &'static Encoding) -> SyndicationResult<Vec<u8>> {
    ensure_supported(encoding)?;
    if encoding == UTF_8 {
        return Ok(text.as_bytes().to_vec());
    }
    if is_utf16(encoding) {
        return Ok(encode_utf16(text, encoding == UTF_16BE));
    }

    let mut encoder = encoding.new_encoder();
    let mut output = Vec::with_capacity(text.len());
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut remaining = text;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(remaining, &mut chunk, true);
        output.extend_from_slice(&chunk[..written]);
        remaining = &remaining[read..];

        match result {
            EncoderResult::InputEmpty => return Ok(output),
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(character) => {
                tracing::warn!(
                    encoding = encoding.name(),
                    character = %character,
                    "Character cannot be represented in target encoding"
                );
                return Err(SyndicationError::Unmappable {
                    encoding: encoding.name(),
                    character,
                });
            }
        }
    }
}

fn encode_utf16(text: &str, big_endian: bool) -> Vec<u8> {
    let mut output = Vec::with_capacity(2 + text.len() * 2);
    for unit in std::iter::once(0xFEFF_u16).chain(text.encode_utf16()) {
        if big_endian {
            output.extend_from_slice(&unit.to_be_bytes());
        } else {
            output.extend_from_slice(&unit.to_le_bytes());
        }
    }
    output
}
