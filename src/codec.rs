//! Text codecs for byte payloads.
//!
//! Domain values carry raw bytes. Whenever text crosses that boundary the
//! caller passes a [`TextCodec`] explicitly; [`Utf8Codec`] is the usual
//! choice and [`LossyUtf8Codec`] never fails.
//!
//! # Examples
//!
//! ```rust
//! use functional_io::codec::{TextCodec, Utf8Codec};
//! use functional_io::types::Buffer;
//!
//! let codec = Utf8Codec;
//! let buffer = Buffer::from_text(&codec, "hello");
//! assert_eq!(buffer.text(&codec).unwrap(), "hello");
//! ```

use std::fmt;

/// Failure to decode bytes as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The bytes are not valid UTF-8.
    #[error("invalid utf-8 sequence of {length} bytes at offset {offset}")]
    InvalidUtf8 {
        /// Index of the first invalid byte.
        offset: usize,
        /// Length of the invalid sequence, or the remaining byte count when
        /// the input ends mid-sequence.
        length: usize,
    },
}

/// Converts between text and bytes.
pub trait TextCodec: Send + Sync + fmt::Debug {
    /// Encodes `text` as bytes.
    fn encode(&self, text: &str) -> Vec<u8>;

    /// Decodes `bytes` as text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when `bytes` is not valid for this codec.
    fn decode(&self, bytes: &[u8]) -> Result<String, CodecError>;
}

/// Strict UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Codec;

impl TextCodec for Utf8Codec {
    fn encode(&self, text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|error| CodecError::InvalidUtf8 {
                offset: error.valid_up_to(),
                length: error
                    .error_len()
                    .unwrap_or(bytes.len() - error.valid_up_to()),
            })
    }
}

/// UTF-8 that replaces invalid sequences with `U+FFFD`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LossyUtf8Codec;

impl TextCodec for LossyUtf8Codec {
    fn encode(&self, text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[0xff], 0, 1)]
    #[case(&[b'o', b'k', 0xe2, 0x82], 2, 2)]
    #[case(&[b'a', 0xc3, 0x28], 1, 1)]
    fn strict_decode_reports_offsets(
        #[case] bytes: &[u8],
        #[case] offset: usize,
        #[case] length: usize,
    ) {
        assert_eq!(
            Utf8Codec.decode(bytes),
            Err(CodecError::InvalidUtf8 { offset, length })
        );
    }

    #[test]
    fn lossy_decode_replaces_invalid_bytes() {
        assert_eq!(LossyUtf8Codec.decode(&[b'a', 0xff]), Ok("a\u{fffd}".to_string()));
    }

    #[test]
    fn codecs_are_usable_as_trait_objects() {
        let codecs: [&dyn TextCodec; 2] = [&Utf8Codec, &LossyUtf8Codec];
        for codec in codecs {
            assert_eq!(codec.decode(&codec.encode("héllo")), Ok("héllo".to_string()));
        }
    }
}
