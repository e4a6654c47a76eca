#![forbid(unsafe_code)]

//! Legacy code-page codecs for logvis.
//!
//! Single-byte Hebrew and Arabic encodings (ISO 8859-8, ISO 8859-6,
//! Windows-1255/1256, ISIRI 3342) plus the CapRTL testing convention and
//! UTF-8. Each codec converts between raw bytes and Unicode scalar values
//! one character at a time; decoding is total, encoding substitutes `?` for
//! characters the code page cannot represent.
//!
//! # Role in logvis
//! The bidi core works on `char` slices. These codecs sit at the edges,
//! turning legacy input into scalars before resolution and the visual
//! result back into the caller's byte encoding afterwards.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod caprtl;
pub mod cp1255;
pub mod cp1256;
pub mod iso8859_6;
pub mod iso8859_8;
pub mod isiri_3342;

/// Replacement byte for characters a single-byte code page cannot encode.
pub const SUBSTITUTE: u8 = b'?';

/// A supported character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Testing convention: capital Latin letters stand in for Hebrew.
    #[default]
    CapRtl,
    /// ISO 8859-6 (Arabic).
    Iso8859_6,
    /// ISO 8859-8 (Hebrew), with the LRM/RLM extension at 0xFE/0xFF.
    Iso8859_8,
    /// Windows-1255 (Hebrew with points).
    Cp1255,
    /// Windows-1256 (Arabic).
    Cp1256,
    /// ISIRI 3342 (Persian).
    Isiri3342,
    Utf8,
}

/// Unrecognized charset name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown charset `{0}`")]
pub struct UnknownCharset(String);

impl Charset {
    /// All supported charsets, in help-listing order.
    pub const ALL: [Charset; 7] = [
        Charset::CapRtl,
        Charset::Iso8859_6,
        Charset::Iso8859_8,
        Charset::Cp1255,
        Charset::Cp1256,
        Charset::Isiri3342,
        Charset::Utf8,
    ];

    /// Canonical name, accepted back by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Charset::CapRtl => "caprtl",
            Charset::Iso8859_6 => "8859-6",
            Charset::Iso8859_8 => "8859-8",
            Charset::Cp1255 => "cp1255",
            Charset::Cp1256 => "cp1256",
            Charset::Isiri3342 => "isiri-3342",
            Charset::Utf8 => "utf-8",
        }
    }

    /// Decode a byte string into Unicode scalars.
    ///
    /// Single-byte codecs are total over all 256 byte values; UTF-8 decoding
    /// replaces ill-formed sequences with U+FFFD.
    pub fn decode(self, bytes: &[u8]) -> Vec<char> {
        match self {
            Charset::CapRtl => bytes.iter().map(|&b| caprtl::to_unicode(b)).collect(),
            Charset::Iso8859_6 => bytes.iter().map(|&b| iso8859_6::to_unicode(b)).collect(),
            Charset::Iso8859_8 => bytes.iter().map(|&b| iso8859_8::to_unicode(b)).collect(),
            Charset::Cp1255 => bytes.iter().map(|&b| cp1255::to_unicode(b)).collect(),
            Charset::Cp1256 => bytes.iter().map(|&b| cp1256::to_unicode(b)).collect(),
            Charset::Isiri3342 => bytes.iter().map(|&b| isiri_3342::to_unicode(b)).collect(),
            Charset::Utf8 => String::from_utf8_lossy(bytes).chars().collect(),
        }
    }

    /// Encode Unicode scalars into this charset's byte encoding.
    ///
    /// Characters outside a single-byte code page's repertoire become
    /// [`SUBSTITUTE`]. UTF-8 encoding never substitutes.
    pub fn encode(self, chars: &[char]) -> Vec<u8> {
        match self {
            Charset::CapRtl => chars.iter().map(|&c| caprtl::from_unicode(c)).collect(),
            Charset::Iso8859_6 => chars.iter().map(|&c| iso8859_6::from_unicode(c)).collect(),
            Charset::Iso8859_8 => chars.iter().map(|&c| iso8859_8::from_unicode(c)).collect(),
            Charset::Cp1255 => chars.iter().map(|&c| cp1255::from_unicode(c)).collect(),
            Charset::Cp1256 => chars.iter().map(|&c| cp1256::from_unicode(c)).collect(),
            Charset::Isiri3342 => chars.iter().map(|&c| isiri_3342::from_unicode(c)).collect(),
            Charset::Utf8 => {
                let mut out = Vec::with_capacity(chars.len());
                let mut buf = [0u8; 4];
                for &c in chars {
                    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
                out
            }
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = UnknownCharset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "caprtl" => Ok(Charset::CapRtl),
            "8859-6" | "iso8859-6" => Ok(Charset::Iso8859_6),
            "8859-8" | "iso8859-8" => Ok(Charset::Iso8859_8),
            "cp1255" => Ok(Charset::Cp1255),
            "cp1256" => Ok(Charset::Cp1256),
            "isiri-3342" | "isiri3342" => Ok(Charset::Isiri3342),
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            other => Err(UnknownCharset(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_fromstr() {
        for cs in Charset::ALL {
            assert_eq!(cs.name().parse::<Charset>(), Ok(cs));
        }
    }

    #[test]
    fn aliases_and_case() {
        assert_eq!("ISO8859-8".parse::<Charset>(), Ok(Charset::Iso8859_8));
        assert_eq!("UTF8".parse::<Charset>(), Ok(Charset::Utf8));
        assert!("koi8-r".parse::<Charset>().is_err());
    }

    #[test]
    fn ascii_is_stable_in_every_charset() {
        let text: Vec<char> = "plain ascii 123.".chars().collect();
        let bytes: Vec<u8> = text.iter().map(|&c| c as u8).collect();
        for cs in Charset::ALL {
            assert_eq!(cs.decode(&bytes), text, "{cs}");
            assert_eq!(cs.encode(&text), bytes, "{cs}");
        }
    }

    #[test]
    fn utf8_multibyte_round_trip() {
        let text: Vec<char> = "\u{05E9}\u{05DC}\u{05D5}\u{05DD} \u{0627}".chars().collect();
        let bytes = Charset::Utf8.encode(&text);
        assert_eq!(Charset::Utf8.decode(&bytes), text);
    }

    #[test]
    fn utf8_invalid_input_is_replaced() {
        let decoded = Charset::Utf8.decode(&[b'a', 0xFF, b'b']);
        assert_eq!(decoded, vec!['a', '\u{FFFD}', 'b']);
    }
}
