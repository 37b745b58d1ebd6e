//! Character sets used to decode template files read from disk.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Character set of template files on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileCharset {
    #[default]
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value
    Latin1,
    Ascii,
}

impl FileCharset {
    /// Canonical label for this charset
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "iso-8859-1",
            Self::Ascii => "ascii",
        }
    }

    /// Decode raw file bytes, returning `None` if they are not valid in this charset
    pub fn decode(&self, bytes: Vec<u8>) -> Option<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes).ok(),
            Self::Latin1 => Some(bytes.into_iter().map(char::from).collect()),
            Self::Ascii => {
                if bytes.is_ascii() {
                    String::from_utf8(bytes).ok()
                } else {
                    None
                }
            }
        }
    }
}

impl FromStr for FileCharset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            other => Err(format!("Unsupported file charset: {other}")),
        }
    }
}

impl fmt::Display for FileCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FileCharset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
