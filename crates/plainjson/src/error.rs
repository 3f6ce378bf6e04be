use thiserror::Error;

/// Numeric failure codes carried by [`Error`].
pub mod codes {
    /// Nesting deeper than the configured maximum.
    pub const DEPTH: u32 = 1;
    /// Malformed structure (underflow or mode mismatch).
    pub const STATE_MISMATCH: u32 = 2;
    /// Raw control character inside a string.
    pub const CTRL_CHAR: u32 = 3;
    pub const SYNTAX: u32 = 4;
    pub const UTF8: u32 = 5;
    /// Cyclic structure detected while normalizing.
    pub const RECURSION: u32 = 6;
    pub const INF_OR_NAN: u32 = 7;
    pub const UNSUPPORTED_TYPE: u32 = 8;
    pub const INVALID_PROPERTY_NAME: u32 = 9;
    /// Unpaired surrogate in a string escape.
    pub const UTF16: u32 = 10;
}

static MESSAGES: &[(u32, &str)] = &[
    (codes::DEPTH, "Maximum stack depth exceeded"),
    (codes::STATE_MISMATCH, "Underflow or the modes mismatch"),
    (codes::CTRL_CHAR, "Unexpected control character found"),
    (codes::SYNTAX, "Syntax error"),
    (
        codes::UTF8,
        "Malformed UTF-8 characters, possibly incorrectly encoded",
    ),
    (codes::RECURSION, "Recursion detected"),
    (codes::INF_OR_NAN, "Inf and NaN cannot be JSON encoded"),
    (codes::UNSUPPORTED_TYPE, "Type is not supported"),
    (
        codes::INVALID_PROPERTY_NAME,
        "The decoded property name is invalid",
    ),
    (
        codes::UTF16,
        "Malformed UTF-16 characters, possibly incorrectly encoded",
    ),
];

const UNKNOWN_MESSAGE: &str = "Unknown JSON encoding/decoding error";

/// Encode or decode failure: a numeric code plus the resolved message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Error {
    code: u32,
    message: &'static str,
}

impl Error {
    /// Builds an error from a failure code; unrecognized codes resolve to a
    /// generic message.
    pub fn from_code(code: u32) -> Self {
        let message = MESSAGES
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(UNKNOWN_MESSAGE, |(_, m)| m);
        Self { code, message }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Classifies a serde_json failure. serde_json exposes detail only
    /// through its rendered message, so the conditions with a better code
    /// than plain syntax are sniffed from it.
    pub(crate) fn from_codec(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        let rendered = err.to_string();
        let code = match err.classify() {
            Category::Syntax | Category::Eof => {
                if rendered.contains("recursion limit exceeded") {
                    codes::DEPTH
                } else if rendered.contains("control character") {
                    codes::CTRL_CHAR
                } else if rendered.contains("surrogate") || rendered.contains("hex escape") {
                    // Unpaired surrogates surface as "lone leading surrogate
                    // in hex escape" or "unexpected end of hex escape".
                    codes::UTF16
                } else {
                    codes::SYNTAX
                }
            }
            Category::Data => codes::UNSUPPORTED_TYPE,
            Category::Io => 0,
        };
        Self::from_code(code)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
