//! Error types surfaced by the library. Decode failures are per-tick and never fatal.

use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not parseable as JSON at all (syntax error or truncated payload).
    #[error("malformed payload at line {line}, column {column}: {source}")]
    Malformed {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
    /// Valid JSON that does not match the snapshot schema.
    #[error("payload does not match snapshot schema at line {line}, column {column}: {source}")]
    NonConforming {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        let (line, column) = (e.line(), e.column());
        match e.classify() {
            Category::Data => Self::NonConforming {
                line,
                column,
                source: e,
            },
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed {
                line,
                column,
                source: e,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid hub url '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported url scheme '{0}' (expected ws or wss)")]
    Scheme(String),
    #[error("failed to connect to hub: {0}")]
    Connect(#[source] tokio_tungstenite::tungstenite::Error),
    #[error("hub stream failed: {0}")]
    Stream(#[source] tokio_tungstenite::tungstenite::Error),
}
