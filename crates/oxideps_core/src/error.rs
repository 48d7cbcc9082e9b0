use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort a whole extraction.
///
/// Problems with a single construct never surface here; the classifier skips
/// them instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Source not given")]
    InvalidInput,

    #[error("Failed to parse source: {}", .messages.join("; "))]
    Parse { messages: Vec<String> },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid options in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_joins_messages() {
        let err = Error::Parse {
            messages: vec!["Unexpected token".to_string(), "Expected `;`".to_string()],
        };
        assert_eq!(err.to_string(), "Failed to parse source: Unexpected token; Expected `;`");
    }

    #[test]
    fn test_read_error_names_path() {
        let err = Error::Read {
            path: PathBuf::from("/missing/file.ts"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read /missing/file.ts: not found");
    }
}
