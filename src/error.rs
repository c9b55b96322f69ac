use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitChangesetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to create temporary directory")]
    TempDir(#[source] std::io::Error),

    #[error("Failed to clone {url}")]
    Clone {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("Revision {revision} could not be resolved")]
    Resolution {
        revision: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to diff {start}..{finish}")]
    Extraction {
        start: String,
        finish: String,
        #[source]
        source: git2::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GitChangesetError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wrapped_git_error_is_reported_once() {
        let err = GitChangesetError::Resolution {
            revision: "abc".to_string(),
            source: git2::Error::from_str("object not found"),
        };

        assert_eq!(err.to_string(), "Revision abc could not be resolved");
        assert_eq!(err.source().unwrap().to_string(), "object not found");
    }
}
