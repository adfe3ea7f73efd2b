use std::path::{Path, PathBuf};

pub type SplashResult<T> = Result<T, SplashError>;

#[derive(thiserror::Error, Debug)]
pub enum SplashError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encode error: {0}")]
    Encode(String),

    /// Recoverable: glyph drawing degrades to vector line art.
    #[error("missing font resource: {0}")]
    MissingFont(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SplashError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn missing_font(msg: impl Into<String>) -> Self {
        Self::MissingFont(msg.into())
    }

    /// Return `true` for errors the composer may recover from locally.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingFont(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
