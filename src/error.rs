use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {resource}")]
    Load {
        resource: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {resource}: {message}")]
    Parse { resource: String, message: String },
    #[error("{kind} not found: '{key}'")]
    NotFound { kind: String, key: String },
}

impl Error {
    pub(crate) fn load(resource: impl Into<String>, source: std::io::Error) -> Self {
        Error::Load {
            resource: resource.into(),
            source,
        }
    }

    pub(crate) fn parse(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            resource: resource.into(),
            message: message.into(),
        }
    }

    pub(crate) fn not_found(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Error::NotFound {
            kind: kind.into(),
            key: key.into(),
        }
    }

    /// True for failures raised while reading or parsing a backing resource.
    pub fn is_load(&self) -> bool {
        matches!(self, Error::Load { .. } | Error::Parse { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
