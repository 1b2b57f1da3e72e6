//! Error types of the dataset pipeline.

use crate::dataset::Split;
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The annotation document misses a required section or field, or is
    /// internally inconsistent.
    #[error("malformed annotation document: {0}")]
    Parse(String),
    /// The dataset provides no annotation document for the split.
    #[error("the {0} split is not available")]
    UnsupportedSplit(Split),
    /// An id is referenced but was never recorded while indexing.
    #[error("{kind} id {id} is not recorded in the annotation index")]
    NotFound { kind: IdKind, id: u64 },
    #[error("index {index} is out of range for dataset of size {size}")]
    Index { index: usize, size: usize },
    #[error("the dataset is not prepared")]
    NotPrepared,
    #[error("failed to open '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// The kind of id carried by [Error::NotFound].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Image,
    Annotation,
    Category,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "image",
            Self::Annotation => "annotation",
            Self::Category => "category",
        };
        write!(f, "{}", name)
    }
}
