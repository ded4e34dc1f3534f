//! Content loading errors.

use thiserror::Error;

use crate::application::source::ContentResource;

/// A content resource could not be turned into records.
///
/// Loading is all-or-nothing: any of these aborts the whole batch.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source had no data for the resource.
    #[error("content resource {0} is missing")]
    Missing(ContentResource),

    /// The resource could not be read.
    #[error("failed to read content resource {resource}: {source}")]
    Read {
        /// The resource being read.
        resource: ContentResource,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The resource did not deserialize into the expected shape.
    #[error("failed to deserialize content resource {resource}: {source}")]
    Deserialize {
        /// The resource being parsed.
        resource: ContentResource,
        /// Underlying parse failure.
        source: serde_json::Error,
    },
}
