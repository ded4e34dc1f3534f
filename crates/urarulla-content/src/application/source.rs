//! Content sources: where the raw resource text comes from.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::LoadError;

/// The six bundled content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentResource {
    /// Degree/career records.
    Degrees,
    /// Characteristic definitions.
    CharacteristicInfos,
    /// Characteristic skills.
    CharacteristicSkills,
    /// Characteristic questions.
    CharacteristicQuestions,
    /// Industry questions.
    IndustryQuestions,
    /// Tricky questions.
    TrickyQuestions,
}

impl ContentResource {
    /// Every resource, in load order.
    pub const ALL: [Self; 6] = [
        Self::Degrees,
        Self::CharacteristicInfos,
        Self::CharacteristicSkills,
        Self::CharacteristicQuestions,
        Self::IndustryQuestions,
        Self::TrickyQuestions,
    ];

    /// File name of the resource inside a content directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Degrees => "Degrees.json",
            Self::CharacteristicInfos => "CharacteristicsInfos.json",
            Self::CharacteristicSkills => "CharacteristicsSkills.json",
            Self::CharacteristicQuestions => "CharacteristicsQuestions.json",
            Self::IndustryQuestions => "IndustryQuestions.json",
            Self::TrickyQuestions => "TrickyQuestions.json",
        }
    }
}

impl fmt::Display for ContentResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Supplies the raw JSON text of a content resource.
pub trait ContentSource: Send + Sync {
    /// Returns the text of `resource`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the resource is missing or unreadable.
    fn read(&self, resource: ContentResource) -> Result<String, LoadError>;
}

/// Reads resources from files in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryContentSource {
    root: PathBuf,
}

impl DirectoryContentSource {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for DirectoryContentSource {
    fn read(&self, resource: ContentResource) -> Result<String, LoadError> {
        let path = self.root.join(resource.file_name());
        tracing::debug!(path = %path.display(), "reading content resource");
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::Missing(resource)
            } else {
                LoadError::Read { resource, source }
            }
        })
    }
}

/// Holds resource text in memory, e.g. content embedded with `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentSource {
    resources: HashMap<ContentResource, String>,
}

impl InMemoryContentSource {
    /// Creates an empty source; every read fails with `Missing`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text of `resource`.
    #[must_use]
    pub fn with(mut self, resource: ContentResource, json: impl Into<String>) -> Self {
        self.resources.insert(resource, json.into());
        self
    }
}

impl ContentSource for InMemoryContentSource {
    fn read(&self, resource: ContentResource) -> Result<String, LoadError> {
        self.resources
            .get(&resource)
            .cloned()
            .ok_or(LoadError::Missing(resource))
    }
}
