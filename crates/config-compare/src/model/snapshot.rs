//! Configuration snapshots fetched from the backup backend.

/// Text shown in place of a snapshot the backend could not find.
pub const NOT_FOUND_PLACEHOLDER: &str = "File not found!";

/// Content of a stored configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotContent {
    /// Raw configuration text.
    Text(String),
    /// The backend answered but had no content for the path.
    NotFound {
        /// Message reported by the backend, if any.
        message: Option<String>,
    },
}

/// A stored configuration file at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    /// Storage path on the backend (used as the snapshot identifier).
    pub path: String,
    /// File name shown as the panel title.
    pub filename: String,
    /// The fetched content.
    pub content: SnapshotContent,
}

impl ConfigSnapshot {
    /// Create a snapshot with text content. The filename is derived from the path.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            filename: filename_from_path(&path).to_string(),
            path,
            content: SnapshotContent::Text(content.into()),
        }
    }

    /// Create a snapshot for a path the backend could not serve.
    pub fn not_found(path: impl Into<String>, message: Option<String>) -> Self {
        let path = path.into();
        Self {
            filename: filename_from_path(&path).to_string(),
            path,
            content: SnapshotContent::NotFound { message },
        }
    }

    /// Override the filename (the backend reports its own).
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Text to diff and display. Missing snapshots render as the placeholder.
    pub fn text(&self) -> &str {
        match &self.content {
            SnapshotContent::Text(text) => text,
            SnapshotContent::NotFound { .. } => NOT_FOUND_PLACEHOLDER,
        }
    }

    /// Whether the backend returned content for this snapshot.
    pub fn is_found(&self) -> bool {
        matches!(self.content, SnapshotContent::Text(_))
    }
}

/// Last path component, accepting both `/` and `\` separators.
pub fn filename_from_path(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}
