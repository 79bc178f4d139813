use thiserror::Error;

/// Application-level error type for the CLI and collaborator modules.
///
/// The parser core never produces one of these: malformed markup degrades
/// to empty structures instead. Only file I/O around the core (profile,
/// templates, output) can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Profile not found: {path}")]
    ProfileNotFound { path: String },

    #[error("Failed to parse profile {path}: {source}")]
    ProfileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Templates folder not found: {path}")]
    TemplatesDirNotFound { path: String },

    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
