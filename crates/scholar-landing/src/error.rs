use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("failed to read landing content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse landing content YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("landing content validation failed: {0}")]
    Validation(String),

    #[error("landing page rendering failed: {0}")]
    Render(#[from] askama::Error),
}
