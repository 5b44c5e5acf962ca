use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures surfaced by the build pipeline.
///
/// Both `Config` and `Asset` are fatal for the current invocation; no partial
/// output is left behind because the output directory is only populated after
/// the clean step.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed JSON or a missing required field.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A locally referenced asset file is absent at build time.
    #[error("asset not found: {}", path.display())]
    Asset { path: PathBuf },

    /// Template parse or render failure.
    #[error("failed to render {name}")]
    Render {
        name: String,
        #[source]
        source: liquid::Error,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
