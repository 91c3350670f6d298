use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures that can occur before solving begins.
///
/// An unsatisfiable puzzle is not an error: the solver reports it as a
/// `None` solution. This type covers malformed input rejected by the
/// loaders, plus I/O and serialization failures at the edges.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("structure file contains no cells")]
    EmptyGrid,

    #[error("word list contains no usable words")]
    EmptyWordlist,

    #[error("failed to serialize solution: {0}")]
    Json(#[from] serde_json::Error),
}
