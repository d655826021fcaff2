use std::{io, path::PathBuf};

use pathview_core::{LogError, PathError, ResolveError};
use thiserror::Error;

/// Errors that stop the dashboard before it can serve.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("cannot plot trajectory: {0}")]
    Path(#[from] PathError),

    #[error("failed to serialize figure")]
    Render(#[from] serde_json::Error),

    #[error("failed to write {}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start server")]
    Bind(#[from] warp::Error),
}
