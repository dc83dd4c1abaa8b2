//! Typed errors for the record store boundary.
//!
//! The analysis engine itself defines no error kinds: every engine
//! operation is total over its input domain. Only persistence can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode store data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no decision with id {0}")]
    RecordNotFound(u64),
}
