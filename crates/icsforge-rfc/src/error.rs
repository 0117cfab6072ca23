use thiserror::Error;

/// Codec errors surfaced to callers.
///
/// Text parsing is best-effort and never fails; only reading a file can.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
