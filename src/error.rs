use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing event name")]
    MissingEvent,
    #[error("Failed writing hooks.log: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed writing hooks.log: {0}")]
    Environment(#[source] io::Error),
}
