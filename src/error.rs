use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons an insertion is rejected. The trie is left untouched in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    #[error("key is empty")]
    Empty,
    #[error("leading byte {byte:#04x} is outside the alphabet")]
    OutOfAlphabet { byte: u8 },
    #[error("key is already present")]
    Duplicate,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("token is empty after normalization")]
    Empty,
    #[error("token {token:?} contains characters outside the alphabet")]
    OutOfAlphabet { token: String },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open word list {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read word list")]
    Read(#[from] io::Error),
}
