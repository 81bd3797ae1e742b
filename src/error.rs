use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("{op} {path}: invalid argument")]
    InvalidArgument { op: String, path: String },

    #[error("{op} {path}: file does not exist")]
    NotExist { op: String, path: String },

    #[error("{0}: not a directory")]
    NotADirectory(String),

    #[error("{0}: is a directory")]
    IsADirectory(String),

    #[error("file already closed")]
    Closed,
}

impl VfsError {
    pub fn invalid(op: &str, path: &str) -> Self {
        VfsError::InvalidArgument {
            op: op.into(),
            path: path.into(),
        }
    }

    pub fn not_exist(op: &str, path: &str) -> Self {
        VfsError::NotExist {
            op: op.into(),
            path: path.into(),
        }
    }
}

pub type VfsResult<T> = Result<T, VfsError>;
