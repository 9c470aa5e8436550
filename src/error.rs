use std::error;
use std::fmt;

/// The error type for tree operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The queried entry does not exist in the tree, or the tree has no applicable entry.
    NotFound,
    /// Two entries could not be ordered relative to each other.
    Incomparable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "Entry not found."),
            Error::Incomparable => write!(f, "Entries cannot be ordered relative to each other."),
        }
    }
}

impl error::Error for Error {}
