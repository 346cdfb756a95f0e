//! Errors returned by input validation.
//!
//! A search that finds no path is not an error: it returns an empty path.

use std::fmt;

/// Why a call was rejected before any search work started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Malformed flat array, or a grid size, start, goal or obstacle outside
    /// the grid.
    InvalidInput(String),
    /// Physics parameters or configuration that make the state space
    /// ill-defined.
    InvalidParams(String),
}

impl PathError {
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InvalidParams(msg) => write!(f, "invalid physics parameters: {msg}"),
        }
    }
}

impl std::error::Error for PathError {}
